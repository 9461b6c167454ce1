use crate::config::LogSettings;

/// Start `env_logger` on stderr. `RUST_LOG` takes precedence over `log.level`.
pub fn init(settings: &LogSettings) {
    let env = env_logger::Env::default().default_filter_or(settings.level.as_str());
    // A logger may already be installed when embedded; keep that one.
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}
