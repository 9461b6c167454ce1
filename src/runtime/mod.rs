use std::env;
use std::io::Write;
use std::path::PathBuf;

use log::{info, warn};

use crate::script::{Script, replay};

mod logging;
mod output;
mod settings;

#[cfg(test)]
mod tests;

/// Replay the script named on the command line (or in `session.script`) and
/// print the resulting queue.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (settings, fallback) = settings::load_settings();
    logging::init(&settings.log);
    if let Some(msg) = fallback {
        warn!("{msg}");
    }

    let script_path = env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| settings.session.script.clone())
        .ok_or("no script given: pass a path or set session.script")?;

    let script = Script::from_path(&script_path)?;
    let session = replay(&script)?;
    info!(
        "{} participants, {} songs, {} queued",
        session.participants().len(),
        session.songs().len(),
        session.queue().len()
    );

    let rendered = output::render(&session, settings.output.format, &settings.display)?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
