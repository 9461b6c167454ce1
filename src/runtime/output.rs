use crate::config::{DisplaySettings, OutputFormat};
use crate::session::{Session, queue_lines};

/// Render the final session the way `output.format` asks for.
pub fn render(
    session: &Session,
    format: OutputFormat,
    display: &DisplaySettings,
) -> Result<String, toml::ser::Error> {
    match format {
        OutputFormat::Lines => {
            let lines = queue_lines(
                &session.queued_songs(),
                &display.fields,
                &display.separator,
                display.numbered,
            );
            let mut out = lines.join("\n");
            if !out.is_empty() {
                out.push('\n');
            }
            Ok(out)
        }
        OutputFormat::Toml => toml::to_string(session),
    }
}
