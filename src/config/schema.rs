use std::path::PathBuf;

use serde::Deserialize;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/jamq/config.toml` or `~/.config/jamq/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `JAMQ__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub session: SessionSettings,
    pub display: DisplaySettings,
    pub output: OutputSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    /// Script replayed when no path is given on the command line.
    pub script: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Which song fields make up a queue line, and in what order.
    ///
    /// Example: ["owner", "title", "artist"]
    pub fields: Vec<SongField>,
    /// Separator used to join `fields`.
    pub separator: String,
    /// Prefix each line with its 1-based queue position.
    pub numbered: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            fields: vec![SongField::Owner, SongField::Title, SongField::Artist],
            separator: " - ".to_string(),
            numbered: true,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Default `env_logger` filter; `RUST_LOG` wins when set.
    pub level: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// One display line per queued song.
    #[default]
    #[serde(alias = "text")]
    Lines,
    /// The whole session snapshot as TOML.
    Toml,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SongField {
    Title,
    Artist,
    /// Display name of the participant who submitted the song.
    #[serde(alias = "participant", alias = "submitter")]
    Owner,
    Status,
}
