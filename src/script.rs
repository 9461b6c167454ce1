//! Mutation scripts.
//!
//! A script is a TOML list of session events. Replaying one always ends in the
//! same session, which makes scripts handy both for reproducing a jam and for
//! checking the queue's behaviour end to end.
//!
//! ```toml
//! [[event]]
//! kind = "join"
//! participant = "p1"
//! name = "Ana"
//!
//! [[event]]
//! kind = "submit"
//! song = "s1"
//! owner = "p1"
//! title = "Wonderwall"
//! chords = { source = "link", url = "https://example.com/wonderwall" }
//! at = 1700000000000
//! ```
//!
//! `at` is optional and defaults to the event's position in the list.

use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::session::{ChordSource, Session, SessionError, SongDraft};

#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("failed to read script {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid script: {0}")]
    Parse(#[from] toml::de::Error),
}

/// A session event rejected during replay.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("event {index} ({kind}) rejected: {source}")]
pub struct ReplayError {
    /// 0-based position of the event in the script.
    pub index: usize,
    pub kind: &'static str,
    pub source: SessionError,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    #[serde(default, rename = "event")]
    pub events: Vec<Event>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Timestamp of the event; defaults to its position in the script.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub at: Option<u64>,
    #[serde(flatten)]
    pub action: Action,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Action {
    Join {
        participant: String,
        /// Account behind the participant; defaults to the participant id.
        #[serde(default)]
        user: Option<String>,
        name: String,
    },
    Submit {
        song: String,
        owner: String,
        title: String,
        #[serde(default)]
        artist: String,
        #[serde(default)]
        chords: ChordSource,
    },
    Edit {
        song: String,
        title: String,
        #[serde(default)]
        artist: String,
        #[serde(default)]
        chords: ChordSource,
    },
    Delete {
        song: String,
    },
    /// Start playing a song.
    Play {
        song: String,
    },
    /// Mark a song as done.
    Played {
        song: String,
    },
    /// Toggle the stolen flag.
    Steal {
        song: String,
    },
    /// Drag a song to a queue position.
    Move {
        song: String,
        to: usize,
    },
    Advance,
}

impl Action {
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Join { .. } => "join",
            Action::Submit { .. } => "submit",
            Action::Edit { .. } => "edit",
            Action::Delete { .. } => "delete",
            Action::Play { .. } => "play",
            Action::Played { .. } => "played",
            Action::Steal { .. } => "steal",
            Action::Move { .. } => "move",
            Action::Advance => "advance",
        }
    }

    /// Apply this action to `session`, returning the next session.
    pub fn apply(&self, session: &Session, at: u64) -> Result<Session, SessionError> {
        match self {
            Action::Join {
                participant,
                user,
                name,
            } => session.join(
                participant,
                user.as_deref().unwrap_or(participant),
                name,
                at,
            ),
            Action::Submit {
                song,
                owner,
                title,
                artist,
                chords,
            } => session.submit(
                SongDraft {
                    id: song.clone(),
                    owner_id: owner.clone(),
                    title: title.clone(),
                    artist: artist.clone(),
                    chords: chords.clone(),
                },
                at,
            ),
            Action::Edit {
                song,
                title,
                artist,
                chords,
            } => session.edit(song, title, artist, chords.clone()),
            Action::Delete { song } => session.delete(song),
            Action::Play { song } => session.mark_playing(song, at),
            Action::Played { song } => session.mark_played(song, at),
            Action::Steal { song } => session.toggle_steal(song),
            Action::Move { song, to } => session.move_song(song, *to),
            Action::Advance => Ok(session.advance(at)),
        }
    }
}

impl FromStr for Script {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

impl Script {
    pub fn from_path(path: &Path) -> Result<Self, ScriptError> {
        let text = fs::read_to_string(path).map_err(|source| ScriptError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let script: Script = text.parse()?;
        info!("loaded {} events from {}", script.events.len(), path.display());
        Ok(script)
    }
}

/// Replay every event of `script` on a fresh session, stopping at the first
/// rejected event.
pub fn replay(script: &Script) -> Result<Session, ReplayError> {
    let mut session = Session::new();
    for (index, event) in script.events.iter().enumerate() {
        let at = event.at.unwrap_or(index as u64);
        let kind = event.action.kind();
        debug!("event {index}: {kind} at {at}");

        session = event
            .action
            .apply(&session, at)
            .map_err(|source| ReplayError {
                index,
                kind,
                source,
            })?;
    }
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::PlayStatus;
    use std::fs;
    use tempfile::tempdir;

    const JAM: &str = r#"
[[event]]
kind = "join"
participant = "ana"
name = "Ana"

[[event]]
kind = "join"
participant = "ben"
user = "ben@example.com"
name = "Ben"

[[event]]
kind = "submit"
song = "b1"
owner = "ben"
title = "Hey Jude"
artist = "The Beatles"

[[event]]
kind = "submit"
song = "b2"
owner = "ben"
title = "Let It Be"

[[event]]
kind = "submit"
song = "a1"
owner = "ana"
title = "Wonderwall"
chords = { source = "link", url = "https://example.com/wonderwall" }

[[event]]
kind = "submit"
song = "a2"
owner = "ana"
title = "Zombie"
chords = { source = "screenshot", image = "zombie.png" }
"#;

    fn queue(session: &Session) -> Vec<&str> {
        session.queue().iter().map(String::as_str).collect()
    }

    #[test]
    fn parses_events_with_default_timestamps() {
        let script: Script = JAM.parse().unwrap();
        assert_eq!(script.events.len(), 6);
        assert_eq!(script.events[0].at, None);
        assert_eq!(script.events[0].action.kind(), "join");
        assert!(matches!(
            &script.events[4].action,
            Action::Submit { chords: ChordSource::Link { url }, .. } if url.ends_with("wonderwall")
        ));
        assert!(matches!(
            &script.events[3].action,
            Action::Submit { chords: ChordSource::AutoSearch, .. }
        ));
    }

    #[test]
    fn replay_schedules_rounds_fairly() {
        let script: Script = JAM.parse().unwrap();
        let session = replay(&script).unwrap();

        assert_eq!(queue(&session), vec!["a1", "b1", "a2", "b2"]);
        assert_eq!(session.participant("ben").unwrap().user_id, "ben@example.com");
        assert_eq!(session.participant("ana").unwrap().user_id, "ana");
    }

    #[test]
    fn replay_is_deterministic_with_steals_and_moves() {
        let text = format!(
            "{JAM}{}",
            r#"
[[event]]
kind = "move"
song = "b2"
to = 0

[[event]]
kind = "advance"

[[event]]
kind = "submit"
song = "a3"
owner = "ana"
title = "Creep"
"#
        );
        let script: Script = text.parse().unwrap();

        let first = replay(&script).unwrap();
        let second = replay(&script).unwrap();
        assert_eq!(first, second);

        // b2 was dragged to the front and then played first.
        assert_eq!(first.now_playing().unwrap().id, "b2");
        assert_eq!(queue(&first)[0], "b2");
        assert_eq!(first.queue().len(), 5);
    }

    #[test]
    fn explicit_timestamps_are_used() {
        let script: Script = r#"
[[event]]
kind = "join"
participant = "ana"
name = "Ana"
at = 500

[[event]]
kind = "join"
participant = "ben"
name = "Ben"
at = 100
"#
        .parse()
        .unwrap();

        let session = replay(&script).unwrap();
        assert_eq!(session.participant("ana").unwrap().joined_at, 500);
        assert_eq!(session.participant("ben").unwrap().joined_at, 100);
    }

    #[test]
    fn replay_reports_failing_event() {
        let script: Script = r#"
[[event]]
kind = "join"
participant = "ana"
name = "Ana"

[[event]]
kind = "played"
song = "nope"
"#
        .parse()
        .unwrap();

        let err = replay(&script).unwrap_err();
        assert_eq!(err.index, 1);
        assert_eq!(err.kind, "played");
        assert_eq!(err.source, SessionError::UnknownSong("nope".into()));
    }

    #[test]
    fn played_event_removes_song_from_queue() {
        let text = format!(
            "{JAM}{}",
            r#"
[[event]]
kind = "played"
song = "a1"
"#
        );
        let session = replay(&text.parse().unwrap()).unwrap();

        assert_eq!(session.song("a1").unwrap().status, PlayStatus::Played);
        assert_eq!(queue(&session), vec!["b1", "a2", "b2"]);
    }

    #[test]
    fn unknown_kind_is_a_parse_error() {
        let err = r#"
[[event]]
kind = "dance"
"#
        .parse::<Script>()
        .unwrap_err();
        assert!(matches!(err, ScriptError::Parse(_)));
    }

    #[test]
    fn demo_script_keeps_dragged_song_in_place() {
        let script: Script = include_str!("../demos/friday-jam.toml").parse().unwrap();
        let session = replay(&script).unwrap();

        assert_eq!(session.now_playing().unwrap().id, "a1");
        assert_eq!(queue(&session), vec!["a1", "b2", "b1", "c1"]);
    }

    #[test]
    fn from_path_reads_script_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("jam.toml");
        fs::write(&path, JAM).unwrap();

        let script = Script::from_path(&path).unwrap();
        assert_eq!(script.events.len(), 6);
    }

    #[test]
    fn from_path_reports_missing_file() {
        let dir = tempdir().unwrap();
        let err = Script::from_path(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ScriptError::Read { .. }));
    }
}
