use serde::{Deserialize, Serialize};

/// Where a song's chords come from. Carried along for the UI, ignored by ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum ChordSource {
    Link { url: String },
    Screenshot { image: String },
    #[default]
    AutoSearch,
}

/// Playback status of a submitted song.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayStatus {
    #[default]
    NotPlayed,
    Playing,
    Played,
}

impl PlayStatus {
    pub fn label(self) -> &'static str {
        match self {
            PlayStatus::NotPlayed => "queued",
            PlayStatus::Playing => "playing",
            PlayStatus::Played => "played",
        }
    }
}

/// A song submitted by a participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub id: String,
    pub owner_id: String,
    /// Copy of the owner's display name taken at submission time.
    pub owner_name: String,
    pub title: String,
    pub artist: String,
    /// Monotonic submission timestamp; breaks ties in the fair order.
    pub submitted_at: u64,
    #[serde(default)]
    pub status: PlayStatus,
    /// Set when the group dragged the song to a hand-picked slot.
    #[serde(default)]
    pub stolen: bool,
    #[serde(default)]
    pub played_at: Option<u64>,
    #[serde(default)]
    pub chords: ChordSource,
}

impl Song {
    /// True while the song still belongs in the queue.
    pub fn is_active(&self) -> bool {
        self.status != PlayStatus::Played
    }
}

/// Someone who joined the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    pub user_id: String,
    pub name: String,
    /// When they joined. Fairness ranks by this, never by roster position.
    pub joined_at: u64,
}

/// The caller-supplied part of a new song.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongDraft {
    pub id: String,
    pub owner_id: String,
    pub title: String,
    #[serde(default)]
    pub artist: String,
    #[serde(default)]
    pub chords: ChordSource,
}
