use thiserror::Error;

/// Why a session mutation was rejected. The session is left untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("unknown song: {0}")]
    UnknownSong(String),

    #[error("unknown participant: {0}")]
    UnknownParticipant(String),

    #[error("participant already joined: {0}")]
    DuplicateParticipant(String),

    #[error("song id already in use: {0}")]
    DuplicateSong(String),

    /// A required text field was empty or whitespace.
    #[error("{0} must not be blank")]
    BlankField(&'static str),

    #[error("song already played: {0}")]
    AlreadyPlayed(String),
}

pub type Result<T> = std::result::Result<T, SessionError>;
