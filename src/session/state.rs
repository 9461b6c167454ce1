//! Session state and the mutations that drive it.
//!
//! A [`Session`] is an immutable snapshot: each mutation validates against the
//! current value and returns a new one with a freshly rebalanced queue. The
//! owner of the session swaps in the returned value, or keeps the old one when
//! the mutation fails.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::error::{Result, SessionError};
use super::model::{ChordSource, Participant, PlayStatus, Song, SongDraft};
use crate::queue::rebalance;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Ids of unplayed songs in play order.
    #[serde(default)]
    queue: Vec<String>,
    #[serde(default)]
    participants: Vec<Participant>,
    #[serde(default)]
    songs: Vec<Song>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue(&self) -> &[String] {
        &self.queue
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn song(&self, id: &str) -> Option<&Song> {
        self.songs.iter().find(|s| s.id == id)
    }

    pub fn participant(&self, id: &str) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }

    /// The song currently marked as playing, if any.
    pub fn now_playing(&self) -> Option<&Song> {
        self.songs.iter().find(|s| s.status == PlayStatus::Playing)
    }

    /// Songs in queue order.
    pub fn queued_songs(&self) -> Vec<&Song> {
        self.queue.iter().filter_map(|id| self.song(id)).collect()
    }

    /// Add a participant. Their arrival time feeds fairness ranking.
    pub fn join(&self, id: &str, user_id: &str, name: &str, joined_at: u64) -> Result<Self> {
        require("participant id", id)?;
        require("name", name)?;
        if self.participant(id).is_some() {
            return Err(SessionError::DuplicateParticipant(id.to_string()));
        }

        let mut next = self.clone();
        next.participants.push(Participant {
            id: id.to_string(),
            user_id: user_id.to_string(),
            name: name.trim().to_string(),
            joined_at,
        });
        info!("{} joined", name.trim());
        Ok(next.rebalanced())
    }

    /// Add a song on behalf of an existing participant.
    pub fn submit(&self, draft: SongDraft, submitted_at: u64) -> Result<Self> {
        require("song id", &draft.id)?;
        require("title", &draft.title)?;
        let owner = self
            .participant(&draft.owner_id)
            .ok_or_else(|| SessionError::UnknownParticipant(draft.owner_id.clone()))?;
        if self.song(&draft.id).is_some() {
            return Err(SessionError::DuplicateSong(draft.id));
        }

        let song = Song {
            owner_name: owner.name.clone(),
            id: draft.id,
            owner_id: draft.owner_id,
            title: draft.title.trim().to_string(),
            artist: draft.artist.trim().to_string(),
            submitted_at,
            status: PlayStatus::NotPlayed,
            stolen: false,
            played_at: None,
            chords: draft.chords,
        };
        info!("{} submitted {}", song.owner_name, song.title);

        let mut next = self.clone();
        next.songs.push(song);
        Ok(next.rebalanced())
    }

    /// Replace a song's descriptive fields. Ordering is unaffected.
    pub fn edit(
        &self,
        song_id: &str,
        title: &str,
        artist: &str,
        chords: ChordSource,
    ) -> Result<Self> {
        require("title", title)?;
        let mut next = self.clone();
        let song = next.song_mut(song_id)?;
        song.title = title.trim().to_string();
        song.artist = artist.trim().to_string();
        song.chords = chords;
        Ok(next.rebalanced())
    }

    pub fn delete(&self, song_id: &str) -> Result<Self> {
        let index = self.song_index(song_id)?;
        let mut next = self.clone();
        let removed = next.songs.remove(index);
        debug!("deleted {}", removed.id);
        Ok(next.rebalanced())
    }

    /// Start playing `song_id`. Whatever was playing before counts as played.
    pub fn mark_playing(&self, song_id: &str, at: u64) -> Result<Self> {
        let mut next = self.clone();
        ensure_unplayed(next.song_mut(song_id)?)?;

        for song in next.songs.iter_mut() {
            if song.status == PlayStatus::Playing && song.id != song_id {
                song.status = PlayStatus::Played;
                song.played_at = Some(at);
            }
        }
        next.song_mut(song_id)?.status = PlayStatus::Playing;
        Ok(next.rebalanced())
    }

    pub fn mark_played(&self, song_id: &str, at: u64) -> Result<Self> {
        let mut next = self.clone();
        let song = next.song_mut(song_id)?;
        ensure_unplayed(song)?;
        song.status = PlayStatus::Played;
        song.played_at = Some(at);
        Ok(next.rebalanced())
    }

    /// Flip the stolen flag. Unstealing hands the song back to fair scheduling.
    pub fn toggle_steal(&self, song_id: &str) -> Result<Self> {
        let mut next = self.clone();
        let song = next.song_mut(song_id)?;
        ensure_unplayed(song)?;
        song.stolen = !song.stolen;
        Ok(next.rebalanced())
    }

    /// Drag `song_id` to `to_index` in the queue and pin it there.
    ///
    /// Indices past the end move the song to the back.
    pub fn move_song(&self, song_id: &str, to_index: usize) -> Result<Self> {
        let mut next = self.clone();
        let song = next.song_mut(song_id)?;
        ensure_unplayed(song)?;
        song.stolen = true;

        let mut order: Vec<String> = next
            .queue
            .iter()
            .filter(|id| *id != song_id)
            .cloned()
            .collect();
        let to_index = to_index.min(order.len());
        order.insert(to_index, song_id.to_string());
        debug!("moved {song_id} to slot {to_index}");

        next.queue = order;
        Ok(next.rebalanced())
    }

    /// Finish the current song and start the head of the queue.
    pub fn advance(&self, at: u64) -> Self {
        let mut next = self.clone();
        for song in next.songs.iter_mut() {
            if song.status == PlayStatus::Playing {
                song.status = PlayStatus::Played;
                song.played_at = Some(at);
            }
        }
        let mut next = next.rebalanced();

        let head = next.queue.first().cloned();
        if let Some(head) = head {
            if let Ok(song) = next.song_mut(&head) {
                song.status = PlayStatus::Playing;
                info!("now playing {}", song.title);
            }
            next = next.rebalanced();
        }
        next
    }

    fn rebalanced(mut self) -> Self {
        self.queue = rebalance(&self.songs, &self.participants, &self.queue);
        self
    }

    fn song_index(&self, id: &str) -> Result<usize> {
        self.songs
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| SessionError::UnknownSong(id.to_string()))
    }

    fn song_mut(&mut self, id: &str) -> Result<&mut Song> {
        let index = self.song_index(id)?;
        Ok(&mut self.songs[index])
    }
}

fn require(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        Err(SessionError::BlankField(field))
    } else {
        Ok(())
    }
}

fn ensure_unplayed(song: &Song) -> Result<()> {
    if song.status == PlayStatus::Played {
        Err(SessionError::AlreadyPlayed(song.id.clone()))
    } else {
        Ok(())
    }
}
