//! Fairness ranking: how many songs an owner has had so far, and how early
//! each participant arrived.

use std::collections::HashMap;

use crate::session::{Participant, Song};

/// Arrival rank given to songs whose owner is missing from the roster.
///
/// Larger than any real rank, so such songs trail otherwise-equal songs.
pub const UNKNOWN_ARRIVAL_RANK: usize = usize::MAX;

/// Map each song id to its round index: the song's 0-based position in its
/// owner's submission history (played and active), oldest first.
pub(crate) fn round_indices<'a>(songs: &[&'a Song]) -> HashMap<&'a str, usize> {
    let mut histories: HashMap<&str, Vec<&Song>> = HashMap::new();
    for &song in songs {
        histories
            .entry(song.owner_id.as_str())
            .or_default()
            .push(song);
    }

    let mut rounds = HashMap::with_capacity(songs.len());
    for history in histories.values_mut() {
        // Stable: equal timestamps keep their submission-list order.
        history.sort_by_key(|s| s.submitted_at);
        for (round, &song) in history.iter().enumerate() {
            rounds.entry(song.id.as_str()).or_insert(round);
        }
    }
    rounds
}

/// Map each participant id to its arrival rank.
///
/// Ranks come from a fresh sort by `joined_at`; the roster's own order only
/// matters between participants that joined at the same instant.
pub(crate) fn arrival_ranks(participants: &[Participant]) -> HashMap<&str, usize> {
    let mut by_arrival: Vec<&Participant> = participants.iter().collect();
    by_arrival.sort_by_key(|p| p.joined_at);

    let mut ranks = HashMap::with_capacity(by_arrival.len());
    for (rank, p) in by_arrival.into_iter().enumerate() {
        ranks.entry(p.id.as_str()).or_insert(rank);
    }
    ranks
}

/// Arrival rank of `owner_id`, or [`UNKNOWN_ARRIVAL_RANK`] when they never joined.
pub(crate) fn arrival_rank_of(ranks: &HashMap<&str, usize>, owner_id: &str) -> usize {
    ranks.get(owner_id).copied().unwrap_or(UNKNOWN_ARRIVAL_RANK)
}
