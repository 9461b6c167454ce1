//! Queue rebalancing.
//!
//! Every mutation of a session recomputes the whole queue from a snapshot of
//! its songs, its participants and the order the queue had before. Songs are
//! scheduled round by round (everyone's first song before anyone's second),
//! earlier arrivals first within a round. Stolen songs, the ones the group
//! dragged by hand, keep the slot they were dragged to.
//!
//! The result always holds every unplayed song exactly once, whatever state
//! the previous order is in.

mod assemble;
mod rank;
mod score;
mod stolen;

use std::collections::HashSet;

use log::debug;

use crate::session::{Participant, Song};

pub use rank::UNKNOWN_ARRIVAL_RANK;
pub use score::FairScore;

/// Compute the queue order: ids of every song not yet played, in play order.
///
/// `all_songs` includes played songs, which only count toward their owner's
/// round history. `participants` may be in any order. `previous` is the queue
/// as it was last shown; it may be stale, empty or name songs that no longer
/// exist. When `all_songs` repeats an id, the first record wins.
pub fn rebalance(
    all_songs: &[Song],
    participants: &[Participant],
    previous: &[String],
) -> Vec<String> {
    let songs = unique_songs(all_songs);
    let rounds = rank::round_indices(&songs);
    let arrivals = rank::arrival_ranks(participants);

    let active: Vec<&Song> = songs.iter().copied().filter(|s| s.is_active()).collect();
    let stolen: Vec<&Song> = active.iter().copied().filter(|s| s.stolen).collect();

    let placed = stolen::allocate(&stolen, previous, active.len());
    let unplaced: Vec<&Song> = active
        .iter()
        .copied()
        .filter(|s| !s.stolen)
        .chain(placed.demoted)
        .collect();

    let fair = score::fair_order(unplaced, &rounds, &arrivals);
    assemble::assemble(placed.slots, fair)
}

fn unique_songs(all_songs: &[Song]) -> Vec<&Song> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(all_songs.len());
    all_songs
        .iter()
        .filter(|&s| {
            let first = seen.insert(s.id.as_str());
            if !first {
                debug!("ignoring duplicate record for song {}", s.id);
            }
            first
        })
        .collect()
}
