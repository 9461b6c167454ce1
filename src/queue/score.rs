//! The fair-score key and the fair order built from it.

use std::collections::HashMap;

use super::rank::arrival_rank_of;
use crate::session::Song;

/// Composite ordering key for songs scheduled by fairness.
///
/// Field order is significance order: the derived `Ord` compares `round`
/// first, then `arrival`, then `submitted_at`, so a lower tier can never
/// outweigh a higher one whatever their magnitudes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct FairScore {
    /// The owner's Nth song of the session.
    pub round: usize,
    /// Owner's arrival rank.
    pub arrival: usize,
    pub submitted_at: u64,
}

impl FairScore {
    pub(crate) fn of(
        song: &Song,
        rounds: &HashMap<&str, usize>,
        arrivals: &HashMap<&str, usize>,
    ) -> Self {
        Self {
            round: rounds.get(song.id.as_str()).copied().unwrap_or(0),
            arrival: arrival_rank_of(arrivals, &song.owner_id),
            submitted_at: song.submitted_at,
        }
    }
}

/// Sort `songs` ascending by [`FairScore`]. Stable, so exact ties keep input order.
pub(crate) fn fair_order<'a>(
    mut songs: Vec<&'a Song>,
    rounds: &HashMap<&str, usize>,
    arrivals: &HashMap<&str, usize>,
) -> Vec<&'a Song> {
    songs.sort_by_cached_key(|s| FairScore::of(s, rounds, arrivals));
    songs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queue::rank::{UNKNOWN_ARRIVAL_RANK, arrival_ranks, round_indices};
    use crate::queue::tests::{participant, song};

    #[test]
    fn round_outweighs_any_arrival_and_timestamp() {
        let early_round = FairScore {
            round: 0,
            arrival: UNKNOWN_ARRIVAL_RANK,
            submitted_at: u64::MAX,
        };
        let later_round = FairScore {
            round: 1,
            arrival: 0,
            submitted_at: 0,
        };
        assert!(early_round < later_round);
    }

    #[test]
    fn arrival_outweighs_timestamp() {
        let first_arrival = FairScore {
            round: 0,
            arrival: 0,
            submitted_at: 1_000_000_000_000,
        };
        let second_arrival = FairScore {
            round: 0,
            arrival: 1,
            submitted_at: 1,
        };
        assert!(first_arrival < second_arrival);
    }

    #[test]
    fn fair_order_interleaves_rounds_by_arrival() {
        let roster = [participant("b", 20), participant("a", 10)];
        let songs = [
            song("b1", "b", 1),
            song("b2", "b", 2),
            song("a1", "a", 3),
            song("a2", "a", 4),
        ];
        let refs: Vec<&Song> = songs.iter().collect();
        let rounds = round_indices(&refs);
        let arrivals = arrival_ranks(&roster);

        let ordered: Vec<&str> = fair_order(refs, &rounds, &arrivals)
            .into_iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(ordered, vec!["a1", "b1", "a2", "b2"]);
    }

    #[test]
    fn unknown_owner_sorts_last_within_round() {
        let roster = [participant("a", 10)];
        let songs = [song("ghost1", "ghost", 0), song("a1", "a", 99)];
        let refs: Vec<&Song> = songs.iter().collect();
        let rounds = round_indices(&refs);
        let arrivals = arrival_ranks(&roster);

        let ordered: Vec<&str> = fair_order(refs, &rounds, &arrivals)
            .into_iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(ordered, vec!["a1", "ghost1"]);
    }
}
