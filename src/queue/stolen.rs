//! Slot allocation for stolen songs.
//!
//! A stolen song goes back to the slot it occupied in the previous order,
//! clamped into the current queue length. Collisions search later slots first,
//! then earlier ones, so the song drifts as little as possible and prefers
//! being pushed back over jumping ahead.

use std::collections::HashMap;

use log::debug;

use crate::session::Song;

/// Result of placing stolen songs.
pub(crate) struct StolenSlots<'a> {
    /// One entry per active slot; `Some` where a stolen song was placed.
    pub slots: Vec<Option<&'a Song>>,
    /// Stolen songs that got no slot this pass, in input order.
    pub demoted: Vec<&'a Song>,
}

/// Place each of `stolen` (in the given order) into one of `total_slots` slots.
///
/// Songs missing from `previous`, or that find no free slot, are returned in
/// `demoted` and left to fair scheduling.
pub(crate) fn allocate<'a>(
    stolen: &[&'a Song],
    previous: &[String],
    total_slots: usize,
) -> StolenSlots<'a> {
    let mut slots: Vec<Option<&Song>> = vec![None; total_slots];
    let mut demoted: Vec<&Song> = Vec::new();
    if total_slots == 0 {
        demoted.extend_from_slice(stolen);
        return StolenSlots { slots, demoted };
    }

    let mut previous_index: HashMap<&str, usize> = HashMap::with_capacity(previous.len());
    for (i, id) in previous.iter().enumerate() {
        previous_index.entry(id.as_str()).or_insert(i);
    }

    for &song in stolen {
        let Some(&index) = previous_index.get(song.id.as_str()) else {
            debug!("stolen song {} missing from previous order; scheduling fairly", song.id);
            demoted.push(song);
            continue;
        };

        let wanted = index.min(total_slots - 1);
        match find_free_slot(&slots, wanted) {
            Some(slot) => {
                if slot != index {
                    debug!("stolen song {} moved from slot {index} to {slot}", song.id);
                }
                slots[slot] = Some(song);
            }
            None => {
                debug!("no free slot for stolen song {}; scheduling fairly", song.id);
                demoted.push(song);
            }
        }
    }

    StolenSlots { slots, demoted }
}

/// Find a free slot at `start`, else scanning forward to the end, else
/// backward from `start` toward 0.
fn find_free_slot(slots: &[Option<&Song>], start: usize) -> Option<usize> {
    (start..slots.len())
        .chain((0..start).rev())
        .find(|&i| slots[i].is_none())
}
