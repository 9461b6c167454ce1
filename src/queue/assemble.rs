use log::debug;

use crate::session::Song;

/// Merge pre-placed stolen songs with the fair order into the final id list.
///
/// Empty slots are filled left to right from `fair`. Slots left empty when
/// `fair` runs dry are dropped; fair songs left over once every slot is
/// filled are appended in order.
pub(crate) fn assemble<'a>(
    mut slots: Vec<Option<&'a Song>>,
    fair: Vec<&'a Song>,
) -> Vec<String> {
    let mut fair = fair.into_iter();
    for slot in slots.iter_mut().filter(|s| s.is_none()) {
        *slot = fair.next();
    }

    let overflow: Vec<&'a Song> = fair.collect();
    if !overflow.is_empty() {
        debug!("appending {} songs past the last slot", overflow.len());
    }

    slots
        .into_iter()
        .flatten()
        .chain(overflow)
        .map(|s| s.id.clone())
        .collect()
}
