use crate::config::SongField;
use crate::session::Song;

/// Build a display line for a song from the configured `fields` and separator.
///
/// Blank fields are skipped; the title is used when nothing else was produced.
pub fn display_from_fields(song: &Song, fields: &[SongField], sep: &str) -> String {
    let mut parts: Vec<String> = Vec::new();

    for f in fields {
        let value = match f {
            SongField::Title => song.title.trim(),
            SongField::Artist => song.artist.trim(),
            SongField::Owner => song.owner_name.trim(),
            SongField::Status => song.status.label(),
        };
        if !value.is_empty() {
            parts.push(value.to_string());
        }
    }

    if parts.is_empty() {
        song.title.clone()
    } else {
        parts.join(sep)
    }
}

/// Render the queue as lines, optionally numbered from 1.
pub fn queue_lines(
    songs: &[&Song],
    fields: &[SongField],
    sep: &str,
    numbered: bool,
) -> Vec<String> {
    songs
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let line = display_from_fields(s, fields, sep);
            if numbered {
                format!("{:>3}. {line}", i + 1)
            } else {
                line
            }
        })
        .collect()
}
