use super::output::render;
use crate::config::{DisplaySettings, OutputFormat, SongField};
use crate::session::{ChordSource, Session, SongDraft};

fn session() -> Session {
    let draft = |id: &str, owner: &str, title: &str| SongDraft {
        id: id.into(),
        owner_id: owner.into(),
        title: title.into(),
        artist: String::new(),
        chords: ChordSource::AutoSearch,
    };

    Session::new()
        .join("ana", "u-ana", "Ana", 1)
        .and_then(|s| s.join("ben", "u-ben", "Ben", 2))
        .and_then(|s| s.submit(draft("b1", "ben", "Hey Jude"), 3))
        .and_then(|s| s.submit(draft("a1", "ana", "Wonderwall"), 4))
        .unwrap()
}

#[test]
fn render_lines_uses_display_settings() {
    let display = DisplaySettings {
        fields: vec![SongField::Owner, SongField::Title],
        separator: ": ".into(),
        numbered: false,
    };

    let out = render(&session(), OutputFormat::Lines, &display).unwrap();
    assert_eq!(out, "Ana: Wonderwall\nBen: Hey Jude\n");
}

#[test]
fn render_lines_of_empty_queue_is_empty() {
    let out = render(&Session::new(), OutputFormat::Lines, &DisplaySettings::default()).unwrap();
    assert!(out.is_empty());
}

#[test]
fn render_toml_emits_a_loadable_snapshot() {
    let s = session();
    let out = render(&s, OutputFormat::Toml, &DisplaySettings::default()).unwrap();
    assert!(out.contains("queue = ["));

    let back: Session = toml::from_str(&out).unwrap();
    assert_eq!(back, s);
}
