//! Plain-text rendering of a parsed [`Song`].
//!
//! Metadata is written as `{tag: value}` directives, so a chords-above
//! rendering parses back into the same fields, sections, lines and chords.
//! The inline rendering keeps lyrics and chord order, but chords on
//! lyric-less lines collapse onto column 0.

use crate::parser::tags::MetaField;
use crate::types::{Section, Song};

/// Chord layout used when rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// Chord rows printed above lyric rows.
    #[default]
    Above,
    /// `[chord]` markers inside the lyric rows.
    Inline,
}

/// Directive that ends the title heuristics when a song has no metadata.
const NEW_SONG: &str = "{new_song}";

/// Render with chord rows above lyrics.
pub fn render_above(song: &Song) -> String {
    render(song, Layout::Above)
}

/// Render with inline `[chord]` markers.
pub fn render_inline(song: &Song) -> String {
    render(song, Layout::Inline)
}

/// Render a song as a chord chart in the given layout.
///
/// Set metadata fields come first as directives, then one block per
/// section headed by a `[Label]` line, with blocks separated by a blank
/// line.
pub fn render(song: &Song, layout: Layout) -> String {
    let mut blocks: Vec<String> = Vec::new();

    let header = render_header(song);
    let unlabeled_start = song.sections.first().is_some_and(|s| s.label.is_empty());
    if !header.is_empty() {
        blocks.push(header);
    } else if unlabeled_start {
        // Otherwise the first lyric line would read back as the title.
        blocks.push(NEW_SONG.to_string());
    }

    blocks.extend(song.sections.iter().map(|section| render_section(section, layout)));
    blocks.join("\n\n")
}

fn render_header(song: &Song) -> String {
    [
        (MetaField::Title, &song.title),
        (MetaField::Artist, &song.artist),
        (MetaField::Key, &song.key),
        (MetaField::Tempo, &song.tempo),
        (MetaField::Ccli, &song.ccli),
        (MetaField::Copyright, &song.copyright),
    ]
    .into_iter()
    .filter(|(_, value)| !value.is_empty())
    .map(|(field, value)| format!("{{{}: {value}}}", field.tag()))
    .collect::<Vec<_>>()
    .join("\n")
}

fn render_section(section: &Section, layout: Layout) -> String {
    let mut rows: Vec<String> = Vec::new();
    if !section.label.is_empty() {
        rows.push(format!("[{}]", section.label));
    }

    for (i, line) in section.lines.iter().enumerate() {
        match layout {
            Layout::Above => {
                let chord_row = line.chord_line();
                if !chord_row.is_empty() {
                    rows.push(chord_row);
                }
                if !line.lyrics.is_empty() {
                    rows.push(line.lyrics.clone());
                }
                // A chord row directly above plain lyrics would be merged into them.
                let next_is_plain =
                    section.lines.get(i + 1).is_some_and(|next| next.chords.is_empty());
                if line.is_chord_only() && next_is_plain {
                    rows.push(String::new());
                }
            }
            Layout::Inline => rows.push(line.to_inline()),
        }
    }

    rows.join("\n")
}
