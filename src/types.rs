//! Song document model.
//!
//! A [`Song`] is built wholesale by [`crate::parser::parse`]. The transposer
//! and Nashville converter rewrite chord strings in place; lyrics and
//! offsets never change after parsing.

use serde::{Deserialize, Serialize};

use crate::chord::byte_index;
use crate::layout::build_chord_line;

/// A chord symbol anchored to a character column of a line's lyrics.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChordAtOffset {
    /// Chord symbol as written (or as rewritten by a transform).
    pub chord: String,
    /// Zero-based char column into the lyrics; 0 is before the first character.
    pub offset: usize,
}

impl ChordAtOffset {
    /// Create a new chord anchor.
    pub fn new(chord: impl Into<String>, offset: usize) -> Self {
        Self { chord: chord.into(), offset }
    }
}

/// One lyric line with the chords sounding over it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    /// Lyric text, possibly empty for chord-only lines.
    pub lyrics: String,
    /// Chords in recorded order; offsets are non-decreasing.
    pub chords: Vec<ChordAtOffset>,
}

impl Line {
    /// Create a line from lyrics and chord anchors.
    pub fn new(lyrics: impl Into<String>, chords: Vec<ChordAtOffset>) -> Self {
        Self { lyrics: lyrics.into(), chords }
    }

    /// A line carrying chords but no lyrics.
    pub fn chords_only(chords: Vec<ChordAtOffset>) -> Self {
        Self { lyrics: String::new(), chords }
    }

    /// Whether the line has no lyric text.
    pub fn is_chord_only(&self) -> bool {
        self.lyrics.is_empty()
    }

    /// Chord row to print above the lyrics.
    ///
    /// Colliding chords are separated by a single space instead of
    /// overwriting each other. Empty when the line has no chords.
    pub fn chord_line(&self) -> String {
        build_chord_line(self.chords.iter().map(|c| (c.chord.as_str(), c.offset)))
    }

    /// Lyrics with `[chord]` markers inserted at each offset.
    ///
    /// Offsets past the end of the lyrics are clamped to the end.
    pub fn to_inline(&self) -> String {
        let mut out = self.lyrics.clone();
        // Right to left, so earlier byte positions stay valid.
        for anchor in self.chords.iter().rev() {
            let at = byte_index(&self.lyrics, anchor.offset);
            out.insert_str(at, &format!("[{}]", anchor.chord));
        }
        out
    }
}

/// A labeled block of lines (verse, chorus, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Free-text label such as "Verse 1"; empty for unlabeled material.
    pub label: String,
    /// Lines in document order.
    pub lines: Vec<Line>,
}

impl Section {
    /// Create an empty section with a label.
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into(), lines: Vec::new() }
    }

    /// Whether the section holds no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// A parsed chord chart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    /// Song title; empty when none was found.
    pub title: String,
    /// Artist or subtitle.
    pub artist: String,
    /// Declared key, e.g. "G" or "Bb".
    pub key: String,
    /// Declared tempo, kept as written.
    pub tempo: String,
    /// CCLI song number.
    pub ccli: String,
    /// Copyright or footer line.
    pub copyright: String,
    /// Sections in document order.
    pub sections: Vec<Section>,
    /// The text this song was parsed from.
    pub raw_text: String,
}

impl Song {
    /// Iterate over every line of every section.
    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.sections.iter().flat_map(|s| s.lines.iter())
    }

    /// Iterate mutably over every chord anchor in the song.
    pub fn chords_mut(&mut self) -> impl Iterator<Item = &mut ChordAtOffset> {
        self.sections
            .iter_mut()
            .flat_map(|s| s.lines.iter_mut())
            .flat_map(|l| l.chords.iter_mut())
    }

    /// Total number of chord anchors.
    pub fn chord_count(&self) -> usize {
        self.lines().map(|l| l.chords.len()).sum()
    }
}

/// Title and artist, as resolved by the metadata-only parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongMetadata {
    /// Song title; empty when none was found.
    pub title: String,
    /// Artist or subtitle; empty when none was found.
    pub artist: String,
}
