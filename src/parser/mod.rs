//! Chord chart parser.
//!
//! Reads both chart conventions in one forward pass:
//! - chords-above-lyrics, with the title and artist on the first lines
//! - ChordPro-style `{tag:value}` directives and inline `[chord]` markers
//!
//! Either may appear in the same document. Parsing never fails; anything
//! unrecognized becomes literal lyric text.

pub mod tags;

use crate::chord::{chords_from_line, has_inline_markers, is_chord_only_line, split_inline};
use crate::constants::parser::METADATA_SCAN_LINES;
use crate::types::{Line, Section, Song, SongMetadata};

pub use tags::section_label;
use tags::{scan_directives, Directive, MetaField};

/// Where the title/artist heuristics stand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Preamble {
    /// The next content line may be the title.
    Title,
    /// The next qualifying line may be the artist.
    Artist,
    /// Heuristics are done; every line is song content.
    Body,
}

/// Outcome of offering a line to the preamble heuristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Heading {
    Title,
    Artist,
    Content,
}

impl Preamble {
    /// Offer a non-blank, non-directive, non-label line.
    fn offer(&mut self, trimmed: &str) -> Heading {
        let bracketed = trimmed.starts_with('{') || trimmed.starts_with('[');
        match *self {
            Self::Title if !bracketed => {
                *self = Self::Artist;
                Heading::Title
            }
            Self::Artist
                if !bracketed && !has_inline_markers(trimmed) && !is_chord_only_line(trimmed) =>
            {
                *self = Self::Body;
                Heading::Artist
            }
            _ => {
                *self = Self::Body;
                Heading::Content
            }
        }
    }
}

/// A chords-above line waiting for the lyrics below it.
#[derive(Debug, Default)]
enum PendingChords<'a> {
    #[default]
    None,
    Pending(&'a str),
}

impl<'a> PendingChords<'a> {
    /// Emit any buffered chord line as a lyric-less line.
    fn flush_into(&mut self, section: &mut Section) {
        if let Self::Pending(chord_line) = std::mem::take(self) {
            section.lines.push(Line::chords_only(chords_from_line(chord_line)));
        }
    }

    /// Buffer a chord line, flushing the previous one first.
    fn replace(&mut self, chord_line: &'a str, section: &mut Section) {
        self.flush_into(section);
        *self = Self::Pending(chord_line);
    }
}

/// Fill the song field a directive names. Unknown tags are ignored.
fn apply_directive(song: &mut Song, directive: Directive) {
    let Some(field) = directive.field() else {
        tracing::trace!("Ignoring directive {{{}}}", directive.tag);
        return;
    };
    let value = directive.value;
    match field {
        MetaField::Title => song.title = value,
        MetaField::Artist => song.artist = value,
        MetaField::Key => song.key = value,
        MetaField::Tempo => song.tempo = value,
        MetaField::Ccli => song.ccli = value,
        MetaField::Copyright => song.copyright = value,
    }
}

/// Parse a chord chart into a [`Song`].
///
/// Title and artist come from `{title:}`/`{artist:}` style directives, or
/// from the first two content lines when the chart has no directives.
/// Chord-only lines are held back and anchored to the lyric line below
/// them by column; inline `[chord]` markers are anchored by their position
/// in the stripped lyrics. Section labels such as `Verse 1:` or `[Chorus]`
/// start new sections.
pub fn parse(text: &str) -> Song {
    let mut song = Song { raw_text: text.to_string(), ..Song::default() };
    let mut section = Section::default();
    let mut preamble = Preamble::Title;
    let mut pending = PendingChords::None;

    for line in text.lines() {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            pending.flush_into(&mut section);
            continue;
        }

        let (directives, tag_only) = scan_directives(trimmed);
        for directive in directives {
            apply_directive(&mut song, directive);
        }
        if tag_only {
            preamble = Preamble::Body;
            continue;
        }

        if let Some(label) = section_label(trimmed) {
            pending.flush_into(&mut section);
            let finished = std::mem::replace(&mut section, Section::new(label));
            if !finished.is_empty() {
                song.sections.push(finished);
            }
            preamble = Preamble::Body;
            continue;
        }

        match preamble.offer(trimmed) {
            Heading::Title => {
                if song.title.is_empty() {
                    song.title = trimmed.to_string();
                }
                continue;
            }
            Heading::Artist => {
                if song.artist.is_empty() {
                    song.artist = trimmed.to_string();
                }
                continue;
            }
            Heading::Content => {}
        }

        if is_chord_only_line(trimmed) {
            // Keep the untrimmed line: its columns align with the lyrics below.
            pending.replace(line, &mut section);
            continue;
        }

        let lyrics = line.trim_end();
        let parsed = match std::mem::take(&mut pending) {
            PendingChords::Pending(chord_line) => Line::new(lyrics, chords_from_line(chord_line)),
            PendingChords::None => {
                let (stripped, chords) = split_inline(lyrics);
                Line::new(stripped, chords)
            }
        };
        tracing::trace!("Parsed line {:?} with {} chords", parsed.lyrics, parsed.chords.len());
        section.lines.push(parsed);
    }

    pending.flush_into(&mut section);
    if !section.is_empty() {
        song.sections.push(section);
    }

    tracing::debug!(
        "Parsed {:?}: {} sections, {} chords",
        song.title,
        song.sections.len(),
        song.chord_count()
    );
    song
}

/// Read only the title and artist from the first 30 lines.
pub fn parse_metadata(text: &str) -> SongMetadata {
    parse_metadata_with_limit(text, METADATA_SCAN_LINES)
}

/// Read only the title and artist from the first `max_lines` lines.
///
/// Applies the same heuristics as [`parse`], stopping as soon as both
/// fields are resolved. A missing title stays empty; falling back to a
/// file name is up to the caller.
pub fn parse_metadata_with_limit(text: &str, max_lines: usize) -> SongMetadata {
    let mut meta = SongMetadata::default();
    let mut preamble = Preamble::Title;

    for line in text.lines().take(max_lines) {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let (directives, tag_only) = scan_directives(trimmed);
        for directive in directives {
            match directive.field() {
                Some(MetaField::Title) => meta.title = directive.value,
                Some(MetaField::Artist) => meta.artist = directive.value,
                _ => {}
            }
        }
        if tag_only || section_label(trimmed).is_some() {
            preamble = Preamble::Body;
        } else {
            match preamble.offer(trimmed) {
                Heading::Title if meta.title.is_empty() => meta.title = trimmed.to_string(),
                Heading::Artist if meta.artist.is_empty() => meta.artist = trimmed.to_string(),
                _ => {}
            }
        }

        if !meta.title.is_empty() && !meta.artist.is_empty() {
            break;
        }
    }

    meta
}
