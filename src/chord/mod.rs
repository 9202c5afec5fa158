//! Chord symbol grammar and chord-line tokenizing.
//!
//! A chord symbol is a root letter A-G with an optional accidental, any run
//! of quality markers, an optional interval, optional `sus`/`add` tails and
//! alterations, and an optional `/bass` note. Unicode accidentals are
//! normalized before matching.

pub mod notes;

use std::sync::LazyLock;

use regex::Regex;

use crate::types::ChordAtOffset;
use notes::normalize_accidentals;

/// Full-token chord grammar, matched against accidental-normalized text
/// with parentheses removed.
pub const CHORD_PATTERN: &str = concat!(
    r"^[A-G][#b]?",
    r"(?:maj|min|dim|aug|sus|add|m|M|△|Δ|ø|°)*",
    r"\d*",
    r"(?:(?:sus|add)\d*)*",
    r"(?:[#b]\d+)*",
    r"(?:/[A-G][#b]?)?$",
);

/// An inline `[chord]` marker; group 1 is the bracket contents.
pub const INLINE_MARKER_PATTERN: &str = r"\[([^\]]+)\]";

#[allow(clippy::expect_used)]
static RE_CHORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(CHORD_PATTERN).expect("valid regex: RE_CHORD"));

/// Regex for inline `[chord]` markers.
#[allow(clippy::expect_used)]
pub(crate) static RE_INLINE_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(INLINE_MARKER_PATTERN).expect("valid regex: RE_INLINE_MARKER")
});

/// Check whether a single token is a chord symbol.
///
/// Rejects plain words: "Am", "C/E" and "F#m7b5" pass, "Amazing" does not.
pub fn is_valid_chord(token: &str) -> bool {
    if !token.starts_with(|c: char| ('A'..='G').contains(&c)) {
        return false;
    }
    let normalized = normalize_accidentals(token);
    let stripped: String = normalized.chars().filter(|c| !matches!(c, '(' | ')')).collect();
    RE_CHORD.is_match(&stripped)
}

/// A whitespace-delimited token on a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineToken<'a> {
    /// Token text.
    pub text: &'a str,
    /// Char column of the token's first character.
    pub column: usize,
    /// Byte offset of the token within the line.
    pub byte_start: usize,
}

/// Split a line on whitespace, keeping each token's starting column.
///
/// Every whitespace character, tabs included, advances the column by one.
pub fn tokenize(line: &str) -> Vec<LineToken<'_>> {
    let mut tokens = Vec::new();
    let mut start: Option<(usize, usize)> = None;

    for (column, (byte, c)) in line.char_indices().enumerate() {
        if c.is_whitespace() {
            if let Some((col, b)) = start.take() {
                tokens.push(LineToken { text: &line[b..byte], column: col, byte_start: b });
            }
        } else if start.is_none() {
            start = Some((column, byte));
        }
    }
    if let Some((col, b)) = start {
        tokens.push(LineToken { text: &line[b..], column: col, byte_start: b });
    }

    tokens
}

/// A line is chord-only when it has at least one token and every token
/// is a chord symbol. Blank lines never are.
pub fn is_chord_only_line(line: &str) -> bool {
    let tokens = tokenize(line);
    !tokens.is_empty() && tokens.iter().all(|t| is_valid_chord(t.text))
}

/// Anchor each token of a chord-only line at its starting column.
pub fn chords_from_line(chord_line: &str) -> Vec<ChordAtOffset> {
    tokenize(chord_line)
        .into_iter()
        .map(|t| ChordAtOffset::new(t.text, t.column))
        .collect()
}

/// Whether a line contains any `[...]` marker.
pub(crate) fn has_inline_markers(line: &str) -> bool {
    RE_INLINE_MARKER.is_match(line)
}

/// Strip `[chord]` markers from a line.
///
/// Each chord is anchored at the length, in chars, of the stripped lyrics
/// emitted before its marker.
pub fn split_inline(line: &str) -> (String, Vec<ChordAtOffset>) {
    let mut lyrics = String::with_capacity(line.len());
    let mut chords = Vec::new();
    let mut column = 0;
    let mut last_end = 0;

    for caps in RE_INLINE_MARKER.captures_iter(line) {
        let (Some(whole), Some(chord)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let before = &line[last_end..whole.start()];
        lyrics.push_str(before);
        column += before.chars().count();
        chords.push(ChordAtOffset::new(chord.as_str(), column));
        last_end = whole.end();
    }
    lyrics.push_str(&line[last_end..]);

    (lyrics, chords)
}

/// Byte index of char `column` in `text`, clamped to the end.
pub(crate) fn byte_index(text: &str, column: usize) -> usize {
    text.char_indices().nth(column).map_or(text.len(), |(b, _)| b)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_valid_chords() {
        for chord in [
            "C", "Am", "G7", "F#m", "Bb", "Dm/A", "Csus4", "Cmaj7", "C7sus4", "Cadd9", "Ebmaj9",
            "Cdim7", "C°", "Cø7", "C△7", "CmM7", "Cm(maj7)", "C7b9", "C7#11", "G/B", "F♯m",
            "D♭", "Gsus2", "Aaug",
        ] {
            assert!(is_valid_chord(chord), "{chord} should be a chord");
        }
    }

    #[test]
    fn test_rejects_words() {
        for word in ["Amazing", "grace", "Chorus", "Dad", "Ebb", "Hm", "am", "", "(G)", "C/X", "Bad"] {
            assert!(!is_valid_chord(word), "{word} should not be a chord");
        }
    }

    #[test]
    fn test_chord_only_line() {
        assert!(is_chord_only_line("G Am C/E"));
        assert!(is_chord_only_line("  G\tD  "));
        assert!(!is_chord_only_line("G Am lyrics"));
        assert!(!is_chord_only_line(""));
        assert!(!is_chord_only_line("   \t "));
    }

    #[test]
    fn test_tokenize_columns() {
        let tokens = tokenize("G       D");
        assert_eq!(tokens.len(), 2);
        assert_eq!((tokens[0].text, tokens[0].column), ("G", 0));
        assert_eq!((tokens[1].text, tokens[1].column), ("D", 8));

        let tokens = tokenize("\tC  F♯m");
        assert_eq!((tokens[0].text, tokens[0].column), ("C", 1));
        assert_eq!((tokens[1].text, tokens[1].column, tokens[1].byte_start), ("F♯m", 4, 4));
    }

    #[test]
    fn test_split_inline_uses_stripped_columns() {
        let (lyrics, chords) = split_inline("[G]Amazing [D]grace how [G]sweet");
        assert_eq!(lyrics, "Amazing grace how sweet");
        let offsets: Vec<_> = chords.iter().map(|c| (c.chord.as_str(), c.offset)).collect();
        assert_eq!(offsets, vec![("G", 0), ("D", 8), ("G", 18)]);
    }

    #[test]
    fn test_split_inline_without_markers() {
        let (lyrics, chords) = split_inline("no chords here");
        assert_eq!(lyrics, "no chords here");
        assert!(chords.is_empty());
    }

    #[test]
    fn test_byte_index_multibyte() {
        assert_eq!(byte_index("héllo", 2), 3);
        assert_eq!(byte_index("abc", 10), 3);
    }
}
