//! Twelve-tone note arithmetic.
//!
//! Notes are indexed 0-11 from C. Every lookup normalizes the Unicode
//! accidentals `♯`/`♭` to ASCII first; rendering can restore them so a
//! chart written with Unicode glyphs keeps its glyphs after a transform.

use std::borrow::Cow;

use crate::constants::notes::{FLAT_NAMES, OCTAVE, SHARP_NAMES};

/// Unicode sharp sign.
pub const UNICODE_SHARP: char = '♯';
/// Unicode flat sign.
pub const UNICODE_FLAT: char = '♭';

/// Accidental attached to a note letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accidental {
    /// `#` or `♯`.
    Sharp,
    /// `b` or `♭`.
    Flat,
}

impl Accidental {
    /// Recognize an accidental character, ASCII or Unicode.
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '#' | UNICODE_SHARP => Some(Self::Sharp),
            'b' | UNICODE_FLAT => Some(Self::Flat),
            _ => None,
        }
    }
}

/// Which chromatic table a note is rendered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Spelling {
    /// C, C#, D, D#, ...
    #[default]
    Sharps,
    /// C, Db, D, Eb, ...
    Flats,
}

impl Spelling {
    /// The name table for this spelling.
    pub const fn table(self) -> &'static [&'static str; 12] {
        match self {
            Self::Sharps => &SHARP_NAMES,
            Self::Flats => &FLAT_NAMES,
        }
    }
}

/// The root of a chord symbol: letter plus optional accidental.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Root {
    /// Uppercase note letter A-G.
    pub letter: char,
    /// Accidental following the letter, if any.
    pub accidental: Option<Accidental>,
    /// Whether the accidental was written with a Unicode glyph.
    pub unicode: bool,
}

impl Root {
    /// Split a chord into its root and the verbatim remainder.
    ///
    /// The root is an uppercase letter A-G followed by at most one
    /// accidental. Returns `None` when the text does not start with a root.
    pub fn split(chord: &str) -> Option<(Self, &str)> {
        let mut chars = chord.char_indices();
        let (_, letter) = chars.next()?;
        if !('A'..='G').contains(&letter) {
            return None;
        }

        let mut rest_start = letter.len_utf8();
        let mut root = Self { letter, accidental: None, unicode: false };

        if let Some((idx, c)) = chars.next() {
            if let Some(accidental) = Accidental::from_char(c) {
                root.accidental = Some(accidental);
                root.unicode = c == UNICODE_SHARP || c == UNICODE_FLAT;
                rest_start = idx + c.len_utf8();
            }
        }

        Some((root, &chord[rest_start..]))
    }

    /// Chromatic index of this root, `None` for spellings outside the
    /// two tables (E#, Fb, B#, Cb).
    pub fn index(self) -> Option<u8> {
        note_index(&self.ascii())
    }

    /// Table implied by the written accidental: flat roots stay flat.
    pub const fn spelling(self) -> Spelling {
        match self.accidental {
            Some(Accidental::Flat) => Spelling::Flats,
            _ => Spelling::Sharps,
        }
    }

    /// ASCII rendering of this root.
    pub fn ascii(self) -> String {
        let mut out = String::with_capacity(2);
        out.push(self.letter);
        match self.accidental {
            Some(Accidental::Sharp) => out.push('#'),
            Some(Accidental::Flat) => out.push('b'),
            None => {}
        }
        out
    }
}

/// Replace `♯` with `#` and `♭` with `b`.
pub fn normalize_accidentals(text: &str) -> Cow<'_, str> {
    if text.contains([UNICODE_SHARP, UNICODE_FLAT]) {
        Cow::Owned(text.replace(UNICODE_SHARP, "#").replace(UNICODE_FLAT, "b"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Replace `#` with `♯` and `b` with `♭`.
pub fn to_unicode_accidentals(text: &str) -> String {
    text.replace('#', "♯").replace('b', "♭")
}

/// Chromatic index (0-11, C = 0) of a note name.
///
/// Case-insensitive; accepts any spelling present in either table.
pub fn note_index(name: &str) -> Option<u8> {
    let normalized = normalize_accidentals(name.trim());
    SHARP_NAMES
        .iter()
        .zip(FLAT_NAMES.iter())
        .position(|(sharp, flat)| {
            sharp.eq_ignore_ascii_case(&normalized) || flat.eq_ignore_ascii_case(&normalized)
        })
        .and_then(|idx| u8::try_from(idx).ok())
}

/// Shift a chromatic index by `semitones`, wrapping into 0-11.
pub fn shift(index: u8, semitones: i32) -> u8 {
    let wrapped = (i32::from(index) + semitones).rem_euclid(OCTAVE);
    // rem_euclid keeps the value in 0..12
    u8::try_from(wrapped).unwrap_or(0)
}

/// Name of the note at `index` (taken mod 12) in the given spelling.
pub fn note_name(index: u8, spelling: Spelling) -> &'static str {
    spelling.table()[usize::from(index % 12)]
}

/// Render a note, optionally with Unicode accidental glyphs.
pub fn spell(index: u8, spelling: Spelling, unicode: bool) -> String {
    let name = note_name(index, spelling);
    if unicode {
        to_unicode_accidentals(name)
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_note_index_both_tables() {
        assert_eq!(note_index("C"), Some(0));
        assert_eq!(note_index("C#"), Some(1));
        assert_eq!(note_index("Db"), Some(1));
        assert_eq!(note_index("Bb"), Some(10));
        assert_eq!(note_index("B"), Some(11));
    }

    #[test]
    fn test_note_index_case_and_unicode() {
        assert_eq!(note_index("f#"), Some(6));
        assert_eq!(note_index("EB"), Some(3));
        assert_eq!(note_index("G♯"), Some(8));
        assert_eq!(note_index("A♭"), Some(8));
    }

    #[test]
    fn test_note_index_unknown() {
        assert_eq!(note_index("H"), None);
        assert_eq!(note_index("Cb"), None);
        assert_eq!(note_index("E#"), None);
        assert_eq!(note_index(""), None);
    }

    #[test]
    fn test_shift_wraps_negative() {
        assert_eq!(shift(0, -1), 11);
        assert_eq!(shift(11, 1), 0);
        assert_eq!(shift(3, -27), 0);
        assert_eq!(shift(5, 24), 5);
    }

    #[test]
    fn test_root_split() {
        let (root, rest) = Root::split("F#m7").unwrap();
        assert_eq!(root.letter, 'F');
        assert_eq!(root.accidental, Some(Accidental::Sharp));
        assert!(!root.unicode);
        assert_eq!(rest, "m7");

        let (root, rest) = Root::split("B♭maj7").unwrap();
        assert_eq!(root.spelling(), Spelling::Flats);
        assert!(root.unicode);
        assert_eq!(root.index(), Some(10));
        assert_eq!(rest, "maj7");

        assert!(Root::split("am").is_none());
        assert!(Root::split("").is_none());
    }

    #[test]
    fn test_spell_unicode() {
        assert_eq!(spell(10, Spelling::Flats, true), "B♭");
        assert_eq!(spell(1, Spelling::Sharps, false), "C#");
        assert_eq!(spell(4, Spelling::Flats, true), "E");
    }
}
