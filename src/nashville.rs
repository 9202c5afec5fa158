//! Nashville Number System conversion.
//!
//! Chords are written as major-scale degrees of the song's key: in G, the
//! chords G, Am and D7 read 1, 2m and 57. Off-scale roots are always
//! written as the sharpened degree below (`#4`, never `b5`). Quality
//! suffixes pass through untouched in both directions.

use crate::chord::notes::{self, Accidental, Root, Spelling};
use crate::constants::keys::FLAT_KEYS;
use crate::constants::nashville::{DEGREE_BY_SEMITONE, SEMITONES_BY_DEGREE};
use crate::types::Song;

pub use crate::constants::keys::{ALL_KEYS, COMMON_KEYS};

/// Resolve a key name to its root and chromatic index.
///
/// Only the leading root counts, so "Am" and "G major" resolve to A and G.
fn resolve_key(key: &str) -> Option<(Root, u8)> {
    let (root, _) = Root::split(key.trim())?;
    Some((root, root.index()?))
}

/// Whether chords in `key` are spelled with flats.
fn key_spelling(root: Root) -> Spelling {
    if root.accidental == Some(Accidental::Flat) || FLAT_KEYS.contains(&root.ascii().as_str()) {
        Spelling::Flats
    } else {
        Spelling::Sharps
    }
}

/// Split `#4m7` into (accidental, degree, suffix).
fn split_degree(notation: &str) -> Option<(Option<Accidental>, usize, &str)> {
    let mut chars = notation.char_indices();
    let (_, first) = chars.next()?;

    let (accidental, digit_at) = match Accidental::from_char(first) {
        Some(accidental) => (Some(accidental), first.len_utf8()),
        None => (None, 0),
    };
    let digit = notation[digit_at..].chars().next()?;
    let degree = digit.to_digit(10).filter(|d| (1..=7).contains(d))?;

    Some((accidental, usize::try_from(degree).ok()?, &notation[digit_at + 1..]))
}

/// Whether a token is written in Nashville notation (`1`, `6m`, `#4`, `5/7`).
pub fn is_nashville(token: &str) -> bool {
    let main = match token.split_once('/') {
        Some((main, _)) if !main.is_empty() => main,
        _ => token,
    };
    split_degree(main).is_some()
}

/// Convert a chord to Nashville notation relative to `key`.
///
/// Returns the chord unchanged when the chord root or the key cannot be
/// recognized.
///
/// ```
/// use chordsheet::nashville::to_nashville;
///
/// assert_eq!(to_nashville("Am", "C"), "6m");
/// assert_eq!(to_nashville("D7", "G"), "57");
/// assert_eq!(to_nashville("C#", "C"), "#1");
/// ```
pub fn to_nashville(chord: &str, key: &str) -> String {
    if chord.is_empty() {
        return String::new();
    }
    if let Some((main, bass)) = chord.split_once('/').filter(|(main, _)| !main.is_empty()) {
        return format!("{}/{}", to_nashville(main, key), to_nashville(bass, key));
    }

    let Some((_, key_index)) = resolve_key(key) else {
        return chord.to_string();
    };
    let Some((root, suffix)) = Root::split(chord) else {
        return chord.to_string();
    };
    let Some(index) = root.index() else {
        return chord.to_string();
    };

    let distance = notes::shift(index, -i32::from(key_index));
    format!("{}{suffix}", DEGREE_BY_SEMITONE[usize::from(distance)])
}

/// Convert Nashville notation back to a chord in `key`.
///
/// A leading `#`/`b` raises or lowers the degree by a semitone. Flat keys
/// (any key with a flat, or F) are spelled with flats. Input that is not
/// Nashville notation comes back unchanged.
///
/// ```
/// use chordsheet::nashville::from_nashville;
///
/// assert_eq!(from_nashville("6m", "C"), "Am");
/// assert_eq!(from_nashville("4", "F"), "Bb");
/// assert_eq!(from_nashville("b7", "D"), "C");
/// ```
pub fn from_nashville(notation: &str, key: &str) -> String {
    if notation.is_empty() {
        return String::new();
    }
    if let Some((main, bass)) = notation.split_once('/').filter(|(main, _)| !main.is_empty()) {
        return format!("{}/{}", from_nashville(main, key), from_nashville(bass, key));
    }

    let Some((key_root, key_index)) = resolve_key(key) else {
        return notation.to_string();
    };
    let Some((accidental, degree, suffix)) = split_degree(notation) else {
        return notation.to_string();
    };

    let mut semitones = i32::from(SEMITONES_BY_DEGREE[degree - 1]);
    match accidental {
        Some(Accidental::Sharp) => semitones += 1,
        Some(Accidental::Flat) => semitones -= 1,
        None => {}
    }

    let index = notes::shift(key_index, semitones);
    format!("{}{suffix}", notes::spell(index, key_spelling(key_root), key_root.unicode))
}

/// The root of the song's declared key, if it has a recognizable one.
///
/// "Am" yields "A"; an empty or unrecognizable key yields `None`.
pub fn detect_key(song: &Song) -> Option<String> {
    let key = song.key.trim();
    let (root, rest) = Root::split(key)?;
    root.index()?;
    Some(key[..key.len() - rest.len()].to_string())
}

/// Rewrite every chord of a song as Nashville notation in `key`.
///
/// Returns `false`, leaving the song untouched, when the key has no
/// recognizable root.
pub fn song_to_nashville(song: &mut Song, key: &str) -> bool {
    if resolve_key(key).is_none() {
        tracing::debug!("Cannot convert {:?} to Nashville: unknown key {key:?}", song.title);
        return false;
    }
    for anchor in song.chords_mut() {
        anchor.chord = to_nashville(&anchor.chord, key);
    }
    true
}

/// Rewrite every Nashville chord of a song as a standard chord in `key`.
///
/// Returns `false`, leaving the song untouched, when the key has no
/// recognizable root.
pub fn song_from_nashville(song: &mut Song, key: &str) -> bool {
    if resolve_key(key).is_none() {
        tracing::debug!("Cannot convert {:?} from Nashville: unknown key {key:?}", song.title);
        return false;
    }
    for anchor in song.chords_mut() {
        anchor.chord = from_nashville(&anchor.chord, key);
    }
    true
}
