//! Semitone transposition of chord symbols and parsed songs.

use crate::chord::notes::{self, Root};
use crate::types::Song;

/// Transpose a chord symbol by `semitones` (negative moves down).
///
/// Slash chords transpose root and bass independently. Only the root is
/// interpreted; the quality suffix is copied through verbatim. A flat root
/// is re-spelled with flats, anything else with sharps, and Unicode
/// accidentals stay Unicode. Chords without a recognizable root come back
/// unchanged.
///
/// ```
/// use chordsheet::transpose::transpose_chord;
///
/// assert_eq!(transpose_chord("F#m7", 3), "Am7");
/// assert_eq!(transpose_chord("Bb", -2), "Ab");
/// assert_eq!(transpose_chord("D/F#", 2), "E/G#");
/// ```
pub fn transpose_chord(chord: &str, semitones: i32) -> String {
    if let Some((main, bass)) = chord.split_once('/').filter(|(main, _)| !main.is_empty()) {
        return format!(
            "{}/{}",
            transpose_chord(main, semitones),
            transpose_chord(bass, semitones)
        );
    }

    let Some((root, suffix)) = Root::split(chord) else {
        return chord.to_string();
    };
    let Some(index) = root.index() else {
        return chord.to_string();
    };

    let shifted = notes::shift(index, semitones);
    format!("{}{suffix}", notes::spell(shifted, root.spelling(), root.unicode))
}

/// Transpose every chord in a song, and its key, in place.
///
/// Lyrics and chord offsets are left untouched.
pub fn transpose_song(song: &mut Song, semitones: i32) {
    for anchor in song.chords_mut() {
        anchor.chord = transpose_chord(&anchor.chord, semitones);
    }
    if !song.key.is_empty() {
        song.key = transpose_chord(&song.key, semitones);
    }

    tracing::debug!(
        "Transposed {:?} by {} ({} chords)",
        song.title,
        transposition_name(semitones),
        song.chord_count()
    );
}

/// Display label for a transposition amount: "Original", "+2", "-3".
pub fn transposition_name(semitones: i32) -> String {
    match semitones {
        0 => "Original".to_string(),
        n if n > 0 => format!("+{n}"),
        n => n.to_string(),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::parser::parse;

    #[test]
    fn test_transpose_examples() {
        assert_eq!(transpose_chord("F#m7", 3), "Am7");
        assert_eq!(transpose_chord("Bb", -2), "Ab");
        assert_eq!(transpose_chord("C", 1), "C#");
        assert_eq!(transpose_chord("Eb", 1), "E");
        assert_eq!(transpose_chord("Ebmaj7", 2), "Fmaj7");
    }

    #[test]
    fn test_flat_input_stays_flat() {
        assert_eq!(transpose_chord("Db", 2), "Eb");
        assert_eq!(transpose_chord("Abm", 3), "Bm");
        assert_eq!(transpose_chord("Gb7", -1), "F7");
        assert_eq!(transpose_chord("Ab", 1), "A");
        assert_eq!(transpose_chord("Ab", 2), "Bb");
    }

    #[test]
    fn test_slash_chords() {
        assert_eq!(transpose_chord("G/B", 2), "A/C#");
        assert_eq!(transpose_chord("Bb/D", 1), "B/D#");
        assert_eq!(transpose_chord("C/Bb", 2), "D/C");
    }

    #[test]
    fn test_suffix_is_verbatim() {
        assert_eq!(transpose_chord("C7#9", 2), "D7#9");
        assert_eq!(transpose_chord("Asus4add9", -2), "Gsus4add9");
    }

    #[test]
    fn test_unicode_accidentals_preserved() {
        assert_eq!(transpose_chord("B♭m", 2), "Cm");
        assert_eq!(transpose_chord("B♭m", 1), "Bm");
        assert_eq!(transpose_chord("E♭", -1), "D");
        assert_eq!(transpose_chord("E♭", 1), "E");
        assert_eq!(transpose_chord("A♭", 2), "B♭");
        assert_eq!(transpose_chord("F♯", 1), "G");
        assert_eq!(transpose_chord("F♯", 2), "G♯");
    }

    #[test]
    fn test_unknown_roots_unchanged() {
        assert_eq!(transpose_chord("N.C.", 3), "N.C.");
        assert_eq!(transpose_chord("Cb", 3), "Cb");
        assert_eq!(transpose_chord("", 3), "");
        assert_eq!(transpose_chord("/G", 2), "/G");
    }

    #[test]
    fn test_octave_and_negative_wrap() {
        for chord in ["C", "F#m", "Bb7", "G/B"] {
            assert_eq!(transpose_chord(chord, 12), chord);
            assert_eq!(transpose_chord(chord, -12), chord);
        }
        assert_eq!(transpose_chord("C", -1), "B");
        assert_eq!(transpose_chord("C", -13), "B");
    }

    #[test]
    fn test_transpose_song() {
        let mut song = parse("{key: G}\nVerse 1\nG       D\nAmazing grace\n[Em]how [C]sweet");
        transpose_song(&mut song, 2);
        assert_eq!(song.key, "A");
        let lines = &song.sections[0].lines;
        let chords: Vec<_> = lines[0].chords.iter().map(|c| (c.chord.as_str(), c.offset)).collect();
        assert_eq!(chords, vec![("A", 0), ("E", 8)]);
        assert_eq!(lines[0].lyrics, "Amazing grace");
        assert_eq!(lines[1].chords[0].chord, "F#m");
        assert_eq!(lines[1].chords[1].chord, "D");
        assert_eq!(lines[1].lyrics, "how sweet");
    }

    #[test]
    fn test_transpose_song_without_key() {
        let mut song = parse("T\nWriter\n[C]x");
        transpose_song(&mut song, -1);
        assert_eq!(song.key, "");
        assert_eq!(song.sections[0].lines[0].chords[0].chord, "B");
    }

    #[test]
    fn test_transposition_name() {
        assert_eq!(transposition_name(0), "Original");
        assert_eq!(transposition_name(2), "+2");
        assert_eq!(transposition_name(-3), "-3");
    }
}
