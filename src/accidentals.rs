//! Sharp/flat respelling of chords in raw chart text.
//!
//! Only the five common enharmonic pairs are remapped (C#/Db, D#/Eb,
//! F#/Gb, G#/Ab, A#/Bb). E#, Fb, B# and Cb are left as written.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::chord::notes::{to_unicode_accidentals, Root};
use crate::chord::{is_chord_only_line, tokenize, RE_INLINE_MARKER};
use crate::constants::accidentals::ENHARMONIC_PAIRS;
use crate::layout::has_inline_chords;

/// A note letter directly followed by an accidental.
#[allow(clippy::expect_used)]
static RE_ACCIDENTAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-G]([#b♯♭])").expect("valid regex: RE_ACCIDENTAL"));

/// Target spelling for a respelling pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Flats,
    Sharps,
}

/// Respell one chord's root (and bass) toward `target`.
fn respell_chord(chord: &str, target: Target) -> String {
    if let Some((main, bass)) = chord.split_once('/').filter(|(main, _)| !main.is_empty()) {
        return format!("{}/{}", respell_chord(main, target), respell_chord(bass, target));
    }

    let Some((root, suffix)) = Root::split(chord) else {
        return chord.to_string();
    };
    let written = root.ascii();
    let replacement = ENHARMONIC_PAIRS.iter().find_map(|&(sharp, flat)| match target {
        Target::Flats if written == sharp => Some(flat),
        Target::Sharps if written == flat => Some(sharp),
        _ => None,
    });

    match replacement {
        Some(name) if root.unicode => format!("{}{suffix}", to_unicode_accidentals(name)),
        Some(name) => format!("{name}{suffix}"),
        None => chord.to_string(),
    }
}

/// Respell the chords of one line, if it carries any.
fn respell_line(line: &str, target: Target) -> String {
    if has_inline_chords(line) {
        return RE_INLINE_MARKER
            .replace_all(line, |caps: &Captures<'_>| {
                format!("[{}]", respell_chord(&caps[1], target))
            })
            .into_owned();
    }

    if is_chord_only_line(line) {
        let mut out = String::with_capacity(line.len());
        let mut last_end = 0;
        for token in tokenize(line) {
            out.push_str(&line[last_end..token.byte_start]);
            out.push_str(&respell_chord(token.text, target));
            last_end = token.byte_start + token.text.len();
        }
        out.push_str(&line[last_end..]);
        return out;
    }

    line.to_string()
}

fn respell_text(text: &str, target: Target) -> String {
    let converted: Vec<String> = text.split('\n').map(|line| respell_line(line, target)).collect();
    tracing::debug!("Respelled {} lines toward {target:?}", converted.len());
    converted.join("\n")
}

/// Respell sharp chords as flats, in inline markers and chord-only lines.
///
/// ```
/// use chordsheet::accidentals::convert_to_flats;
///
/// assert_eq!(convert_to_flats("[C#m]Hello [F#/A#]world"), "[Dbm]Hello [Gb/Bb]world");
/// ```
pub fn convert_to_flats(text: &str) -> String {
    respell_text(text, Target::Flats)
}

/// Respell flat chords as sharps, in inline markers and chord-only lines.
pub fn convert_to_sharps(text: &str) -> String {
    respell_text(text, Target::Sharps)
}

/// Whether sharps are at least as common as flats in the text.
///
/// Counts every note letter directly followed by an accidental. Text with
/// no accidentals counts as sharps.
pub fn is_sharps_format(text: &str) -> bool {
    let (sharps, flats) = RE_ACCIDENTAL.captures_iter(text).fold((0usize, 0usize), |(s, f), caps| {
        match &caps[1] {
            "#" | "♯" => (s + 1, f),
            _ => (s, f + 1),
        }
    });
    sharps >= flats
}
