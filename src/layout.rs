//! Chord layout conversion between inline `[chord]` markers and
//! chords-above-lyrics.
//!
//! Works on raw text line by line, so every line that is not converted
//! (blanks, directives, labels) comes back byte-for-byte.

use crate::chord::{byte_index, has_inline_markers, split_inline, tokenize};
use crate::parser::section_label;

/// Build a chord row from `(chord, column)` pairs.
///
/// Chords are padded out to their column. A chord whose column is already
/// reached by the previous chord gets exactly one separating space. This
/// includes a chord that would start right where the previous one ends,
/// since `Am` followed by `D` would otherwise read back as one token `AmD`.
pub(crate) fn build_chord_line<'a>(chords: impl IntoIterator<Item = (&'a str, usize)>) -> String {
    let mut row = String::new();
    let mut width = 0;

    for (chord, column) in chords {
        if width < column {
            row.push_str(&" ".repeat(column - width));
            width = column;
        } else if width > 0 {
            row.push(' ');
            width += 1;
        }
        row.push_str(chord);
        width += chord.chars().count();
    }

    row
}

/// Whether a line carries inline `[chord]` markers.
///
/// A line that is only a bracketed section label (`[Chorus]`) does not.
pub fn has_inline_chords(line: &str) -> bool {
    has_inline_markers(line) && section_label(line).is_none()
}

/// Whether a line holds only chord symbols.
pub fn is_chord_only_line(line: &str) -> bool {
    crate::chord::is_chord_only_line(line)
}

/// Whether inline markers outnumber chords-above lines.
pub fn is_inline_format(text: &str) -> bool {
    let (inline, above) = text.lines().fold((0usize, 0usize), |(inline, above), line| {
        if has_inline_chords(line) {
            (inline + 1, above)
        } else if is_chord_only_line(line) {
            (inline, above + 1)
        } else {
            (inline, above)
        }
    });
    inline > above
}

/// Convert inline `[G]Amazing [D]grace` lines into a chord row above a
/// lyrics row.
///
/// Each chord starts at the column equal to the stripped-lyrics length
/// at its marker. Running this on its own output changes nothing.
pub fn inline_to_above(text: &str) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut converted = 0usize;

    for line in text.split('\n') {
        if !has_inline_chords(line) {
            out.push(line.to_string());
            continue;
        }

        // Both emitted rows keep a CRLF terminator.
        let (body, cr) = line.strip_suffix('\r').map_or((line, ""), |b| (b, "\r"));
        let (lyrics, chords) = split_inline(body);
        let chord_row = build_chord_line(chords.iter().map(|c| (c.chord.as_str(), c.offset)));
        if !chord_row.is_empty() {
            out.push(format!("{chord_row}{cr}"));
        }
        out.push(format!("{lyrics}{cr}"));
        converted += 1;
    }

    tracing::debug!("inline_to_above: converted {converted} lines");
    out.join("\n")
}

/// Convert chord rows above lyric rows into inline markers.
///
/// A chord-only line directly followed by a line that is not chord-only
/// is merged into it: each chord is inserted as `[chord]` at its starting
/// column, clamped to the end of the lyrics. A blank line below a chord
/// row receives the chords too, so instrumental lines become `[G][C]`.
/// Everything else passes through unchanged. Running this on its own
/// output changes nothing.
pub fn above_to_inline(text: &str) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    let mut converted = 0usize;
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];
        match lines.get(i + 1) {
            Some(next) if is_chord_only_line(line) && !is_chord_only_line(next) => {
                out.push(merge_chords_into(line, next));
                converted += 1;
                i += 2;
            }
            _ => {
                out.push(line.to_string());
                i += 1;
            }
        }
    }

    tracing::debug!("above_to_inline: merged {converted} chord lines");
    out.join("\n")
}

/// Insert each chord of `chord_line` into `lyrics` at its column.
fn merge_chords_into(chord_line: &str, lyrics: &str) -> String {
    // Keep a CRLF terminator at the end of the merged line.
    let (body, cr) = lyrics.strip_suffix('\r').map_or((lyrics, ""), |b| (b, "\r"));

    let mut merged = body.to_string();
    for token in tokenize(chord_line).iter().rev() {
        let at = byte_index(body, token.column);
        merged.insert_str(at, &format!("[{}]", token.text));
    }
    merged.push_str(cr);
    merged
}
