//! Developer tool to run the chart engine over a file.
//!
//! Usage:
//!   `cargo run --bin chordsheet -- <command> <file> [arg]`
//!
//! Commands:
//!   `parse`            dump the parsed song as JSON
//!   `meta`             dump title and artist as JSON
//!   `above` / `inline` toggle chord layout
//!   `transpose <n>`    transpose by n semitones
//!   `nashville [key]`  rewrite chords as Nashville numbers
//!   `standard [key]`   rewrite Nashville numbers as chords
//!   `flats` / `sharps` respell accidentals
//!   `render`           re-render the parsed song, chords above lyrics
//!   `format`           report the detected layout and accidental style

use std::env;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use chordsheet::config::Config;
use chordsheet::error::Error;
use chordsheet::render::{render, Layout};
use chordsheet::{accidentals, layout, nashville, parser, transpose};

const USAGE: &str = "chordsheet <parse|meta|above|inline|transpose <n>|nashville [key]|standard [key]|flats|sharps|render|format> <file>";

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    match run(&args) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e:#}");
            if matches!(e.downcast_ref::<Error>(), Some(Error::Usage(_))) {
                eprintln!("Usage: {USAGE}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> anyhow::Result<String> {
    let [command, file, rest @ ..] = args else {
        return Err(Error::usage("expected a command and a file").into());
    };
    let config = Config::load()?;
    let path = Path::new(file);
    let text = fs_err::read_to_string(path).map_err(|e| Error::io(e, path.to_path_buf()))?;
    let arg = rest.first().map(String::as_str);

    let output = match command.as_str() {
        "parse" => serde_json::to_string_pretty(&parser::parse(&text))?,
        "meta" => serde_json::to_string_pretty(&parser::parse_metadata_with_limit(
            &text,
            config.metadata_scan_lines,
        ))?,
        "above" => layout::inline_to_above(&text),
        "inline" => layout::above_to_inline(&text),
        "flats" => accidentals::convert_to_flats(&text),
        "sharps" => accidentals::convert_to_sharps(&text),
        "render" => render(&parser::parse(&text), Layout::Above),
        "format" => describe_format(&text),
        "transpose" => {
            let amount = arg.ok_or_else(|| Error::usage("transpose needs a semitone count"))?;
            let semitones: i32 = amount
                .parse()
                .with_context(|| format!("invalid semitone count {amount:?}"))?;
            let mut song = parser::parse(&text);
            transpose::transpose_song(&mut song, semitones);
            eprintln!("Transposed {}", transpose::transposition_name(semitones));
            render(&song, layout_of(&text))
        }
        "nashville" | "standard" => {
            let mut song = parser::parse(&text);
            let declared = arg.map(str::to_string).or_else(|| nashville::detect_key(&song));
            let key = config
                .nashville_key(declared)
                .ok_or_else(|| Error::usage("no key declared; pass one or set CHORDSHEET_DEFAULT_KEY"))?;
            let converted = if command == "nashville" {
                nashville::song_to_nashville(&mut song, &key)
            } else {
                nashville::song_from_nashville(&mut song, &key)
            };
            if !converted {
                return Err(Error::usage(format!("unrecognized key {key:?}")).into());
            }
            render(&song, layout_of(&text))
        }
        other => return Err(Error::usage(format!("unknown command {other:?}")).into()),
    };

    Ok(output)
}

fn layout_of(text: &str) -> Layout {
    if layout::is_inline_format(text) {
        Layout::Inline
    } else {
        Layout::Above
    }
}

fn describe_format(text: &str) -> String {
    let chords = if layout::is_inline_format(text) { "inline" } else { "above" };
    let spelling = if accidentals::is_sharps_format(text) { "sharps" } else { "flats" };
    format!("layout: {chords}\naccidentals: {spelling}")
}
