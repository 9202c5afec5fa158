//! `chordsheet` - chord chart engine.
//!
//! Parses plain-text chord charts (chords above lyrics, or ChordPro-style
//! inline `[chord]` markers) into a [`Song`], and rewrites chart text:
//! layout toggling, transposition, Nashville numbers, and sharp/flat
//! respelling. Every operation is pure and in-memory; reading and writing
//! files is left to the caller.

pub mod accidentals;
pub mod chord;
pub mod config;
pub mod constants;
pub mod error;
pub mod layout;
pub mod nashville;
pub mod parser;
pub mod render;
pub mod transpose;
pub mod types;

pub use parser::{parse, parse_metadata};
pub use types::{ChordAtOffset, Line, Section, Song, SongMetadata};
