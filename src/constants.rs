//! Engine constants.
//!
//! Centralizes the lookup tables and limits shared by the chord components.

/// Chromatic note tables, indexed 0-11 from C.
pub mod notes {
    /// Sharp-preferring spellings.
    pub const SHARP_NAMES: [&str; 12] =
        ["C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B"];

    /// Flat-preferring spellings.
    pub const FLAT_NAMES: [&str; 12] =
        ["C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B"];

    /// Semitones in an octave.
    pub const OCTAVE: i32 = 12;
}

/// Key selection lists offered to editors.
pub mod keys {
    /// Every key spelling a chart may declare.
    pub const ALL_KEYS: [&str; 17] = [
        "C", "C#", "Db", "D", "D#", "Eb", "E", "F", "F#", "Gb", "G", "G#", "Ab", "A", "A#", "Bb",
        "B",
    ];

    /// Most frequently used keys, for quick selection.
    pub const COMMON_KEYS: [&str; 8] = ["C", "G", "D", "A", "E", "F", "Bb", "Eb"];

    /// Natural-letter keys whose signature is written with flats.
    pub const FLAT_KEYS: [&str; 6] = ["F", "Bb", "Eb", "Ab", "Db", "Gb"];
}

/// Nashville Number System tables.
pub mod nashville {
    /// Major-scale degree for each semitone distance from the tonic.
    /// Off-scale distances are written as the sharpened lower degree.
    pub const DEGREE_BY_SEMITONE: [&str; 12] =
        ["1", "#1", "2", "#2", "3", "4", "#4", "5", "#5", "6", "#6", "7"];

    /// Semitone distance of each major-scale degree (1-7) from the tonic.
    pub const SEMITONES_BY_DEGREE: [u8; 7] = [0, 2, 4, 5, 7, 9, 11];
}

/// Enharmonic pairs remapped by the accidental converter.
pub mod accidentals {
    /// Sharp spelling paired with its flat spelling.
    pub const ENHARMONIC_PAIRS: [(&str, &str); 5] =
        [("C#", "Db"), ("D#", "Eb"), ("F#", "Gb"), ("G#", "Ab"), ("A#", "Bb")];
}

/// Document parser limits.
pub mod parser {
    /// Lines scanned by the metadata-only parse.
    pub const METADATA_SCAN_LINES: usize = 30;
}
