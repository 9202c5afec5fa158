//! Crate error types.
//!
//! The chart engine itself never fails: unparseable input degrades to
//! pass-through text. Errors only arise at the edges, when loading
//! configuration or reading charts from disk.

use thiserror::Error;

/// Crate result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Error types with specific context for actionable debugging
#[derive(Debug, Error)]
pub enum Error {
    /// IO error with path context
    #[error("IO error at {path:?}: {source}")]
    Io {
        /// The underlying IO error.
        source: std::io::Error,
        /// File path where the error occurred, if known.
        path: Option<std::path::PathBuf>,
    },

    /// Configuration error with guidance
    #[error("Configuration error: {message}. {hint}")]
    Config {
        /// Description of the configuration problem.
        message: String,
        /// Actionable guidance for fixing the issue.
        hint: &'static str,
    },

    /// Bad command-line usage
    #[error("Usage error: {0}")]
    Usage(String),
}

impl Error {
    /// Create an IO error with path context
    pub fn io(source: std::io::Error, path: impl Into<Option<std::path::PathBuf>>) -> Self {
        Self::Io { source, path: path.into() }
    }

    /// Create a config error with actionable hint
    pub fn config(message: impl Into<String>, hint: &'static str) -> Self {
        Self::Config { message: message.into(), hint }
    }

    /// Create a usage error
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn config_error_includes_hint() {
        let err = Error::config("CHORDSHEET_METADATA_LINES must be a number", "Set it to e.g. 30");
        let msg = err.to_string();
        assert!(msg.contains("CHORDSHEET_METADATA_LINES"));
        assert!(msg.ends_with("Set it to e.g. 30"));
    }

    #[test]
    fn io_error_keeps_path() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        match Error::io(source, std::path::PathBuf::from("song.txt")) {
            Error::Io { path: Some(p), .. } => assert_eq!(p, std::path::PathBuf::from("song.txt")),
            _ => panic!("Expected Io error with path"),
        }
    }

    #[test]
    fn usage_error_message() {
        let err = Error::usage("no file");
        assert!(matches!(err, Error::Usage(ref m) if m == "no file"));
        assert_eq!(err.to_string(), "Usage error: no file");
    }
}
