//! Error types for conformance check runs.

use std::path::PathBuf;

/// Result type for conformance check operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal errors that abort a run before any outcome is produced.
///
/// Per-field problems (missing table, malformed version string, value
/// mismatch) are never errors; they become failing outcomes so the rest of
/// the run still executes.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Failed to read a font file from disk.
    #[error("Failed to read font file '{path}': {source}")]
    ReadFont {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to parse a font file.
    #[error("Failed to parse font '{path}': {source}")]
    ParseFont {
        path: PathBuf,
        source: read_fonts::ReadError,
    },

    /// Failed to read an expectation document from disk.
    #[error("Failed to read expectation file '{path}': {source}")]
    ReadExpectation {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Expectation document is not valid TOML or has mistyped values.
    #[error("Failed to parse expectation file '{path}': {source}")]
    ParseExpectation {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// Failed to write a stub expectation document.
    #[error("Failed to write expectation stub '{path}': {source}")]
    WriteStub {
        path: PathBuf,
        source: std::io::Error,
    },
}
