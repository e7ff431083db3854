//! Error types for FrameMonkey.

use thiserror::Error;

/// Main error type for FrameMonkey operations.
///
/// The timeline and range selector never produce these; they clamp.
/// Only I/O-facing work (probing, spawning, settings) can fail.
#[derive(Error, Debug)]
pub enum FrameMonkeyError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Probe error: {0}")]
    Probe(String),

    #[error("Compression error: {0}")]
    Compress(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Settings error: {0}")]
    Settings(String),
}

/// Result type alias for FrameMonkey operations.
pub type Result<T> = std::result::Result<T, FrameMonkeyError>;
