//! Error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Escape radius must be positive with a finite non-zero square, got {0}")]
    InvalidEscapeRadius(f64),

    #[error("Coordinates ({0}, {1}) cannot be encoded as JSON")]
    NonFiniteCoordinate(f64, f64),

    #[error("Malformed JSON: {0}")]
    Codec(#[from] serde_json::Error),

    #[error("I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Worker channel disconnected")]
    Disconnected,

    #[error("Worker thread panicked")]
    WorkerPanicked,
}

pub type Result<T> = std::result::Result<T, Error>;
