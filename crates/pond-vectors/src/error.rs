//! Sample file errors

use std::path::PathBuf;

use pond_crypto::SecretError;
use thiserror::Error;

/// Errors from generating or verifying sample files.
#[derive(Debug, Error)]
pub enum VectorError {
    /// Envelope operation failed
    #[error(transparent)]
    Secret(#[from] SecretError),

    /// Sample file could not be read or written
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        /// File being accessed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Sample file is not valid JSON or has bad base64
    #[error("invalid sample file: {0}")]
    Json(#[from] serde_json::Error),

    /// Generator settings cannot produce samples
    #[error("invalid generator config: {reason}")]
    Config {
        /// What is wrong
        reason: String,
    },

    /// Sample file was written with a different signing key
    #[error("sample file was generated for a different key")]
    KeyMismatch,

    /// A fixed-size field has the wrong length
    #[error("sample {index}: {field} must be {expected} bytes, got {actual}")]
    FieldLength {
        /// Sample position in the file
        index: usize,
        /// Field name
        field: &'static str,
        /// Required length
        expected: usize,
        /// Length found
        actual: usize,
    },

    /// A recomputed value differs from the recorded one
    #[error("sample {index}: {field} does not match")]
    Mismatch {
        /// Sample position in the file
        index: usize,
        /// Field name
        field: &'static str,
    },
}
