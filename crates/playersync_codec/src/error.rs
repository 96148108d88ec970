//! Error types for the snapshot adapters.

use std::io;
use thiserror::Error;

/// Result type for adapter operations.
pub type AdapterResult<T> = Result<T, AdapterError>;

/// Errors that can occur while encoding or decoding a snapshot.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// The byte stream was not a valid canonical JSON snapshot.
    ///
    /// Raised for malformed JSON, unknown fields, missing facets and type
    /// mismatches alike; decoding never yields a partial snapshot.
    #[error("JSON codec error: {0}")]
    Json(#[from] serde_json::Error),

    /// The compression stage failed while encoding.
    #[error("compression error: {0}")]
    Compression(io::Error),

    /// The decompression stage failed while decoding, usually because the
    /// input is truncated, corrupt or not compressed at all.
    #[error("decompression error: {0}")]
    Decompression(io::Error),
}
