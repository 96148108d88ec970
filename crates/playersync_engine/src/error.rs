//! Error types for the sync engine.

use thiserror::Error;

/// Result type for facet accessor calls.
pub type FacetResult<T> = Result<T, FacetError>;

/// Failure raised by a platform facet accessor.
///
/// Platform implementations surface whatever went wrong (scheduler
/// rejection, item codec failure, a plugin throwing mid-write) as a
/// message. The engine aggregates these at its join points, logs them with
/// the affected player's identity, and converts them into its boolean or
/// optional results; a facet failure never escapes to the caller as a
/// fault.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FacetError {
    message: String,
}

impl FacetError {
    /// Creates a facet error from a cause description.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
