//! Error types for playback coordination

use thiserror::Error;

/// Playback errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    /// Start index does not point into the supplied queue
    #[error("Index {index} out of bounds for queue of {len} episodes")]
    IndexOutOfBounds {
        /// Requested start index
        index: usize,
        /// Length of the supplied queue
        len: usize,
    },
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
