//! Error types for the episodes API client.

use thiserror::Error;

/// Errors that can occur when talking to the episodes API.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Invalid API base URL
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    /// Episode does not exist
    #[error("Episode not found: {0}")]
    NotFound(String),

    /// API returned an error response
    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// Failed to parse API response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Episode record could not be normalized
    #[error("Invalid episode {id}: {reason}")]
    InvalidEpisode { id: String, reason: String },
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
