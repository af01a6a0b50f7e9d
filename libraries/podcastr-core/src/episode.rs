//! Episode domain type
//!
//! An `Episode` is the normalized record supplied by the content provider.
//! Display strings are pre-formatted so that consumers never have to parse
//! or format anything themselves.

use crate::error::{CoreError, Result};
use crate::format::format_duration;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Episode identifier (the API slug)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EpisodeId(String);

impl EpisodeId {
    /// Create a new episode ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Create an episode ID, rejecting blank input
    pub fn parse(id: &str) -> Result<Self> {
        let id = id.trim();
        if id.is_empty() {
            return Err(CoreError::invalid_input("episode id cannot be empty"));
        }
        Ok(Self(id.to_string()))
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EpisodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Podcast episode as delivered by the content provider
///
/// Treated as an opaque, immutable value by the playback coordinator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    /// Unique episode identifier
    pub id: EpisodeId,

    /// Episode title
    pub title: String,

    /// Cover image URL
    pub thumbnail_url: String,

    /// Hosts and guests, comma separated
    pub members: String,

    /// Publication date, already formatted for display
    pub published_at: String,

    /// Episode length
    pub duration: Duration,

    /// Episode length formatted as `HH:MM:SS`
    pub duration_display: String,

    /// Audio file URL
    pub media_url: String,

    /// HTML description
    pub description: String,
}

impl Episode {
    /// Create an episode with only identity, title and duration filled in
    pub fn new(id: impl Into<String>, title: impl Into<String>, duration: Duration) -> Self {
        Self {
            id: EpisodeId::new(id),
            title: title.into(),
            thumbnail_url: String::new(),
            members: String::new(),
            published_at: String::new(),
            duration,
            duration_display: format_duration(duration),
            media_url: String::new(),
            description: String::new(),
        }
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
