//! Configuration and wire types for the episodes API.

use podcastr_core::DisplayLocale;
use serde::{Deserialize, Serialize};

/// Connection settings for the episodes API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// API base URL (e.g., "http://localhost:3333")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Locale for publication dates
    pub locale: DisplayLocale,
}

impl CatalogConfig {
    /// Create a config for the given base URL with default settings.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3333".to_string(),
            timeout_secs: 30,
            locale: DisplayLocale::PtBr,
        }
    }
}

/// Sort direction by publication date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Oldest first
    Asc,
    /// Newest first
    #[default]
    Desc,
}

impl SortOrder {
    /// Query-string value
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Parameters for listing episodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EpisodeQuery {
    /// Maximum number of episodes (None = all)
    pub limit: Option<usize>,

    /// Publication date order
    pub order: SortOrder,
}

impl EpisodeQuery {
    /// Newest episodes first, at most `limit` of them.
    pub fn latest(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            order: SortOrder::Desc,
        }
    }
}

/// Episode as returned by the API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiEpisode {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub members: String,
    pub published_at: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub description: String,
    pub file: ApiFile,
}

/// Media file attached to an API episode.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiFile {
    pub url: String,
    #[serde(rename = "type", default)]
    pub mime_type: Option<String>,
    pub duration: RawDuration,
}

/// Duration in seconds, sent either as a JSON number or a numeric string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawDuration {
    Seconds(u64),
    Fractional(f64),
    Text(String),
}
