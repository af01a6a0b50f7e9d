//! Episodes API client.

use crate::error::{CatalogError, Result};
use crate::types::{ApiEpisode, CatalogConfig, EpisodeQuery};
use podcastr_core::{DisplayLocale, Episode, EpisodeId};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// Sort key the API orders listings by
const SORT_FIELD: &str = "published_at";

/// Client for the Podcastr episodes API.
///
/// Every episode it returns is already normalized: identifier validated,
/// duration and publication date formatted for display.
///
/// # Example
///
/// ```ignore
/// use podcastr_catalog::{CatalogClient, CatalogConfig, EpisodeQuery};
///
/// let client = CatalogClient::new(CatalogConfig::new("http://localhost:3333"))?;
/// let latest = client.list_episodes(&EpisodeQuery::latest(12)).await?;
/// println!("{} episodes", latest.len());
/// ```
pub struct CatalogClient {
    http: Client,
    base_url: Url,
    locale: DisplayLocale,
}

impl CatalogClient {
    /// Create a new client with the given configuration.
    pub fn new(config: CatalogConfig) -> Result<Self> {
        if config.base_url.trim().is_empty() {
            return Err(CatalogError::InvalidUrl("URL cannot be empty".into()));
        }

        let raw = config.base_url.trim().trim_end_matches('/');
        if !raw.starts_with("http://") && !raw.starts_with("https://") {
            return Err(CatalogError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let base_url =
            Url::parse(raw).map_err(|e| CatalogError::InvalidUrl(format!("{}: {}", raw, e)))?;

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("Podcastr/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url,
            locale: config.locale,
        })
    }

    /// Get the API base URL.
    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    /// Locale used for publication dates.
    pub fn locale(&self) -> DisplayLocale {
        self.locale
    }

    /// List episodes sorted by publication date.
    pub async fn list_episodes(&self, query: &EpisodeQuery) -> Result<Vec<Episode>> {
        let url = self.endpoint(&["episodes"])?;
        debug!(url = %url, limit = ?query.limit, order = query.order.as_str(), "Fetching episodes");

        let mut params: Vec<(&str, String)> = vec![
            ("_sort", SORT_FIELD.to_string()),
            ("_order", query.order.as_str().to_string()),
        ];
        if let Some(limit) = query.limit {
            params.push(("_limit", limit.to_string()));
        }

        let response = self.http.get(url).query(&params).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(server_error(response).await);
        }

        let records: Vec<ApiEpisode> = response.json().await.map_err(|e| {
            CatalogError::ParseError(format!("Failed to parse episode list: {}", e))
        })?;

        let episodes = records
            .into_iter()
            .map(|record| record.into_episode(self.locale))
            .collect::<Result<Vec<_>>>()?;

        info!(count = episodes.len(), "Fetched episodes");
        Ok(episodes)
    }

    /// Get a single episode by its slug.
    pub async fn get_episode(&self, id: &EpisodeId) -> Result<Episode> {
        let url = self.endpoint(&["episodes", id.as_str()])?;
        debug!(url = %url, episode_id = %id, "Fetching episode");

        let response = self.http.get(url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound(id.to_string()));
        }
        if !status.is_success() {
            return Err(server_error(response).await);
        }

        let record: ApiEpisode = response.json().await.map_err(|e| {
            CatalogError::ParseError(format!("Failed to parse episode {}: {}", id, e))
        })?;

        record.into_episode(self.locale)
    }

    /// Base URL with the given path segments appended (percent-encoded).
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| CatalogError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

async fn server_error(response: reqwest::Response) -> CatalogError {
    let status = response.status().as_u16();
    let message = response.text().await.unwrap_or_default();
    CatalogError::ServerError { status, message }
}
