//! Podcastr Catalog
//!
//! HTTP client for the episodes API that feeds the playback coordinator.
//!
//! # Features
//!
//! - **Listing**: latest episodes sorted by publication date
//! - **Lookup**: a single episode by slug
//! - **Normalization**: API records become [`podcastr_core::Episode`]s with
//!   display-ready duration and publication date
//!
//! # Example
//!
//! ```ignore
//! use podcastr_catalog::{CatalogClient, CatalogConfig, EpisodeQuery};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CatalogClient::new(CatalogConfig::new("http://localhost:3333"))?;
//!
//!     for episode in client.list_episodes(&EpisodeQuery::latest(12)).await? {
//!         println!("{} ({})", episode.title, episode.duration_display);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod normalize;
mod types;

pub use client::CatalogClient;
pub use error::{CatalogError, Result};
pub use types::{ApiEpisode, ApiFile, CatalogConfig, EpisodeQuery, RawDuration, SortOrder};
