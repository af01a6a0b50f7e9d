//! Podcastr Core
//!
//! Platform-agnostic core types, errors and formatting helpers for Podcastr.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Episode` and `EpisodeId`
//! - **Error Handling**: Unified `CoreError` and `Result` types
//! - **Formatting**: duration and publication date display strings
//!
//! Episodes are produced by the content provider (`podcastr-catalog`) and
//! consumed as opaque values by the playback coordinator (`podcastr-playback`).
//!
//! # Example
//!
//! ```rust
//! use podcastr_core::{format_duration, Episode};
//! use std::time::Duration;
//!
//! let episode = Episode::new("a-melhor-forma", "A melhor forma de aprender", Duration::from_secs(3725));
//! assert_eq!(episode.duration_display, "01:02:05");
//! assert_eq!(format_duration(Duration::from_secs(59)), "00:00:59");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod episode;
pub mod error;
pub mod format;

// Re-export commonly used types
pub use episode::{Episode, EpisodeId};
pub use error::{CoreError, Result};
pub use format::{format_duration, format_published_date, DisplayLocale};
