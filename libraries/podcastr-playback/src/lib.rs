//! Podcastr - Playback Coordination
//!
//! Single source of truth for "what is playing, where in the queue, in what
//! mode", shared by every view of the application.
//!
//! This crate provides:
//! - Queue loading (single episode or a list with a start position)
//! - Play/pause state
//! - Sequential and shuffled navigation (next / previous)
//! - Loop and shuffle flags
//! - Derived availability flags (`has_next`, `has_previous`)
//! - Snapshot fan-out to subscribers (callbacks and channels)
//!
//! # Architecture
//!
//! `podcastr-playback` is completely platform-agnostic:
//! - No audio decoding or output
//! - No network access (episodes are handed in by the caller)
//! - No persistence
//!
//! The coordinator is an in-memory state machine. Each command is applied
//! synchronously and followed by a notification carrying the full snapshot.
//!
//! # Example: Basic Playback
//!
//! ```rust
//! use podcastr_core::Episode;
//! use podcastr_playback::{PlaybackConfig, PlaybackCoordinator};
//! use std::time::Duration;
//!
//! let mut coordinator = PlaybackCoordinator::new(PlaybackConfig::default());
//!
//! let episodes = vec![
//!     Episode::new("a", "Episode A", Duration::from_secs(1800)),
//!     Episode::new("b", "Episode B", Duration::from_secs(2400)),
//! ];
//!
//! coordinator.play_queue(episodes, 0).unwrap();
//! coordinator.play_next();
//!
//! let snapshot = coordinator.snapshot();
//! assert_eq!(snapshot.current_index, 1);
//! assert!(snapshot.is_playing);
//! assert!(!snapshot.has_next);
//! ```
//!
//! # Example: Keeping Views in Sync
//!
//! ```rust
//! use podcastr_core::Episode;
//! use podcastr_playback::PlaybackCoordinator;
//! use std::time::Duration;
//!
//! let mut coordinator = PlaybackCoordinator::default();
//!
//! // Callback consumer
//! coordinator.subscribe(|snapshot| {
//!     if let Some(episode) = snapshot.current_episode() {
//!         println!("Now playing: {}", episode.title);
//!     }
//! });
//!
//! // Channel consumer
//! let updates = coordinator.subscribe_channel();
//!
//! coordinator.play_single(Episode::new("a", "Episode A", Duration::from_secs(60)));
//! coordinator.toggle_play();
//!
//! assert_eq!(updates.try_iter().count(), 2);
//! ```

mod command;
mod coordinator;
mod error;
mod events;
mod queue;
mod shuffle;
mod state;
pub mod types;

// Public exports
pub use command::PlaybackCommand;
pub use coordinator::PlaybackCoordinator;
pub use error::{PlaybackError, Result};
pub use events::{SnapshotCallback, SubscriptionId};
pub use types::{PlaybackConfig, PlaybackSnapshot, ShufflePolicy};
