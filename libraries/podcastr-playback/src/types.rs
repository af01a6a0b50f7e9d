//! Core types for playback coordination

use podcastr_core::{Episode, EpisodeId};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// How `play_next` picks a position while shuffling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShufflePolicy {
    /// Uniform pick over the whole queue, the current episode included
    #[default]
    Uniform,

    /// Uniform pick over every episode except the current one
    ///
    /// Falls back to `Uniform` for queues of a single episode.
    AvoidRepeat,
}

/// Configuration for the playback coordinator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Shuffle selection policy (default: Uniform)
    pub shuffle_policy: ShufflePolicy,

    /// Initial loop flag (default: false)
    pub start_looping: bool,

    /// Initial shuffle flag (default: false)
    pub start_shuffling: bool,

    /// Fixed RNG seed for reproducible shuffles (default: None, seeded from OS entropy)
    pub seed: Option<u64>,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            shuffle_policy: ShufflePolicy::Uniform,
            start_looping: false,
            start_shuffling: false,
            seed: None,
        }
    }
}

/// Complete, read-only view of the playback state
///
/// Handed to every consumer after each applied command. The queue is shared,
/// so cloning a snapshot never copies episodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackSnapshot {
    /// Episodes in playback order
    pub queue: Arc<[Episode]>,

    /// Position of the current episode (0 when the queue is empty)
    pub current_index: usize,

    /// Whether playback is active
    pub is_playing: bool,

    /// Loop flag, for the playback surface's end-of-episode handling
    pub is_looping: bool,

    /// Whether `play_next` picks a random position
    pub is_shuffling: bool,

    /// `is_shuffling || current_index + 1 < queue.len()`
    pub has_next: bool,

    /// `current_index > 0`
    pub has_previous: bool,
}

impl PlaybackSnapshot {
    /// Episode at the current position
    pub fn current_episode(&self) -> Option<&Episode> {
        self.queue.get(self.current_index)
    }

    /// Whether the queue is empty
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Whether the given episode is the one at the current position
    pub fn is_current(&self, id: &EpisodeId) -> bool {
        self.current_episode().is_some_and(|episode| &episode.id == id)
    }
}
