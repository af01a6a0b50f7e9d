//! Mutable playback state owned by the coordinator

use crate::queue::Queue;
use crate::types::PlaybackSnapshot;
use podcastr_core::Episode;

/// Queue position plus the play/loop/shuffle flags
///
/// `has_next` and `has_previous` are derived on every read, never stored.
#[derive(Debug, Clone, Default)]
pub struct PlaybackState {
    pub(crate) queue: Queue,
    pub(crate) is_playing: bool,
    pub(crate) is_looping: bool,
    pub(crate) is_shuffling: bool,
}

impl PlaybackState {
    /// Initial state with the given mode flags
    pub fn with_modes(is_looping: bool, is_shuffling: bool) -> Self {
        Self {
            is_looping,
            is_shuffling,
            ..Self::default()
        }
    }

    /// Whether a previous position exists
    pub fn has_previous(&self) -> bool {
        self.queue.has_previous()
    }

    /// Whether `play_next` can move (always true while shuffling)
    pub fn has_next(&self) -> bool {
        self.is_shuffling || self.queue.has_following()
    }

    /// Episode at the current position
    pub fn current_episode(&self) -> Option<&Episode> {
        self.queue.current()
    }

    /// Build the consumer-facing view
    pub fn snapshot(&self) -> PlaybackSnapshot {
        PlaybackSnapshot {
            queue: self.queue.episodes().clone(),
            current_index: self.queue.index(),
            is_playing: self.is_playing,
            is_looping: self.is_looping,
            is_shuffling: self.is_shuffling,
            has_next: self.has_next(),
            has_previous: self.has_previous(),
        }
    }
}
