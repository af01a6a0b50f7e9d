//! Episode queue with a current position
//!
//! The queue and its position are only ever changed together, and every
//! change keeps the position inside the queue:
//!
//! ```text
//! episodes: [A, B, C]
//!                ^
//!              index = 1
//! ```

use crate::error::{PlaybackError, Result};
use podcastr_core::Episode;
use std::sync::Arc;

/// Ordered episodes plus the index of the current one
///
/// Episodes are held in a shared slice so snapshots can hand them out
/// without copying.
#[derive(Debug, Clone)]
pub struct Queue {
    /// Episodes in playback order
    episodes: Arc<[Episode]>,

    /// Current position (0 when empty)
    index: usize,
}

impl Queue {
    /// Create new empty queue
    pub fn new() -> Self {
        Self {
            episodes: Vec::<Episode>::new().into(),
            index: 0,
        }
    }

    /// Queue holding exactly one episode
    pub fn single(episode: Episode) -> Self {
        Self {
            episodes: vec![episode].into(),
            index: 0,
        }
    }

    /// Queue over `episodes`, positioned at `index`
    ///
    /// Fails when `index` does not point into `episodes` (always the case
    /// for an empty list).
    pub fn from_list(episodes: Vec<Episode>, index: usize) -> Result<Self> {
        if index >= episodes.len() {
            return Err(PlaybackError::IndexOutOfBounds {
                index,
                len: episodes.len(),
            });
        }

        Ok(Self {
            episodes: episodes.into(),
            index,
        })
    }

    /// Current position
    pub fn index(&self) -> usize {
        self.index
    }

    /// Total number of episodes
    pub fn len(&self) -> usize {
        self.episodes.len()
    }

    /// Check if queue is empty
    pub fn is_empty(&self) -> bool {
        self.episodes.is_empty()
    }

    /// Episode at the current position
    pub fn current(&self) -> Option<&Episode> {
        self.episodes.get(self.index)
    }

    /// Shared handle to the episodes
    pub fn episodes(&self) -> &Arc<[Episode]> {
        &self.episodes
    }

    /// Whether a position before the current one exists
    pub fn has_previous(&self) -> bool {
        self.index > 0
    }

    /// Whether a position after the current one exists
    pub fn has_following(&self) -> bool {
        self.index + 1 < self.episodes.len()
    }

    /// Move one position forward
    ///
    /// Returns false (and stays put) at the last position.
    pub fn advance(&mut self) -> bool {
        if self.has_following() {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Move one position back
    ///
    /// Returns false (and stays put) at the first position.
    pub fn go_back(&mut self) -> bool {
        if self.has_previous() {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    /// Jump to an arbitrary position
    ///
    /// Out-of-range positions are rejected and leave the queue unchanged.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index < self.episodes.len() {
            self.index = index;
            true
        } else {
            false
        }
    }

    /// Drop every episode and reset the position
    pub fn clear(&mut self) {
        self.episodes = Vec::<Episode>::new().into();
        self.index = 0;
    }
}

impl Default for Queue {
    fn default() -> Self {
        Self::new()
    }
}
