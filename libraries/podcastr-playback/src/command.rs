//! Playback commands as values
//!
//! Lets the rendering layer build, log or forward commands before handing
//! them to `PlaybackCoordinator::dispatch`.

use podcastr_core::Episode;
use serde::{Deserialize, Serialize};

/// Commands accepted by the playback coordinator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PlaybackCommand {
    /// Replace the queue with one episode and start playing it
    PlaySingle {
        /// Episode to play
        episode: Episode,
    },

    /// Replace the queue with a list and start playing at `start_index`
    PlayQueue {
        /// New queue, in playback order
        episodes: Vec<Episode>,
        /// Position to start at
        start_index: usize,
    },

    /// Flip the playing flag
    TogglePlay,

    /// Set the playing flag
    SetPlayingState {
        /// New value
        playing: bool,
    },

    /// Flip the loop flag
    ToggleLoop,

    /// Flip the shuffle flag
    ToggleShuffle,

    /// Move to the next (or a random, when shuffling) position
    PlayNext,

    /// Move to the previous position
    PlayPrevious,

    /// Empty the queue
    Clear,
}

impl PlaybackCommand {
    /// Short name, for logging
    pub fn name(&self) -> &'static str {
        match self {
            Self::PlaySingle { .. } => "play_single",
            Self::PlayQueue { .. } => "play_queue",
            Self::TogglePlay => "toggle_play",
            Self::SetPlayingState { .. } => "set_playing_state",
            Self::ToggleLoop => "toggle_loop",
            Self::ToggleShuffle => "toggle_shuffle",
            Self::PlayNext => "play_next",
            Self::PlayPrevious => "play_previous",
            Self::Clear => "clear",
        }
    }
}
