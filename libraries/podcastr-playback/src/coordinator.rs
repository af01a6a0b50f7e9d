//! Playback coordinator - the single source of truth for playback state
//!
//! Owns the queue, the current position and the play/loop/shuffle flags.
//! Every command is one synchronous transition followed by a notification
//! carrying the full snapshot.

use crate::{
    command::PlaybackCommand,
    error::Result,
    events::{SubscriptionId, Subscribers},
    queue::Queue,
    shuffle::ShufflePicker,
    state::PlaybackState,
    types::{PlaybackConfig, PlaybackSnapshot, ShufflePolicy},
};
use crossbeam_channel::Receiver;
use podcastr_core::Episode;
use std::fmt;
use tracing::{debug, warn};

/// Central playback coordination
///
/// Consumers hold read-only snapshots; any change goes through a command.
/// Commands take `&mut self`, so a subscriber callback can never re-enter
/// the coordinator while a command is being applied.
pub struct PlaybackCoordinator {
    state: PlaybackState,
    shuffle: ShufflePicker,
    subscribers: Subscribers,
}

impl PlaybackCoordinator {
    /// Create new playback coordinator
    pub fn new(config: PlaybackConfig) -> Self {
        Self {
            state: PlaybackState::with_modes(config.start_looping, config.start_shuffling),
            shuffle: ShufflePicker::new(config.shuffle_policy, config.seed),
            subscribers: Subscribers::new(),
        }
    }

    // ===== Queue Commands =====

    /// Replace the queue with a single episode and start playing it
    pub fn play_single(&mut self, episode: Episode) {
        debug!(episode = %episode.id, "Playing single episode");

        self.state.queue = Queue::single(episode);
        self.state.is_playing = true;
        self.notify();
    }

    /// Replace the queue with `episodes` and start playing at `start_index`
    ///
    /// An out-of-range `start_index` (including any index into an empty
    /// list) is rejected: the state is left untouched and nobody is notified.
    pub fn play_queue(&mut self, episodes: Vec<Episode>, start_index: usize) -> Result<()> {
        let queue = Queue::from_list(episodes, start_index).map_err(|e| {
            warn!(error = %e, "Rejected play_queue");
            e
        })?;

        debug!(index = start_index, len = queue.len(), "Playing queue");

        self.state.queue = queue;
        self.state.is_playing = true;
        self.notify();
        Ok(())
    }

    /// Empty the queue and reset the position
    ///
    /// Playing, looping and shuffling flags are left as they are.
    pub fn clear(&mut self) {
        debug!(len = self.state.queue.len(), "Clearing queue");

        self.state.queue.clear();
        self.notify();
    }

    // ===== Playback Control =====

    /// Flip the playing flag
    pub fn toggle_play(&mut self) {
        self.state.is_playing = !self.state.is_playing;
        debug!(playing = self.state.is_playing, "Toggled play");
        self.notify();
    }

    /// Set the playing flag (the playback surface reports play/pause)
    pub fn set_playing_state(&mut self, playing: bool) {
        self.state.is_playing = playing;
        debug!(playing, "Set playing state");
        self.notify();
    }

    // ===== Navigation =====

    /// Move to the next position
    ///
    /// While shuffling, picks a random position according to the shuffle
    /// policy. Otherwise advances by one. At the end of the queue this is a
    /// no-op: the coordinator never wraps around, even when looping.
    pub fn play_next(&mut self) {
        let len = self.state.queue.len();
        let current = self.state.queue.index();

        let moved = if self.state.is_shuffling {
            match self.shuffle.pick(len, current) {
                Some(index) => self.state.queue.jump_to(index),
                None => false,
            }
        } else {
            self.state.queue.advance()
        };

        debug!(
            index = self.state.queue.index(),
            len,
            shuffling = self.state.is_shuffling,
            moved,
            "Play next"
        );
        self.notify();
    }

    /// Move to the previous position (no-op at the first one)
    pub fn play_previous(&mut self) {
        let moved = self.state.queue.go_back();

        debug!(index = self.state.queue.index(), moved, "Play previous");
        self.notify();
    }

    // ===== Modes =====

    /// Flip the loop flag
    pub fn toggle_loop(&mut self) {
        self.state.is_looping = !self.state.is_looping;
        debug!(looping = self.state.is_looping, "Toggled loop");
        self.notify();
    }

    /// Flip the shuffle flag
    pub fn toggle_shuffle(&mut self) {
        self.state.is_shuffling = !self.state.is_shuffling;
        debug!(shuffling = self.state.is_shuffling, "Toggled shuffle");
        self.notify();
    }

    /// Active shuffle policy
    pub fn shuffle_policy(&self) -> ShufflePolicy {
        self.shuffle.policy()
    }

    // ===== Dispatch =====

    /// Apply a command value
    ///
    /// Only `PlayQueue` can fail.
    pub fn dispatch(&mut self, command: PlaybackCommand) -> Result<()> {
        debug!(command = command.name(), "Dispatching command");

        match command {
            PlaybackCommand::PlaySingle { episode } => self.play_single(episode),
            PlaybackCommand::PlayQueue {
                episodes,
                start_index,
            } => return self.play_queue(episodes, start_index),
            PlaybackCommand::TogglePlay => self.toggle_play(),
            PlaybackCommand::SetPlayingState { playing } => self.set_playing_state(playing),
            PlaybackCommand::ToggleLoop => self.toggle_loop(),
            PlaybackCommand::ToggleShuffle => self.toggle_shuffle(),
            PlaybackCommand::PlayNext => self.play_next(),
            PlaybackCommand::PlayPrevious => self.play_previous(),
            PlaybackCommand::Clear => self.clear(),
        }

        Ok(())
    }

    // ===== State Queries =====

    /// Full read-only view of the current state
    pub fn snapshot(&self) -> PlaybackSnapshot {
        self.state.snapshot()
    }

    /// Episode at the current position
    pub fn current_episode(&self) -> Option<&Episode> {
        self.state.current_episode()
    }

    /// Current position (0 when the queue is empty)
    pub fn current_index(&self) -> usize {
        self.state.queue.index()
    }

    /// Number of episodes in the queue
    pub fn queue_len(&self) -> usize {
        self.state.queue.len()
    }

    /// Whether playback is active
    pub fn is_playing(&self) -> bool {
        self.state.is_playing
    }

    /// Whether the loop flag is set
    pub fn is_looping(&self) -> bool {
        self.state.is_looping
    }

    /// Whether the shuffle flag is set
    pub fn is_shuffling(&self) -> bool {
        self.state.is_shuffling
    }

    /// Whether `play_next` can move
    pub fn has_next(&self) -> bool {
        self.state.has_next()
    }

    /// Whether `play_previous` can move
    pub fn has_previous(&self) -> bool {
        self.state.has_previous()
    }

    // ===== Subscriptions =====

    /// Register a callback invoked with the new snapshot after every command
    ///
    /// Callbacks run synchronously, in registration order.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&PlaybackSnapshot) + 'static,
    {
        let id = self.subscribers.add_callback(Box::new(callback));
        debug!(subscribers = self.subscribers.len(), "Subscriber added");
        id
    }

    /// Register a channel that receives a snapshot after every command
    ///
    /// Dropping the receiver unsubscribes it.
    pub fn subscribe_channel(&mut self) -> Receiver<PlaybackSnapshot> {
        let rx = self.subscribers.add_channel();
        debug!(subscribers = self.subscribers.len(), "Channel subscriber added");
        rx
    }

    /// Remove a callback subscription
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(id)
    }

    /// Number of registered consumers (callbacks and channels)
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn notify(&mut self) {
        if self.subscribers.is_empty() {
            return;
        }
        let snapshot = self.state.snapshot();
        self.subscribers.notify(&snapshot);
    }
}

impl Default for PlaybackCoordinator {
    fn default() -> Self {
        Self::new(PlaybackConfig::default())
    }
}

impl fmt::Debug for PlaybackCoordinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaybackCoordinator")
            .field("state", &self.state)
            .field("shuffle_policy", &self.shuffle.policy())
            .field("subscribers", &self.subscribers)
            .finish()
    }
}
