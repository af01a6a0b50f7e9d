//! Interactive listening session
//!
//! Turns prompt lines into playback commands against the one coordinator
//! the session owns.

use podcastr_core::Episode;
use podcastr_playback::{PlaybackCommand, PlaybackCoordinator, PlaybackError, PlaybackSnapshot};
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    #[error("Type a command, or `help` for the list")]
    Empty,

    #[error("Unknown command '{0}'")]
    UnknownCommand(String),

    #[error("`{0}` needs an episode number")]
    MissingNumber(&'static str),

    #[error("'{0}' is not an episode number")]
    InvalidNumber(String),

    #[error("Unexpected argument '{0}'")]
    UnexpectedArgument(String),

    #[error("No episode {number} (catalog has {available})")]
    NoSuchEpisode { number: usize, available: usize },

    #[error("Nothing is playing")]
    NothingPlaying,

    #[error(transparent)]
    Playback(#[from] PlaybackError),
}

pub type Result<T> = std::result::Result<T, SessionError>;

/// One parsed prompt line. Episode numbers are 1-based, as listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Play(usize),
    PlayAll(usize),
    Toggle,
    Pause,
    Resume,
    Next,
    Previous,
    Loop,
    Shuffle,
    Clear,
    Ended,
    Status,
    Help,
    Quit,
}

impl FromStr for Input {
    type Err = SessionError;

    fn from_str(line: &str) -> Result<Self> {
        let mut words = line.split_whitespace();
        let Some(word) = words.next() else {
            return Err(SessionError::Empty);
        };

        let input = match word.to_ascii_lowercase().as_str() {
            "play" | "p" => Input::Play(episode_number("play", words.next())?),
            "all" | "a" => Input::PlayAll(episode_number("all", words.next())?),
            "toggle" | "t" => Input::Toggle,
            "pause" => Input::Pause,
            "resume" => Input::Resume,
            "next" | "n" => Input::Next,
            "prev" | "previous" => Input::Previous,
            "loop" | "l" => Input::Loop,
            "shuffle" | "s" => Input::Shuffle,
            "clear" => Input::Clear,
            "ended" => Input::Ended,
            "status" => Input::Status,
            "help" | "?" => Input::Help,
            "quit" | "exit" | "q" => Input::Quit,
            _ => return Err(SessionError::UnknownCommand(word.to_string())),
        };

        match words.next() {
            Some(extra) => Err(SessionError::UnexpectedArgument(extra.to_string())),
            None => Ok(input),
        }
    }
}

fn episode_number(command: &'static str, word: Option<&str>) -> Result<usize> {
    let word = word.ok_or(SessionError::MissingNumber(command))?;
    match word.parse::<usize>() {
        Ok(number) if number > 0 => Ok(number),
        _ => Err(SessionError::InvalidNumber(word.to_string())),
    }
}

/// What the prompt loop should do after an input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    /// A command was applied; subscribed views have rendered it
    Applied,
    Status,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  play <n>   play episode n on its own
  all <n>    play the whole list starting at episode n
  toggle     play/pause
  pause      pause
  resume     resume
  next       next episode
  prev       previous episode
  loop       toggle loop
  shuffle    toggle shuffle
  clear      empty the queue
  ended      the current episode finished
  status     show the player
  help       show this help
  quit       leave";

/// Command the player applies when the current episode finishes
///
/// Looping repeats the episode in place; otherwise playback moves on while
/// there is a next episode and the queue is cleared after the last one.
/// `None` when nothing is queued.
pub fn end_of_episode(snapshot: &PlaybackSnapshot) -> Option<PlaybackCommand> {
    if snapshot.is_empty() {
        return None;
    }

    let command = if snapshot.is_looping {
        PlaybackCommand::SetPlayingState { playing: true }
    } else if snapshot.has_next {
        PlaybackCommand::PlayNext
    } else {
        PlaybackCommand::Clear
    };
    Some(command)
}

/// A listening session over a fetched catalog
pub struct Session {
    coordinator: PlaybackCoordinator,
    catalog: Vec<Episode>,
}

impl Session {
    pub fn new(coordinator: PlaybackCoordinator, catalog: Vec<Episode>) -> Self {
        Self {
            coordinator,
            catalog,
        }
    }

    pub fn coordinator(&self) -> &PlaybackCoordinator {
        &self.coordinator
    }

    /// Access for attaching views
    pub fn coordinator_mut(&mut self) -> &mut PlaybackCoordinator {
        &mut self.coordinator
    }

    pub fn catalog(&self) -> &[Episode] {
        &self.catalog
    }

    /// Apply one prompt input
    pub fn handle(&mut self, input: Input) -> Result<Reply> {
        let command = match input {
            Input::Play(number) => PlaybackCommand::PlaySingle {
                episode: self.episode(number)?.clone(),
            },
            Input::PlayAll(number) => {
                self.episode(number)?;
                PlaybackCommand::PlayQueue {
                    episodes: self.catalog.clone(),
                    start_index: number - 1,
                }
            }
            Input::Toggle => PlaybackCommand::TogglePlay,
            Input::Pause => PlaybackCommand::SetPlayingState { playing: false },
            Input::Resume => PlaybackCommand::SetPlayingState { playing: true },
            Input::Next => PlaybackCommand::PlayNext,
            Input::Previous => PlaybackCommand::PlayPrevious,
            Input::Loop => PlaybackCommand::ToggleLoop,
            Input::Shuffle => PlaybackCommand::ToggleShuffle,
            Input::Clear => PlaybackCommand::Clear,
            Input::Ended => {
                end_of_episode(&self.coordinator.snapshot()).ok_or(SessionError::NothingPlaying)?
            }
            Input::Status => return Ok(Reply::Status),
            Input::Help => return Ok(Reply::Help),
            Input::Quit => return Ok(Reply::Quit),
        };

        debug!(command = command.name(), "Applying input");
        self.coordinator.dispatch(command)?;
        Ok(Reply::Applied)
    }

    fn episode(&self, number: usize) -> Result<&Episode> {
        number
            .checked_sub(1)
            .and_then(|index| self.catalog.get(index))
            .ok_or(SessionError::NoSuchEpisode {
                number,
                available: self.catalog.len(),
            })
    }
}
