//! Terminal views
//!
//! Each view subscribes to the coordinator on its own and renders from the
//! snapshot it is handed; neither keeps a copy of the playback state.

use podcastr_core::{Episode, EpisodeId};
use podcastr_playback::{PlaybackCoordinator, PlaybackSnapshot, SubscriptionId};
use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;
use tracing::warn;

/// Shared output the views write to
pub type Console<W> = Rc<RefCell<W>>;

fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}

/// Now-playing bar: current episode, flags and available controls
#[derive(Debug, Default)]
pub struct PlayerBarView;

impl PlayerBarView {
    pub fn render(&self, snapshot: &PlaybackSnapshot) -> String {
        let Some(episode) = snapshot.current_episode() else {
            return "[ ] Nothing playing. Pick an episode with `play <n>`.".to_string();
        };

        let state = if snapshot.is_playing { "[>]" } else { "[=]" };
        let previous = if snapshot.has_previous { "<< prev" } else { "       " };
        let next = if snapshot.has_next { "next >>" } else { "       " };

        format!(
            "{} {}  {}\n    {}  {}/{}  {}   loop {}  shuffle {}",
            state,
            episode.title,
            episode.duration_display,
            previous,
            snapshot.current_index + 1,
            snapshot.queue.len(),
            next,
            on_off(snapshot.is_looping),
            on_off(snapshot.is_shuffling),
        )
    }
}

/// Catalog listing with a marker on the episode being played
///
/// Redraws only when the current episode changes.
#[derive(Debug)]
pub struct EpisodeListView {
    episodes: Vec<Episode>,
    marked: Option<EpisodeId>,
}

impl EpisodeListView {
    pub fn new(episodes: Vec<Episode>) -> Self {
        Self {
            episodes,
            marked: None,
        }
    }

    /// Render the list with a marker on `current`
    pub fn render(&self, current: Option<&EpisodeId>) -> String {
        if self.episodes.is_empty() {
            return "No episodes.".to_string();
        }

        self.episodes
            .iter()
            .enumerate()
            .map(|(i, episode)| {
                let marker = if current == Some(&episode.id) { '>' } else { ' ' };
                let mut row = format!("{} {:>2}. {}", marker, i + 1, episode.title);
                if !episode.members.is_empty() {
                    row.push_str(&format!(" ({})", episode.members));
                }
                if !episode.published_at.is_empty() {
                    row.push_str(&format!("  {}", episode.published_at));
                }
                row.push_str(&format!("  {}", episode.duration_display));
                row
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// New rendering when the current episode moved, `None` otherwise
    pub fn on_snapshot(&mut self, snapshot: &PlaybackSnapshot) -> Option<String> {
        let current = snapshot.current_episode().map(|e| e.id.clone());
        if current == self.marked {
            return None;
        }
        self.marked = current;
        Some(self.render(self.marked.as_ref()))
    }
}

/// Render one episode's details
pub fn render_details(episode: &Episode) -> String {
    let mut out = format!("{}\n", episode.title);
    if !episode.members.is_empty() {
        out.push_str(&format!("  Members:   {}\n", episode.members));
    }
    if !episode.published_at.is_empty() {
        out.push_str(&format!("  Published: {}\n", episode.published_at));
    }
    out.push_str(&format!("  Duration:  {}\n", episode.duration_display));
    if !episode.media_url.is_empty() {
        out.push_str(&format!("  Audio:     {}\n", episode.media_url));
    }
    if !episode.description.is_empty() {
        out.push_str(&format!("\n{}\n", episode.description));
    }
    out
}

/// Subscribe both views to the coordinator, writing to `console`
pub fn attach<W: Write + 'static>(
    coordinator: &mut PlaybackCoordinator,
    catalog: Vec<Episode>,
    console: &Console<W>,
) -> [SubscriptionId; 2] {
    let mut list = EpisodeListView::new(catalog);
    let out = Rc::clone(console);
    let list_id = coordinator.subscribe(move |snapshot| {
        if let Some(rendered) = list.on_snapshot(snapshot) {
            write_view(&out, &rendered);
        }
    });

    let bar = PlayerBarView;
    let out = Rc::clone(console);
    let bar_id = coordinator.subscribe(move |snapshot| {
        write_view(&out, &bar.render(snapshot));
    });

    [list_id, bar_id]
}

fn write_view<W: Write>(console: &Console<W>, text: &str) {
    if let Err(e) = writeln!(console.borrow_mut(), "{}", text) {
        warn!(error = %e, "Failed to write view");
    }
}
