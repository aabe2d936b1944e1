//! Events consumed by the reducer.

use crossterm::event::Event;
use pulse_core::feed::{FeedKind, PageOutcome, PageRequest};

use crate::common::TaskCompleted;

/// Result payload of a page load task.
#[derive(Debug)]
pub struct PageLoad {
    pub request: PageRequest,
    pub outcome: PageOutcome,
}

#[derive(Debug)]
pub enum UiEvent {
    /// First event of a session; mounts the initial section.
    Init,
    /// Animation/timer heartbeat.
    Tick,
    /// Raw terminal input.
    Terminal(Event),
    /// A page load task finished (loaded, failed or cancelled).
    PageLoaded {
        feed: FeedKind,
        completed: TaskCompleted<PageLoad>,
    },
    /// Quit requested from outside the key handler (SIGINT).
    QuitRequested,
}
