use crossterm::event::{KeyCode, KeyEvent};
use pulse_core::feed::{Completion, FeedKind};
use tokio_util::sync::CancellationToken;

use super::FeedView;
use crate::common::{TaskCompleted, TaskSeq, TaskState};
use crate::effects::UiEffect;
use crate::events::PageLoad;

/// Follow-up requested by a feed key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedAction {
    None,
    RequestMore,
}

/// How a finished page load was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageApplied {
    Appended(usize),
    Failed,
    Cancelled,
    /// Completion of a task that is no longer active (cancelled or superseded).
    Ignored,
}

/// Starts a page load for `kind` unless one is already in flight.
pub fn request_more(
    view: &mut FeedView,
    task: &mut TaskState,
    seq: &mut TaskSeq,
    kind: FeedKind,
) -> Vec<UiEffect> {
    let Some(request) = view.feed.request_more() else {
        tracing::debug!(feed = kind.label(), "load in flight, request dropped");
        return vec![];
    };

    let id = seq.next_id();
    let cancel = CancellationToken::new();
    task.start(id, cancel.clone());
    tracing::info!(
        feed = kind.label(),
        page = request.page,
        task = id.0,
        "page load started"
    );

    vec![UiEffect::LoadPage {
        feed: kind,
        task: id,
        request,
        cancel,
    }]
}

/// Tears down the feed view: any in-flight load is cancelled and the feed
/// returns to idle immediately.
pub fn unmount(view: &mut FeedView, task: &mut TaskState, kind: FeedKind) -> Vec<UiEffect> {
    let token = task.take_cancel();
    if view.feed.cancel() {
        tracing::info!(feed = kind.label(), "page load cancelled on teardown");
    }
    token
        .map(|token| UiEffect::CancelTask { feed: kind, token })
        .into_iter()
        .collect()
}

/// Applies a finished load task to its feed.
pub fn handle_page_loaded(
    view: &mut FeedView,
    task: &mut TaskState,
    completed: TaskCompleted<PageLoad>,
    kind: FeedKind,
) -> PageApplied {
    if !task.finish_if_active(completed.id) {
        tracing::debug!(
            feed = kind.label(),
            task = completed.id.0,
            "ignoring stale page load"
        );
        return PageApplied::Ignored;
    }

    let PageLoad { request, outcome } = completed.result;
    let page = request.page;
    let Some(result) = outcome.into_result() else {
        view.feed.cancel();
        return PageApplied::Cancelled;
    };

    match view.feed.complete(request, result) {
        Completion::Appended(count) => {
            tracing::info!(feed = kind.label(), page, count, "page loaded");
            PageApplied::Appended(count)
        }
        Completion::Failed => {
            if let Some(err) = view.feed.last_error() {
                tracing::warn!(feed = kind.label(), page, error = %err, "page load failed");
            }
            PageApplied::Failed
        }
        Completion::Stale => PageApplied::Ignored,
    }
}

/// Handles a key while the feed pane has focus.
///
/// Reaching the last post asks for more, approximating infinite scroll.
pub fn handle_key(view: &mut FeedView, key: KeyEvent) -> FeedAction {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            view.move_up();
            FeedAction::None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if view.move_down() {
                FeedAction::RequestMore
            } else {
                FeedAction::None
            }
        }
        KeyCode::End | KeyCode::Char('G') => {
            view.jump_to_end();
            FeedAction::RequestMore
        }
        KeyCode::Home | KeyCode::Char('g') => {
            view.jump_to_start();
            FeedAction::None
        }
        _ => FeedAction::None,
    }
}
