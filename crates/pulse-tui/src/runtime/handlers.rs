//! Effect handlers for the TUI runtime.
//!
//! Handlers are pure async functions that return a `UiEvent`. They perform the
//! I/O and never touch `AppState`; the runtime spawns them and forwards the
//! result to the inbox.

use std::sync::Arc;
use std::time::Duration;

use pulse_core::feed::{FeedKind, FeedSource, PageOutcome, PageRequest, fetch_page_cancellable};
use tokio_util::sync::CancellationToken;

use crate::common::{TaskCompleted, TaskId};
use crate::events::{PageLoad, UiEvent};

/// Fetches one page and wraps the outcome as a `PageLoaded` event.
pub async fn load_page(
    source: Arc<dyn FeedSource>,
    feed: FeedKind,
    task: TaskId,
    request: PageRequest,
    timeout: Duration,
    cancel: CancellationToken,
) -> UiEvent {
    let page = request.page;
    let outcome = fetch_page_cancellable(source, page, timeout, cancel).await;
    match &outcome {
        PageOutcome::Loaded(posts) => {
            tracing::debug!(feed = feed.label(), page, count = posts.len(), "fetch finished");
        }
        PageOutcome::Failed(err) => {
            tracing::debug!(feed = feed.label(), page, error = %err, "fetch failed");
        }
        PageOutcome::Cancelled => {
            tracing::debug!(feed = feed.label(), page, "fetch cancelled");
        }
    }

    UiEvent::PageLoaded {
        feed,
        completed: TaskCompleted {
            id: task,
            result: PageLoad { request, outcome },
        },
    }
}
