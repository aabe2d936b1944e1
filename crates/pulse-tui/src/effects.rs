//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent task spawning and cancellation only (no direct UI mutations),
//! which keeps the reducer free of I/O.
//!
//! ## Cancellation
//!
//! The reducer decides when a load must die (its feed view was torn down) and
//! hands the token over in `UiEffect::CancelTask`; the runtime calls
//! `token.cancel()`.

use pulse_core::feed::{FeedKind, PageRequest};
use tokio_util::sync::CancellationToken;

use crate::common::TaskId;

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Fetch `request.page` for `feed` in the background.
    LoadPage {
        feed: FeedKind,
        task: TaskId,
        request: PageRequest,
        cancel: CancellationToken,
    },

    /// Abort an in-flight page load.
    CancelTask {
        feed: FeedKind,
        token: CancellationToken,
    },
}
