//! Feed feature slice.
//!
//! - `state.rs`: per-feed view state (posts + cursor)
//! - `update.rs`: load requests, teardown cancellation, key handling
//! - `render.rs`: post list rendering
//!
//! All feed growth goes through [`request_more`]; the loading flag inside
//! [`pulse_core::feed::Feed`] guarantees one in-flight load per feed.

mod render;
mod state;
mod update;

pub use render::{FeedLines, feed_lines, render_feed, scroll_offset};
pub use state::{FeedView, Feeds};
pub use update::{FeedAction, PageApplied, handle_key, handle_page_loaded, request_more, unmount};
