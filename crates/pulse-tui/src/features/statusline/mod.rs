//! Status line feature slice.
//!
//! - `state.rs`: transient notices (e.g. "new post" announcements)
//! - `render.rs`: the one-line bar below the panes

mod render;
mod state;

pub use render::{SPINNER_FRAMES, render_status_line};
pub use state::{NOTICE_DURATION, Notice};
