//! Sidebar navigation and the section slide transition.

mod render;
mod transition;

pub use render::{SIDEBAR_WIDTH, render_sidebar};
pub use transition::{SLIDE_DURATION, SlideTransition, ease_out_cubic};
