//! Shared TUI primitives (tasks, widgets, text, theme).

pub mod scrollbar;
pub mod task;
pub mod text;
pub mod theme;

pub use scrollbar::Scrollbar;
pub use task::{TaskCompleted, TaskId, TaskSeq, TaskState, Tasks};
pub use theme::Theme;
