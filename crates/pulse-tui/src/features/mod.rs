//! Feature slices for the TUI (state/update/render per slice).

pub mod feed;
pub mod profile;
pub mod settings;
pub mod sidebar;
pub mod statusline;
