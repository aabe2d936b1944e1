//! Settings feature slice: preference toggles plus a static about block.

mod render;
mod update;

pub use render::render_settings;
pub use update::{SettingsState, handle_key};
