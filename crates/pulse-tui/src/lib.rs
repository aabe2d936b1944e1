//! Full-screen TUI for Pulse.
//!
//! Elm-style: `update` mutates `AppState` and returns effects, `render` draws
//! it, and `runtime` owns the terminal and runs effects on tokio.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stdout};
use std::sync::Arc;

use anyhow::Result;
pub use features::{feed, profile, settings, sidebar, statusline};
use pulse_core::config::Config;
use pulse_core::feed::{FeedSource, SampleSource};
pub use runtime::TuiRuntime;

/// Runs the interactive app against the built-in sample feed.
///
/// Must be called from within a tokio runtime context.
pub fn run(config: &Config) -> Result<()> {
    let source: Arc<dyn FeedSource> = Arc::new(SampleSource::new(config.feed.load_delay()));
    run_with_source(config, source)
}

/// Runs the interactive app against an arbitrary feed source.
pub fn run_with_source(config: &Config, source: Arc<dyn FeedSource>) -> Result<()> {
    if !stdout().is_terminal() {
        anyhow::bail!("Pulse requires a terminal (stdout is not a TTY).");
    }

    let mut runtime = TuiRuntime::new(config, source)?;
    runtime.run()
}
