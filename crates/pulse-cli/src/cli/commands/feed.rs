//! Interactive feed command.

use anyhow::Result;
use pulse_core::config::Config;

pub fn run(config: &Config) -> Result<()> {
    tracing::info!(
        delay_ms = config.feed.load_delay_ms,
        timeout_ms = config.feed.load_timeout_ms,
        "starting pulse"
    );
    pulse_tui::run(config)?;
    eprintln!("Goodbye!");
    Ok(())
}
