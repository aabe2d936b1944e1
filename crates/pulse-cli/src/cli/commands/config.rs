//! Config command handlers.

use std::path::Path;

use anyhow::{Context, Result};
use pulse_core::config::Config;

pub fn path(config_path: &Path) {
    println!("{}", config_path.display());
}

pub fn show(config_path: &Path) -> Result<()> {
    let config = Config::load_from(config_path)
        .with_context(|| format!("load config at {}", config_path.display()))?;
    print!("{}", config.to_toml()?);
    Ok(())
}
