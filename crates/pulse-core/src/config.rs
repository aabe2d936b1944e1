//! Configuration management for Pulse.
//!
//! Loads configuration from ${PULSE_HOME}/config.toml with sensible defaults.
//! The file is read-only from Pulse's point of view; nothing is written back.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::preferences::Preferences;

pub mod paths {
    //! Path resolution for Pulse configuration and log directories.
    //!
    //! PULSE_HOME resolution order:
    //! 1. PULSE_HOME environment variable (if set)
    //! 2. ~/.config/pulse (default)
    //! 3. ./.pulse when no home directory can be determined

    use std::path::PathBuf;

    /// Returns the Pulse home directory.
    pub fn pulse_home() -> PathBuf {
        if let Ok(home) = std::env::var("PULSE_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".pulse"),
            |h| h.join(".config").join("pulse"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        pulse_home().join("config.toml")
    }

    /// Returns the directory log files are written to.
    pub fn log_dir() -> PathBuf {
        pulse_home().join("logs")
    }
}

/// Feed loading behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Artificial delay before the sample source yields a page.
    pub load_delay_ms: u64,
    /// Upper bound for a single page load.
    pub load_timeout_ms: u64,
    /// Load a page whenever a feed section is shown.
    pub load_on_mount: bool,
}

impl FeedConfig {
    const DEFAULT_LOAD_DELAY_MS: u64 = 1_000;
    const DEFAULT_LOAD_TIMEOUT_MS: u64 = 5_000;

    pub fn load_delay(&self) -> Duration {
        Duration::from_millis(self.load_delay_ms)
    }

    pub fn load_timeout(&self) -> Duration {
        Duration::from_millis(self.load_timeout_ms)
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            load_delay_ms: Self::DEFAULT_LOAD_DELAY_MS,
            load_timeout_ms: Self::DEFAULT_LOAD_TIMEOUT_MS,
            load_on_mount: true,
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub feed: FeedConfig,
    /// Initial values for the settings screen toggles.
    pub preferences: Preferences,
}

impl Config {
    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Renders the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.feed.load_delay(), Duration::from_secs(1));
        assert!(config.feed.load_on_mount);
        assert!(config.preferences.dark_mode);
    }

    #[test]
    fn test_load_partial_config_merges_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        fs::write(
            &config_path,
            "[feed]\nload_delay_ms = 250\n\n[preferences]\nnotifications = false\n",
        )
        .unwrap();

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.feed.load_delay_ms, 250);
        assert_eq!(config.feed.load_timeout_ms, 5_000);
        assert!(config.preferences.dark_mode);
        assert!(!config.preferences.notifications);
    }

    #[test]
    fn test_load_invalid_config_reports_path() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "[feed]\nload_delay_ms = \"soon\"\n").unwrap();

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config"));
    }

    #[test]
    fn test_to_toml_round_trips() {
        let config = Config::default();
        let text = config.to_toml().unwrap();
        assert!(text.contains("[feed]"));
        assert!(text.contains("load_delay_ms = 1000"));
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
