//! CLI entry and dispatch.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use pulse_core::config::{self, Config};
use pulse_core::interrupt;

mod commands;

#[derive(Parser)]
#[command(name = "pulse")]
#[command(version)]
#[command(about = "Mock social feed for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file to use (default: $PULSE_HOME/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the sample feed load delay in milliseconds
    #[arg(long, value_name = "MS")]
    delay_ms: Option<u64>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Inspect configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Print the effective configuration as TOML
    Show,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config.clone().unwrap_or_else(config::paths::config_path);

    match cli.command {
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Path => {
                commands::config::path(&config_path);
                Ok(())
            }
            ConfigCommands::Show => commands::config::show(&config_path),
        },
        None => {
            let mut config = Config::load_from(&config_path).context("load config")?;
            if let Some(ms) = cli.delay_ms {
                config.feed.load_delay_ms = ms;
            }
            run_tui(&config)
        }
    }
}

fn run_tui(config: &Config) -> Result<()> {
    let _log_guard = pulse_core::logging::init(&config::paths::log_dir());
    interrupt::init()?;

    // one tokio runtime for the page loads; the event loop itself is sync
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;
    let _enter = rt.enter();
    commands::feed::run(config)
}
