use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Deserialize;

use crate::error::Result;

const DEFAULT_CONFIG_PATH: &str = "config/spent.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where the settings record is kept.
    pub state_path: PathBuf,
    /// Log level for the `spent` and `currency` targets.
    pub level: String,
    /// When `false`, settings live in memory only.
    pub persist: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            state_path: PathBuf::from(currency::DEFAULT_STATE_PATH),
            level: "info".to_string(),
            persist: true,
        }
    }
}

impl AppConfig {
    /// Path handed to the storage capability check, `None` if disabled.
    pub fn storage_path(&self) -> Option<&std::path::Path> {
        self.persist.then_some(self.state_path.as_path())
    }
}

#[derive(Debug, Parser)]
#[command(name = "spent", about = "Currency display settings for Spent")]
pub struct Cli {
    /// Optional config file path (TOML).
    #[arg(long, global = true)]
    pub config: Option<String>,
    /// Override the state file path.
    #[arg(long, global = true)]
    pub state_path: Option<PathBuf>,
    /// Override the log level (e.g. debug, warn).
    #[arg(long, global = true)]
    pub level: Option<String>,
    /// Keep settings in memory only.
    #[arg(long, global = true)]
    pub ephemeral: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the active currency settings.
    Show,
    /// List the supported currencies.
    List,
    /// Make a catalog currency active (e.g. `spent set EUR`).
    Set { code: String },
    /// Format amounts given in minor units (cents).
    Format {
        #[arg(required = true, allow_negative_numbers = true)]
        amounts: Vec<i64>,
    },
}

pub fn load(cli: &Cli) -> Result<AppConfig> {
    load_with_env(cli, None)
}

/// Same as [`load`], reading `SPENT_*` variables from `env` instead of the
/// process environment when given.
fn load_with_env(cli: &Cli, env: Option<config::Map<String, String>>) -> Result<AppConfig> {
    let config_path = cli.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(
        config::Environment::with_prefix("SPENT")
            .try_parsing(true)
            .source(env),
    );
    let mut settings: AppConfig = builder.build()?.try_deserialize()?;

    if let Some(state_path) = &cli.state_path {
        settings.state_path = state_path.clone();
    }
    if let Some(level) = &cli.level {
        settings.level = level.clone();
    }
    if cli.ephemeral {
        settings.persist = false;
    }

    Ok(settings)
}
