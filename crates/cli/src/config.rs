//! Client configuration loading
//!
//! Precedence, lowest first: built-in defaults, config file, `RUNDECK_*`
//! environment variables, command-line flags.

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use directories::ProjectDirs;
use rundeck_sdk::{ApiVersion, ClientConfig};
use std::path::PathBuf;
use tracing::debug;

pub const DEFAULT_URL: &str = "http://127.0.0.1:4440";
const ENV_PREFIX: &str = "RUNDECK";

/// Values given explicitly on the command line
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Config file; must exist when given
    pub config_file: Option<PathBuf>,
    pub url: Option<String>,
    pub token: Option<String>,
    pub api_version: Option<u32>,
}

/// `<platform config dir>/rundeck/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("org", "rundeck", "rundeck").map(|dirs| dirs.config_dir().join("config.toml"))
}

pub fn load(overrides: &ConfigOverrides) -> Result<ClientConfig> {
    let mut builder = Config::builder()
        .set_default("url", DEFAULT_URL)?
        .set_default("api_version", i64::from(ApiVersion::DEFAULT.get()))?;

    match &overrides.config_file {
        Some(path) => {
            debug!(path = %path.display(), "Loading config file");
            builder = builder.add_source(File::from(path.clone()).required(true));
        }
        None => {
            if let Some(path) = default_config_path() {
                builder = builder.add_source(File::from(path).required(false));
            }
        }
    }

    let config: ClientConfig = builder
        .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
        .set_override_option("url", overrides.url.clone())?
        .set_override_option("token", overrides.token.clone())?
        .set_override_option("api_version", overrides.api_version.map(i64::from))?
        .build()
        .context("Failed to load configuration")?
        .try_deserialize()
        .context("Invalid configuration")?;

    debug!(config = ?config, "Configuration loaded");

    Ok(config)
}
