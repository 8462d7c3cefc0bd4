//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigError};

#[derive(Debug, Parser)]
#[command(name = "feature-vote", version, about = "Submit feature requests and vote on them")]
pub struct Cli {
    /// Path to the config file (defaults to the user config directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the feature server base URL
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,
}

impl Cli {
    /// Loads the config file and applies command-line overrides on top.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let path = self.config.clone().unwrap_or_else(Config::config_path);
        let mut config = Config::load_from(&path)?;
        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
            config.validate()?;
        }
        Ok(config)
    }
}
