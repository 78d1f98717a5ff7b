//! Subcommand implementations

pub mod init_db;
pub mod serve;

pub use init_db::{run_init_db, InitDbArgs};
pub use serve::{run_serve, ServeArgs};

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use hospital_server::ServerConfig;

/// Configuration sources shared by every subcommand
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    /// Config file (default: ~/.hospital/config.toml, if present)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Database URL (overrides the config file)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

impl ConfigArgs {
    /// Load the config file, then apply flag/environment overrides.
    pub fn resolve(&self) -> Result<ServerConfig> {
        let mut config =
            ServerConfig::load(self.config.as_deref()).context("Failed to load configuration")?;

        if let Some(url) = &self.database_url {
            config.database_url = url.clone();
        }

        Ok(config)
    }
}
