//! Server configuration - defaults and TOML file loading
//!
//! Layering (lowest to highest):
//! - built-in defaults
//! - `~/.hospital/config.toml` (or an explicit path)
//! - environment / command-line flags, applied by the CLI
//!
//! Example file:
//!
//! ```toml
//! bind_addr = "0.0.0.0:8080"
//! database_url = "sqlite:///var/lib/hospital/hastane.db"
//! request_timeout_secs = 10
//! ```

use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Default database: a file next to the working directory.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://hastane.db";

/// Configuration loading error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid config file {path}: {reason}")]
    Invalid { path: PathBuf, reason: &'static str },
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:5000)
    pub bind_addr: SocketAddr,

    /// SQLite database URL (default: sqlite://hastane.db)
    pub database_url: String,

    /// Allow permissive CORS (default: false = localhost only)
    pub cors_permissive: bool,

    /// Per-request timeout in seconds, at least 1
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            database_url: DEFAULT_DATABASE_URL.to_string(),
            cors_permissive: false,
            request_timeout_secs: 30,
        }
    }
}

impl ServerConfig {
    /// Default config file path: ~/.hospital/config.toml
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".hospital")
            .join("config.toml")
    }

    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, the default path is read
    /// if present and built-in defaults are used otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let path = Self::default_path();
                if path.exists() {
                    Self::from_file(&path)
                } else {
                    tracing::debug!(path = %path.display(), "No config file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Parse a config file. Missing keys fall back to defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if config.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                path: path.to_path_buf(),
                reason: "request_timeout_secs must be at least 1",
            });
        }

        tracing::debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }
}
