//! HTTP server command
//!
//! Opens the database, ensures the schema, and serves until Ctrl+C/SIGTERM.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use hospital_server::db::{create_pool, ensure_schema};
use hospital_server::run_server;

use super::ConfigArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Address to bind to (default: 127.0.0.1:5000)
    #[arg(long, short = 'b', env = "HOSPITAL_BIND")]
    pub bind: Option<SocketAddr>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Request timeout in seconds (at least 1)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let mut config = args.config.resolve()?;
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    if args.cors_permissive {
        config.cors_permissive = true;
    }
    if let Some(timeout) = args.timeout {
        config.request_timeout_secs = timeout;
    }

    tracing::info!("Opening database {}", config.database_url);
    let pool = create_pool(&config.database_url)
        .await
        .context("Failed to create database pool")?;

    ensure_schema(&pool)
        .await
        .context("Failed to create schema")?;

    // Blocks until shutdown
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
