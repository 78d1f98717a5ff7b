//! Create the database file and schema, then exit

use anyhow::{Context, Result};
use clap::Parser;

use hospital_server::db::{create_pool, ensure_schema};

use super::ConfigArgs;

/// Arguments for the init-db command
#[derive(Parser, Debug)]
pub struct InitDbArgs {
    #[command(flatten)]
    pub config: ConfigArgs,
}

pub async fn run_init_db(args: InitDbArgs) -> Result<()> {
    let config = args.config.resolve()?;

    let pool = create_pool(&config.database_url)
        .await
        .with_context(|| format!("Failed to open database {}", config.database_url))?;

    ensure_schema(&pool)
        .await
        .context("Failed to create schema")?;

    pool.close().await;
    println!("Database ready: {}", config.database_url);
    Ok(())
}
