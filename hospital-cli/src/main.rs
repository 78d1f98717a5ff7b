//! hospital CLI - run the hospital records server
//!
//! - `serve`: HTTP server with patient/doctor pages and JSON API
//! - `init-db`: create the SQLite database and schema

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use tracing_setup::{init_tracing, TracingConfig};

#[derive(Parser, Debug)]
#[command(name = "hospital", version, about = "Hospital records server")]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server (HTML pages and JSON API)
    Serve(commands::ServeArgs),
    /// Create the database file and schema, then exit
    InitDb(commands::InitDbArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional; values there feed the clap `env` fallbacks
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::InitDb(args) => commands::run_init_db(args).await?,
    }

    Ok(())
}
