mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "waymark")]
#[command(version, about = "Waymark CLI - inspect routes and resolve paths", long_about = None)]
struct Cli {
    /// Path to the config file
    #[arg(short, long, global = true, default_value = "waymark.toml")]
    config: PathBuf,

    /// Log routing decisions (repeat for more detail)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List configured routes in match order
    Routes,

    /// Resolve one or more request paths
    Resolve {
        /// Request paths (query strings are ignored)
        #[arg(required = true)]
        paths: Vec<String>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "waymark=debug,waymark_router=debug",
        _ => "waymark=trace,waymark_router=trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = waymark::Config::load(&cli.config)?;
    tracing::debug!(path = ?cli.config, routes = config.routes.len(), "config loaded");

    // Execute command
    match cli.command {
        Commands::Routes => {
            commands::routes::execute(&config)?;
        }
        Commands::Resolve { paths, json } => {
            commands::resolve::execute(&config, &paths, json)?;
        }
    }

    Ok(())
}
