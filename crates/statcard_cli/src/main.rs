use std::io;

use clap::{Parser, Subcommand};

mod commands;
mod errors;

use commands::{build_aggregator, render_cmd::RenderArgs, stats_cmd::StatsArgs, UpstreamSettings};
use errors::Error;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;

/// statcard CLI: Render GitHub stat cards from the command line
#[derive(Parser)]
#[command(name = "statcard")]
#[command(about = "Render GitHub stat cards from the command line", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a user stat card as SVG
    Render(RenderArgs),

    /// Print aggregated user statistics as JSON
    Stats(StatsArgs),

    /// Show the CLI version
    Version,
}

async fn run(command: &Commands) -> Result<(), Error> {
    let mut stdout = io::stdout();

    match command {
        Commands::Render(args) => {
            let aggregator = build_aggregator(&UpstreamSettings::from_env())?;
            commands::render_cmd::execute(&aggregator, args, &mut stdout).await
        }
        Commands::Stats(args) => {
            let aggregator = build_aggregator(&UpstreamSettings::from_env())?;
            commands::stats_cmd::execute(&aggregator, args, &mut stdout).await
        }
        Commands::Version => {
            println!("statcard version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().pretty().with_writer(io::stderr))
        .with(EnvFilter::from_env("STATCARD_LOG"))
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli.command).await {
        error!("Error: {e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
