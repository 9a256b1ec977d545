//! `statcard stats`: print the aggregated statistics as JSON.

use clap::Args;
use statcard_core::StatsAggregator;
use std::io::Write;

use crate::commands::check_username;
use crate::errors::Error;

#[cfg(test)]
#[path = "stats_cmd_tests.rs"]
mod tests;

/// Arguments for the `stats` subcommand.
#[derive(Args, Debug, Clone)]
pub struct StatsArgs {
    /// GitHub username to summarize
    #[arg(short, long)]
    pub username: String,
}

pub async fn execute<W: Write>(
    aggregator: &StatsAggregator,
    args: &StatsArgs,
    stdout: &mut W,
) -> Result<(), Error> {
    check_username(&args.username)?;

    let stats = aggregator.fetch_stats(&args.username).await?;

    let json = serde_json::to_string_pretty(&stats)?;
    writeln!(stdout, "{json}").map_err(Error::Stdout)?;

    Ok(())
}
