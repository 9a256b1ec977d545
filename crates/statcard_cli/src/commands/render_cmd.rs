//! `statcard render`: write a user card to a file or stdout.

use clap::Args;
use statcard_core::StatsAggregator;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

use crate::commands::check_username;
use crate::errors::Error;

#[cfg(test)]
#[path = "render_cmd_tests.rs"]
mod tests;

/// Arguments for the `render` subcommand.
#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    /// GitHub username to render
    #[arg(short, long)]
    pub username: String,

    /// Card theme: light, dark, gradient or transparent
    #[arg(short, long, default_value = "dark")]
    pub theme: String,

    /// File to write the SVG to; stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Renders the card described by `args`.
///
/// A user whose statistics cannot be loaded gets the error card, as on the image
/// endpoint. Only an invalid username and output failures are errors.
pub async fn execute<W: Write>(
    aggregator: &StatsAggregator,
    args: &RenderArgs,
    stdout: &mut W,
) -> Result<(), Error> {
    check_username(&args.username)?;

    let svg = card_renderer::render_user_card(aggregator, &args.username, &args.theme).await;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &svg).map_err(|source| Error::WriteFile {
                path: path.clone(),
                source,
            })?;
            info!(username = %args.username, path = %path.display(), "Card written");
        }
        None => {
            stdout.write_all(svg.as_bytes()).map_err(Error::Stdout)?;
            stdout.flush().map_err(Error::Stdout)?;
        }
    }

    Ok(())
}
