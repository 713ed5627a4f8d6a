//! Command-line interface wiring for the inflation forecast service.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Settings;

pub mod forecast;
pub mod historical;
pub mod serve;

/// Top-level CLI definition.
#[derive(Debug, Parser)]
#[command(author, version, about = "Inflation history and forecast service", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Parse CLI arguments from the environment.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Dispatch the selected sub-command.
    pub async fn dispatch(self, settings: Settings) -> Result<()> {
        match self.command {
            Commands::Serve(args) => serve::run(args, settings).await,
            Commands::Historical => historical::run(settings).await,
            Commands::Forecast(args) => forecast::run(args, settings).await,
        }
    }
}

/// Supported sub-commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Serve the JSON API.
    Serve(serve::Args),
    /// Print the historical series as JSON.
    Historical,
    /// Print the forecast payload as JSON.
    Forecast(forecast::Args),
}
