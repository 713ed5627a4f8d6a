//! Print the forecast payload.

use anyhow::{Context, Result};
use clap::Args as ClapArgs;
use tracing::instrument;

use crate::{api::types::ForecastResponse, config::Settings, forecast::ForecastAggregator};

#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Indent the JSON output.
    #[arg(long)]
    pub pretty: bool,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let forecast = ForecastAggregator::new(settings)
        .forecast()
        .await
        .context("generating forecast")?;
    let response = ForecastResponse::from(forecast);
    let json = if args.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{json}");
    Ok(())
}
