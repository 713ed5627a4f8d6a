//! Print the validated historical series.

use anyhow::{Context, Result};
use tracing::instrument;

use crate::{api::types::HistoricalDto, config::Settings, forecast::ForecastAggregator};

#[instrument(skip(settings))]
pub async fn run(settings: Settings) -> Result<()> {
    let records = ForecastAggregator::new(settings)
        .historical()
        .await
        .context("fetching historical data")?;
    let rows: Vec<HistoricalDto> = records.into_iter().map(Into::into).collect();
    println!("{}", serde_json::to_string(&rows)?);
    Ok(())
}
