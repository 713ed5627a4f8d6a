//! Forecast aggregation: historical window plus banded predictions.

pub mod band;

use serde::Serialize;
use tracing::{info, instrument};

use crate::{
    config::Settings,
    data::{
        records::{ForecastRecord, HistoricalRecord},
        series,
    },
    error::Result,
};

pub use band::ConfidenceBand;
use band::{round_to, trailing, FORECAST_DECIMALS};

/// Headline assessment attached to every forecast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ForecastStatus {
    #[serde(rename = "Moderate Concern")]
    ModerateConcern,
}

impl ForecastStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::ModerateConcern => "Moderate Concern",
        }
    }
}

/// A predicted period with its rounded value and band.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastPoint {
    pub date: String,
    pub value: f64,
    pub confidence: ConfidenceBand,
}

impl From<&ForecastRecord> for ForecastPoint {
    fn from(record: &ForecastRecord) -> Self {
        Self {
            date: record.date.clone(),
            value: round_to(record.predicted_inflation, FORECAST_DECIMALS),
            confidence: ConfidenceBand::around(record.predicted_inflation),
        }
    }
}

/// Combined historical window and annotated predictions.
#[derive(Debug, Clone, PartialEq)]
pub struct Forecast {
    pub status: ForecastStatus,
    pub history: Vec<HistoricalRecord>,
    pub points: Vec<ForecastPoint>,
}

/// Reads both series on every call; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct ForecastAggregator {
    settings: Settings,
}

impl ForecastAggregator {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// All historical rows with a numeric inflation value, in file order.
    #[instrument(skip(self), fields(path = %self.settings.historical_csv.display()))]
    pub async fn historical(&self) -> Result<Vec<HistoricalRecord>> {
        series::read_historical(&self.settings.historical_csv).await
    }

    /// Trailing historical window plus every predicted point with its band.
    #[instrument(skip(self))]
    pub async fn forecast(&self) -> Result<Forecast> {
        let predictions = series::read_forecast(&self.settings.forecast_csv).await?;
        let historical = series::read_historical(&self.settings.historical_csv).await?;

        let history = trailing(&historical, self.settings.history_window).to_vec();
        let points: Vec<ForecastPoint> = predictions.iter().map(ForecastPoint::from).collect();
        let status = ForecastStatus::ModerateConcern;

        info!(
            status = status.label(),
            history = history.len(),
            forecast = points.len(),
            "assembled inflation forecast"
        );
        Ok(Forecast {
            status,
            history,
            points,
        })
    }
}
