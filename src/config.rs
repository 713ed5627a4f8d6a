//! Runtime configuration for the forecast service.

use std::{env, path::PathBuf};

use serde::Deserialize;

/// Trailing window of historical points returned alongside the forecast.
pub const DEFAULT_HISTORY_WINDOW: usize = 12;

/// Application configuration resolved from `.env` and defaults.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Settings {
    /// Observed series: `date,cpi,inflation,rate,bankRate`.
    pub historical_csv: PathBuf,
    /// Predicted series: `date,predicted_inflation,cpi,rate,bankRate`.
    pub forecast_csv: PathBuf,
    /// Number of trailing historical points attached to a forecast.
    pub history_window: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            historical_csv: PathBuf::from("./data/Inflation _ data.csv"),
            forecast_csv: PathBuf::from("./models/future_predictions.csv"),
            history_window: DEFAULT_HISTORY_WINDOW,
        }
    }
}

impl Settings {
    /// Load configuration from environment with reasonable defaults.
    ///
    /// Data files are not touched here; a missing file surfaces per request.
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        let defaults = Self::default();
        let historical_csv = env::var("HISTORICAL_CSV")
            .map(PathBuf::from)
            .unwrap_or(defaults.historical_csv);
        let forecast_csv = env::var("FORECAST_CSV")
            .map(PathBuf::from)
            .unwrap_or(defaults.forecast_csv);
        let history_window = env::var("HISTORY_WINDOW")
            .ok()
            .and_then(|v| v.trim().parse().ok())
            .filter(|&n: &usize| n > 0)
            .unwrap_or(defaults.history_window);

        Self {
            historical_csv,
            forecast_csv,
            history_window,
        }
    }

    /// Settings pointing at explicit files, keeping the default window.
    pub fn with_paths(historical_csv: impl Into<PathBuf>, forecast_csv: impl Into<PathBuf>) -> Self {
        Self {
            historical_csv: historical_csv.into(),
            forecast_csv: forecast_csv.into(),
            ..Self::default()
        }
    }
}
