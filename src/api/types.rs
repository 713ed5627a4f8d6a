//! Shared DTOs for JSON responses.

use serde::Serialize;

use crate::{
    data::records::HistoricalRecord,
    forecast::{ConfidenceBand, Forecast, ForecastPoint, ForecastStatus},
};

/// Row of `GET /historical`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalDto {
    pub date: String,
    pub cpi: f64,
    pub inflation: f64,
    pub rate: f64,
    pub bank_rate: f64,
}

/// Historical point inside the forecast payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryPointDto {
    pub date: String,
    pub value: f64,
    pub cpi: f64,
    pub rate: f64,
    pub bank_rate: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ForecastPointDto {
    pub date: String,
    pub value: f64,
    pub confidence: ConfidenceBand,
}

/// Body of `GET /forecast`.
#[derive(Debug, Clone, Serialize)]
pub struct ForecastResponse {
    pub status: ForecastStatus,
    pub data: Vec<HistoryPointDto>,
    pub forecast: Vec<ForecastPointDto>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl From<HistoricalRecord> for HistoricalDto {
    fn from(value: HistoricalRecord) -> Self {
        HistoricalDto {
            date: value.date,
            cpi: value.cpi,
            inflation: value.inflation_rate,
            rate: value.policy_rate,
            bank_rate: value.bank_rate,
        }
    }
}

impl From<HistoricalRecord> for HistoryPointDto {
    fn from(value: HistoricalRecord) -> Self {
        HistoryPointDto {
            date: value.date,
            value: value.inflation_rate,
            cpi: value.cpi,
            rate: value.policy_rate,
            bank_rate: value.bank_rate,
        }
    }
}

impl From<ForecastPoint> for ForecastPointDto {
    fn from(value: ForecastPoint) -> Self {
        ForecastPointDto {
            date: value.date,
            value: value.value,
            confidence: value.confidence,
        }
    }
}

impl From<Forecast> for ForecastResponse {
    fn from(value: Forecast) -> Self {
        ForecastResponse {
            status: value.status,
            data: value.history.into_iter().map(Into::into).collect(),
            forecast: value.points.into_iter().map(Into::into).collect(),
        }
    }
}
