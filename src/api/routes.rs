//! HTTP route handlers for Axum.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{error, info};

use crate::api::types::{ErrorBody, ForecastResponse, HistoricalDto};

use super::AppState;

type ApiResult<T> = Result<Json<T>, ApiError>;

/// Error rendered as `{ "error": message }`.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }

    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: "Not Found".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

pub async fn historical(State(state): State<AppState>) -> ApiResult<Vec<HistoricalDto>> {
    let records = state.aggregator.historical().await.map_err(|err| {
        error!(%err, "error fetching historical data");
        ApiError::internal("Failed to fetch historical data")
    })?;
    Ok(Json(records.into_iter().map(HistoricalDto::from).collect()))
}

pub async fn forecast(State(state): State<AppState>) -> ApiResult<ForecastResponse> {
    info!("generating inflation forecast");
    let forecast = state.aggregator.forecast().await.map_err(|err| {
        error!(%err, "error generating forecast");
        ApiError::internal(format!("Failed to generate forecast: {err}"))
    })?;
    Ok(Json(forecast.into()))
}

pub async fn not_found() -> ApiError {
    ApiError::not_found()
}
