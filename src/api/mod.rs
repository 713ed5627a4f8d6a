//! HTTP layer exposing the historical series and the forecast.

pub mod routes;
pub mod types;

use std::net::SocketAddr;

use anyhow::Result;
use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

use crate::{config::Settings, forecast::ForecastAggregator};

#[derive(Clone)]
pub struct AppState {
    pub aggregator: ForecastAggregator,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            aggregator: ForecastAggregator::new(settings),
        }
    }
}

/// Routes are served at the root and under `/api/inflation`.
pub fn router(state: AppState) -> Router {
    let inflation = Router::new()
        .route("/historical", get(routes::historical))
        .route("/forecast", get(routes::forecast));

    Router::new()
        .merge(inflation.clone())
        .nest("/api/inflation", inflation)
        .fallback(routes::not_found)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve(settings: Settings, host: String, port: u16) -> Result<()> {
    let router = router(AppState::new(settings));

    let addr: SocketAddr = format!("{host}:{port}").parse()?;
    info!(%addr, "serving inflation forecast API");
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(%err, "unable to listen for ctrl-c; running until killed");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
