use crate::AppState;
use axum::{routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

/// Static usage payload served at the root.
#[derive(Serialize)]
struct InfoResponse {
    message: &'static str,
    usage: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn info() -> Json<InfoResponse> {
    Json(InfoResponse {
        message: "Crypto predictor ready",
        usage: "POST /predict with JSON {symbol, timeframe}",
    })
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(info))
        .route("/api/health", get(health))
}
