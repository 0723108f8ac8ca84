use crate::error::{AppError, Result};
use crate::types::{Prediction, Timeframe};
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use serde::Deserialize;

fn default_timeframe() -> String {
    Timeframe::default().as_str().to_string()
}

/// Body of `POST /predict`.
#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    pub symbol: String,
    /// One of 1m, 5m, 15m, 1h, 4h, 1d. Defaults to 1h when absent; an
    /// explicit `null` is rejected.
    #[serde(default = "default_timeframe")]
    pub timeframe: String,
}

impl PredictRequest {
    /// Resolve the requested timeframe, rejecting anything unsupported.
    pub fn timeframe(&self) -> Result<Timeframe> {
        Timeframe::from_str(&self.timeframe).ok_or_else(|| {
            AppError::InvalidParameter(format!(
                "unsupported timeframe '{}', expected one of 1m, 5m, 15m, 1h, 4h, 1d",
                self.timeframe
            ))
        })
    }
}

/// POST /predict
async fn predict(
    State(state): State<AppState>,
    payload: std::result::Result<Json<PredictRequest>, JsonRejection>,
) -> Result<Json<Prediction>> {
    let Json(body) = payload.map_err(|rejection| AppError::InvalidParameter(rejection.body_text()))?;
    let timeframe = body.timeframe()?;
    let prediction = state.predictor.predict(&body.symbol, timeframe).await?;
    Ok(Json(prediction))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/predict", post(predict))
}
