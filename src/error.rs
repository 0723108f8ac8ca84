use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    /// The market-data provider failed, timed out, or answered with a non-success status.
    #[error("Data source error{}: {message}", status_suffix(.status))]
    DataSource {
        status: Option<u16>,
        message: String,
    },

    #[error("Malformed candle data: {0}")]
    MalformedData(String),

    #[error("Insufficient data: at least {required} values required")]
    InsufficientData { required: usize },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" {}", s)).unwrap_or_default()
}

impl AppError {
    /// Machine-readable error class.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::DataSource { .. } => "data_source_error",
            AppError::MalformedData(_) => "malformed_data",
            AppError::InsufficientData { .. } => "insufficient_data",
            AppError::InvalidParameter(_) => "invalid_parameter",
        }
    }

    /// HTTP status this error is reported with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::DataSource { .. } | AppError::MalformedData(_) => StatusCode::BAD_GATEWAY,
            AppError::InsufficientData { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::InvalidParameter(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::DataSource {
            status: e.status().map(|s| s.as_u16()),
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = Json(json!({
            "error": self.to_string(),
            "kind": self.kind(),
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
