use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Bad request: {message}")]
    BadRequest { message: String },

    #[error("Analysis failed: {0}")]
    Analysis(#[from] anyhow::Error),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub code: String,
    pub timestamp: String,
}

impl ErrorResponse {
    pub fn new(error_type: &str, message: String, code: &str) -> Self {
        Self {
            error: error_type.to_string(),
            message,
            code: code.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            AppError::BadRequest { ref message } => {
                warn!("Bad request: {}", message);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new("bad_request", message.clone(), "BAD_REQUEST"),
                )
            }
            AppError::Analysis(ref e) => {
                error!("Analysis failed: {:#}", e);
                (
                    StatusCode::BAD_GATEWAY,
                    ErrorResponse::new(
                        "analysis_failed",
                        "Log analysis failed".to_string(),
                        "ANALYSIS_FAILED",
                    ),
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}
