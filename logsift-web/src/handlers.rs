use axum::{
    extract::{Multipart, State},
    response::Json,
};
use serde::Deserialize;
use tracing::info;

use logsift_core::{decode_log_bytes, AnalysisResult};

use crate::{error::AppError, AppState};

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
    pub log_type: Option<String>,
    #[serde(default = "default_mode")]
    pub mode: String,
}

fn default_mode() -> String {
    "standard".to_string()
}

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "logsift-web",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// POST /analyze: raw log text in a JSON body.
pub async fn analyze(
    State(state): State<AppState>,
    Json(payload): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisResult>, AppError> {
    info!(
        "Analyze request: {} bytes of text, mode={}",
        payload.text.len(),
        payload.mode
    );
    let result = state
        .analyzer
        .analyze(&payload.text, payload.log_type.as_deref(), &payload.mode)
        .await?;
    Ok(Json(result))
}

/// POST /analyze-file: multipart upload with a `file` field plus optional
/// `log_type` and `mode` form fields. Unknown fields are ignored.
pub async fn analyze_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisResult>, AppError> {
    let mut text: Option<String> = None;
    let mut log_type: Option<String> = None;
    let mut mode = default_mode();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::bad_request(format!("Multipart error: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "file" => {
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::bad_request(format!("Failed to read file: {}", e)))?;
                info!("Received upload of {} bytes", data.len());
                text = Some(decode_log_bytes(&data));
            }
            "log_type" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::bad_request(format!("Invalid log_type field: {}", e)))?;
                if !value.is_empty() {
                    log_type = Some(value);
                }
            }
            "mode" => {
                mode = field
                    .text()
                    .await
                    .map_err(|e| AppError::bad_request(format!("Invalid mode field: {}", e)))?;
            }
            _ => {}
        }
    }

    let text = text.ok_or_else(|| AppError::bad_request("Missing 'file' field"))?;

    let result = state
        .analyzer
        .analyze(&text, log_type.as_deref(), &mode)
        .await?;
    Ok(Json(result))
}
