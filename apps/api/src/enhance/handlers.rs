//! Axum route handlers for the Enhancement API.

use anyhow::Context;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct EnhanceRequest {
    pub section: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct EnhanceResponse {
    pub enhanced_content: String,
}

/// POST /ai-enhance
///
/// Enhances resume section content through the configured backend. Empty or
/// whitespace-only content is rejected with 400 before the backend runs; any
/// backend failure surfaces as 500 with an "Enhancement failed" detail.
pub async fn handle_enhance(
    State(state): State<AppState>,
    Json(request): Json<EnhanceRequest>,
) -> Result<Json<EnhanceResponse>, AppError> {
    if request.content.trim().is_empty() {
        return Err(AppError::Validation("Content cannot be empty".to_string()));
    }

    let enhanced_content = state
        .enhancer
        .enhance(&request.section, &request.content)
        .await
        .context("Enhancement failed")?;

    Ok(Json(EnhanceResponse { enhanced_content }))
}
