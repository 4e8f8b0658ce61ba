//! Axum route handlers for resume persistence.

use anyhow::Context;
use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SaveResumeResponse {
    pub message: String,
    pub resume_id: String,
}

#[derive(Debug, Serialize)]
pub struct ResumeListResponse {
    pub resumes: Vec<String>,
}

/// POST /save-resume
///
/// Accepts any JSON object as the resume document, assigns it an identifier
/// and timestamp, and persists it to the in-memory store plus a JSON file
/// mirror on disk.
pub async fn handle_save_resume(
    State(state): State<AppState>,
    Json(document): Json<Map<String, Value>>,
) -> Result<Json<SaveResumeResponse>, AppError> {
    let resume_id = state
        .store
        .save(document)
        .await
        .context("Save failed")?;

    Ok(Json(SaveResumeResponse {
        message: "Resume saved successfully".to_string(),
        resume_id,
    }))
}

/// GET /resumes
///
/// Lists the identifiers of all resumes saved since startup, oldest first.
pub async fn handle_list_resumes(
    State(state): State<AppState>,
) -> Result<Json<ResumeListResponse>, AppError> {
    let resumes = state.store.list().await;
    Ok(Json(ResumeListResponse { resumes }))
}

/// GET /resume/:resume_id
///
/// Returns a single saved resume document, or 404 when the identifier is
/// unknown.
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(resume_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let document = state
        .store
        .get(&resume_id)
        .await
        .ok_or_else(|| AppError::NotFound("Resume not found".to_string()))?;

    Ok(Json(document))
}
