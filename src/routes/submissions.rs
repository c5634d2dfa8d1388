use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde_json::json;
use uuid::Uuid;

use crate::error::AppError;
use crate::export as xlsx;
use crate::models::{NewSubmission, Submission};
use crate::state::SharedState;
use crate::submission::service;

pub async fn create(
    State(state): State<SharedState>,
    Json(input): Json<NewSubmission>,
) -> Result<Json<Submission>, AppError> {
    let submission = service::create(&state.pool, input).await?;
    Ok(Json(submission))
}

pub async fn list(State(state): State<SharedState>) -> Result<Json<Vec<Submission>>, AppError> {
    let submissions = service::list(&state.pool).await?;
    Ok(Json(submissions))
}

pub async fn export(State(state): State<SharedState>) -> Result<Response, AppError> {
    let submissions = service::list(&state.pool).await?;
    let workbook = xlsx::render(&submissions)?;

    let disposition = format!("attachment; filename={}", xlsx::filename(Utc::now()));

    Ok((
        [
            (header::CONTENT_TYPE, xlsx::CONTENT_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        workbook,
    )
        .into_response())
}

pub async fn delete(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    // Ids are opaque to callers; a malformed id cannot name a stored row.
    let deleted = match Uuid::parse_str(&id) {
        Ok(id) => service::delete(&state.pool, id).await?,
        Err(_) => false,
    };

    let body = if deleted {
        json!({ "success": true, "message": "Submission deleted" })
    } else {
        json!({ "success": false, "message": "Submission not found" })
    };

    Ok(Json(body))
}
