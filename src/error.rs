use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::submission::fields::FieldError;

#[derive(Debug)]
pub enum AppError {
    Validation(FieldError),
    Database(sqlx::Error),
    Export(rust_xlsxwriter::XlsxError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Validation(err) => write!(f, "Validation Error: {err}"),
            AppError::Database(err) => write!(f, "Database Error: {err}"),
            AppError::Export(err) => write!(f, "Export Error: {err}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Validation(err) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({ "error": err.to_string(), "field": err.field }),
            ),
            AppError::Database(err) => {
                tracing::error!("Database error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal server error" }),
                )
            }
            AppError::Export(err) => {
                tracing::error!("Export error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal server error" }),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<FieldError> for AppError {
    fn from(err: FieldError) -> Self {
        AppError::Validation(err)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Database(err)
    }
}

impl From<rust_xlsxwriter::XlsxError> for AppError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        AppError::Export(err)
    }
}
