use sqlx::PgPool;
use uuid::Uuid;

use crate::db;
use crate::error::AppError;
use crate::models::{NewSubmission, Submission};

use super::fields;

/// Validate, stamp, and persist a new registration. The insert is a single
/// row, so a storage failure leaves nothing behind.
pub async fn create(pool: &PgPool, input: NewSubmission) -> Result<Submission, AppError> {
    fields::validate(&input)?;

    let submission = Submission::stamp(input);
    let stored = db::submissions::insert(pool, &submission).await?;

    tracing::info!("Stored submission {}", stored.id);
    Ok(stored)
}

/// All stored registrations in insertion order, capped at
/// [`db::submissions::LIST_CAP`] rows. An empty store yields an empty vec.
pub async fn list(pool: &PgPool) -> Result<Vec<Submission>, AppError> {
    Ok(db::submissions::list(pool, db::submissions::LIST_CAP).await?)
}

/// Remove one registration by id. `false` means the id was not stored;
/// that outcome is reported to the caller, never raised.
pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, AppError> {
    Ok(db::submissions::delete(pool, id).await?)
}
