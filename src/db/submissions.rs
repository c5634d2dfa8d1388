use sqlx::PgPool;
use uuid::Uuid;

use crate::models::Submission;

/// Hard cap on rows returned by list queries. The API carries no pagination;
/// this is the seam where it would go if the cap ever becomes a problem.
pub const LIST_CAP: i64 = 1000;

pub async fn insert(pool: &PgPool, submission: &Submission) -> Result<Submission, sqlx::Error> {
    sqlx::query_as::<_, Submission>(
        "INSERT INTO submissions
            (id, mobile_no, shop_name, owner_name, ind_name, area_pin_code,
             address, city, dist, state, country, created_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
         RETURNING *",
    )
    .bind(submission.id)
    .bind(&submission.mobile_no)
    .bind(&submission.shop_name)
    .bind(&submission.owner_name)
    .bind(&submission.ind_name)
    .bind(&submission.area_pin_code)
    .bind(&submission.address)
    .bind(&submission.city)
    .bind(&submission.dist)
    .bind(&submission.state)
    .bind(&submission.country)
    .bind(submission.created_at)
    .fetch_one(pool)
    .await
}

pub async fn list(pool: &PgPool, limit: i64) -> Result<Vec<Submission>, sqlx::Error> {
    sqlx::query_as::<_, Submission>(
        "SELECT * FROM submissions ORDER BY created_at, id LIMIT $1",
    )
    .bind(limit)
    .fetch_all(pool)
    .await
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM submissions WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
