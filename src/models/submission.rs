use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored shop registration. `id` and `created_at` are stamped by the
/// server at creation and never change afterwards.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Submission {
    pub id: Uuid,
    pub mobile_no: String,
    pub shop_name: String,
    pub owner_name: String,
    pub ind_name: String,
    pub area_pin_code: String,
    pub address: String,
    pub city: String,
    pub dist: String,
    pub state: String,
    pub country: String,
    pub created_at: DateTime<Utc>,
}

/// Inbound registration payload. Unknown fields are dropped by serde and
/// never reach the store.
#[derive(Debug, Clone, Deserialize)]
pub struct NewSubmission {
    pub mobile_no: String,
    pub shop_name: String,
    pub owner_name: String,
    pub ind_name: String,
    pub area_pin_code: String,
    pub address: String,
    pub city: String,
    pub dist: String,
    pub state: String,
    pub country: String,
}

impl Submission {
    /// Stamp a validated payload with a fresh id and creation time.
    pub fn stamp(new: NewSubmission) -> Self {
        Submission {
            id: Uuid::now_v7(),
            mobile_no: new.mobile_no,
            shop_name: new.shop_name,
            owner_name: new.owner_name,
            ind_name: new.ind_name,
            area_pin_code: new.area_pin_code,
            address: new.address,
            city: new.city,
            dist: new.dist,
            state: new.state,
            country: new.country,
            created_at: Utc::now(),
        }
    }
}
