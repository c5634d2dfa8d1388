pub mod submissions;

use axum::routing::{delete, get};
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        .route("/api/", get(root))
        .route(
            "/api/submissions",
            get(submissions::list).post(submissions::create),
        )
        .route("/api/submissions/export", get(submissions::export))
        .route("/api/submissions/{id}", delete(submissions::delete))
}

async fn root() -> Json<Value> {
    Json(json!({ "message": "Form API is running" }))
}
