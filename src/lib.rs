pub mod config;
pub mod db;
pub mod error;
pub mod export;
pub mod models;
pub mod routes;
pub mod state;
pub mod submission;

use std::sync::Arc;

use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum::Router;
use sqlx::PgPool;
use tower_http::cors::{AllowHeaders, Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::state::{AppState, SharedState};

pub fn build_app(pool: PgPool, config: Config) -> Router {
    let cors = cors_layer(&config);
    let max_body_size = config.max_body_size;

    let state: SharedState = Arc::new(AppState { pool, config });

    Router::new()
        .merge(routes::api_routes())
        .route("/health", get(health))
        .layer(cors)
        .layer(RequestBodyLimitLayer::new(max_body_size))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// A `*` entry opens the API to any origin without credentials; an explicit
/// origin list is served with credentials, the methods the API handles, and
/// mirrored request headers.
fn cors_layer(config: &Config) -> CorsLayer {
    if config.cors_origins.iter().any(|origin| origin == "*") {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

async fn health() -> &'static str {
    "ok"
}
