use std::net::SocketAddr;

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use uuid::Uuid;

use shopform::config::Config;

/// A running test server instance with a dedicated test database.
pub struct TestApp {
    pub addr: SocketAddr,
    pub pool: PgPool,
    pub client: Client,
    pub db_name: String,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// POST a registration payload, return (body, status).
    pub async fn create(&self, payload: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/api/submissions"))
            .json(payload)
            .send()
            .await
            .expect("create request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// GET the full submission list, return (body, status).
    pub async fn list(&self) -> (Value, StatusCode) {
        let resp = self
            .client
            .get(self.url("/api/submissions"))
            .send()
            .await
            .expect("list request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// DELETE a submission by id, return (body, status).
    pub async fn delete(&self, id: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .delete(self.url(&format!("/api/submissions/{id}")))
            .send()
            .await
            .expect("delete request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// GET the xlsx export, return the raw response.
    pub async fn export(&self) -> reqwest::Response {
        self.client
            .get(self.url("/api/submissions/export"))
            .send()
            .await
            .expect("export request failed")
    }
}

/// A payload that passes every field check.
pub fn valid_payload() -> Value {
    json!({
        "mobile_no": "9876543210",
        "shop_name": "Sharma General Store",
        "owner_name": "Ramesh Sharma",
        "ind_name": "Retail",
        "area_pin_code": "110001",
        "address": "14 MG Road",
        "city": "New Delhi",
        "dist": "Central Delhi",
        "state": "Delhi",
        "country": "India",
    })
}

/// Spawn a test app with a fresh temporary database.
pub async fn spawn_app() -> TestApp {
    let _ = dotenvy::dotenv();

    let base_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for tests");

    // Create a unique test database
    let db_name = format!(
        "shopform_test_{}",
        Uuid::now_v7().to_string().replace('-', "")
    );

    // Connect to default postgres DB to create test DB
    let admin_url = base_url
        .rsplit_once('/')
        .map(|(base, _)| format!("{base}/postgres"))
        .unwrap_or_else(|| base_url.clone());

    let admin_pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&admin_url)
        .await
        .expect("Failed to connect to postgres for test DB creation");

    sqlx::query(&format!("CREATE DATABASE \"{db_name}\""))
        .execute(&admin_pool)
        .await
        .expect("Failed to create test database");

    admin_pool.close().await;

    // Connect to test DB and run migrations
    let test_url = base_url
        .rsplit_once('/')
        .map(|(base, _)| format!("{base}/{db_name}"))
        .unwrap_or_else(|| base_url.clone());

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&test_url)
        .await
        .expect("Failed to connect to test database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations on test database");

    let config = Config {
        database_url: test_url,
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        cors_origins: vec!["*".to_string()],
        max_body_size: 1_048_576,
        log_level: "warn".to_string(),
    };

    let app = shopform::build_app(pool.clone(), config);

    // Bind to random port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    // Spawn server in background
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    let client = Client::new();

    TestApp {
        addr,
        pool,
        client,
        db_name,
    }
}

/// Drop the test database after tests complete.
pub async fn cleanup(app: TestApp) {
    let db_name = app.db_name.clone();
    app.pool.close().await;

    let base_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for tests");
    let admin_url = base_url
        .rsplit_once('/')
        .map(|(base, _)| format!("{base}/postgres"))
        .unwrap_or_else(|| base_url.clone());

    let admin_pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&admin_url)
        .await
        .expect("Failed to connect for cleanup");

    let _ = sqlx::query(&format!("DROP DATABASE IF EXISTS \"{db_name}\" WITH (FORCE)"))
        .execute(&admin_pool)
        .await;

    admin_pool.close().await;
}
