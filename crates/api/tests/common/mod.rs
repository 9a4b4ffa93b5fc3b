#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use ledger_api::audit::{AuditSink, DbAuditSink};
use ledger_api::auth::jwt::{generate_access_token, JwtConfig};
use ledger_api::auth::password::hash_password;
use ledger_api::auth::verifier::JwtVerifier;
use ledger_api::config::ServerConfig;
use ledger_api::router::build_app_router;
use ledger_api::state::AppState;
use ledger_core::types::DbId;
use ledger_db::models::user::{CreateUser, User};
use ledger_db::repositories::UserRepo;

pub const TEST_PASSWORD: &str = "test_password_123!";

/// Test `ServerConfig` with the dev CORS origin and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret".to_string(),
            expiry_mins: 60,
        },
    }
}

/// Full application router backed by `pool`, auditing to the database.
pub fn build_test_app(pool: PgPool) -> Router {
    let audit = Arc::new(DbAuditSink::new(pool.clone()));
    build_test_app_with_audit(pool, audit)
}

/// Full application router with a caller-supplied audit sink.
pub fn build_test_app_with_audit(pool: PgPool, audit: Arc<dyn AuditSink>) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        verifier: Arc::new(JwtVerifier::new(config.jwt.clone())),
        audit,
    };
    build_app_router(state, &config)
}

/// One captured `log_action` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditRecord {
    pub user_id: DbId,
    pub action: String,
    pub details: String,
}

/// Audit sink that keeps records in memory.
#[derive(Default)]
pub struct RecordingAuditSink {
    records: Mutex<Vec<AuditRecord>>,
}

impl RecordingAuditSink {
    pub fn records(&self) -> Vec<AuditRecord> {
        self.records.lock().unwrap().clone()
    }
}

impl AuditSink for RecordingAuditSink {
    fn log_action(&self, user_id: DbId, action: &str, details: String) {
        self.records.lock().unwrap().push(AuditRecord {
            user_id,
            action: action.to_string(),
            details,
        });
    }
}

// ---------------------------------------------------------------------------
// Users and tokens
// ---------------------------------------------------------------------------

/// Insert a user with `role` and return it with a valid bearer token.
pub async fn create_test_user(pool: &PgPool, email: &str, role: &str) -> (User, String) {
    let input = CreateUser {
        name: email.split('@').next().unwrap_or(email).to_string(),
        email: email.to_string(),
        password_hash: hash_password(TEST_PASSWORD).expect("hashing should succeed"),
    };
    let user = UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed");
    let user = UserRepo::update_role(pool, user.id, role)
        .await
        .expect("role update should succeed")
        .expect("user should exist");
    let token = token_for(user.id, &user.email, &user.role);
    (user, token)
}

/// Sign a token with the test secret, without touching the database.
pub fn token_for(user_id: DbId, email: &str, role: &str) -> String {
    generate_access_token(user_id, email, role, &test_config().jwt)
        .expect("token generation should succeed")
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

fn json_request(method: Method, uri: &str, token: Option<&str>, body: &serde_json::Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    builder
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    let request = Request::builder()
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, json_request(Method::POST, uri, None, &body)).await
}

pub async fn post_json_auth(app: Router, uri: &str, body: serde_json::Value, token: &str) -> Response {
    send(app, json_request(Method::POST, uri, Some(token), &body)).await
}

/// POST an arbitrary body, for requests that are not valid JSON.
pub async fn post_raw_auth(app: Router, uri: &str, body: &'static str, token: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

pub async fn put_json_auth(app: Router, uri: &str, body: serde_json::Value, token: &str) -> Response {
    send(app, json_request(Method::PUT, uri, Some(token), &body)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
