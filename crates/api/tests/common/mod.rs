//! Shared helpers for HTTP-level integration tests.
//!
//! Tests drive the real router (full middleware stack) through
//! `tower::ServiceExt::oneshot`, no TCP listener involved.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use taskboard_api::config::ServerConfig;
use taskboard_api::router::build_app_router;
use taskboard_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using
/// the given database pool. Mirrors the router construction in
/// `main.rs` so tests exercise the same stack production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Send a GET request.
pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a DELETE request.
pub async fn delete(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::DELETE)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::POST, uri, body).await
}

/// Send a PUT request with a JSON body.
pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::PUT, uri, body).await
}

async fn send_json(app: Router, method: Method, uri: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a project through the API, returning its id.
pub async fn create_project(pool: &PgPool, name: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/projects",
        serde_json::json!({ "name": name }),
    )
    .await;
    body_json(response).await["id"].as_i64().unwrap()
}

/// Create a task through the API, returning `(id, priority)`.
pub async fn create_task(pool: &PgPool, project_id: i64, name: &str) -> (i64, i64) {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/tasks",
        serde_json::json!({ "name": name, "projectId": project_id }),
    )
    .await;
    let json = body_json(response).await;
    (
        json["id"].as_i64().unwrap(),
        json["priority"].as_i64().unwrap(),
    )
}

/// Fetch a task record through the API.
pub async fn get_task(pool: &PgPool, id: i64) -> serde_json::Value {
    let response = get(build_test_app(pool.clone()), &format!("/api/v1/tasks/{id}")).await;
    body_json(response).await
}
