//! HTTP-level integration tests for the `/projects` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use sqlx::PgPool;

const PALETTE: [&str; 5] = ["#EF4444", "#F97316", "#3B82F6", "#10B981", "#6366F1"];

#[sqlx::test(migrations = "../db/migrations")]
async fn create_project_returns_201_with_derived_color(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/projects",
        serde_json::json!({ "name": "Groceries" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Groceries");

    let id = json["id"].as_i64().unwrap();
    let expected_color = PALETTE[(id % 5) as usize];
    assert_eq!(json["color"], expected_color);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_project_with_empty_name_returns_400(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/projects",
        serde_json::json!({ "name": "" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_project_without_name_is_rejected(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/projects",
        serde_json::json!({}),
    )
    .await;

    // Missing required field fails JSON deserialization.
    assert!(response.status().is_client_error());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_projects_returns_all_in_creation_order(pool: PgPool) {
    let first = common::create_project(&pool, "First").await;
    let second = common::create_project(&pool, "Second").await;

    let response = get(common::build_test_app(pool), "/api/v1/projects").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let ids: Vec<i64> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![first, second]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn rename_project_keeps_id_and_color(pool: PgPool) {
    let id = common::create_project(&pool, "Old name").await;

    let response = put_json(
        common::build_test_app(pool),
        &format!("/api/v1/projects/{id}"),
        serde_json::json!({ "name": "New name" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["id"].as_i64().unwrap(), id);
    assert_eq!(json["name"], "New name");
    assert_eq!(json["color"], PALETTE[(id % 5) as usize]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn rename_project_with_empty_name_returns_400(pool: PgPool) {
    let id = common::create_project(&pool, "Keep me").await;

    let response = put_json(
        common::build_test_app(pool),
        &format!("/api/v1/projects/{id}"),
        serde_json::json!({ "name": "  " }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_nonexistent_project_returns_404(pool: PgPool) {
    let response = put_json(
        common::build_test_app(pool),
        "/api/v1/projects/999999",
        serde_json::json!({ "name": "Ghost" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_project_returns_deleted_status(pool: PgPool) {
    let id = common::create_project(&pool, "Doomed").await;

    let response = delete(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/projects/{id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "deleted");

    let response = get(
        common::build_test_app(pool),
        &format!("/api/v1/projects/{id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_nonexistent_project_returns_404(pool: PgPool) {
    let response = delete(common::build_test_app(pool), "/api/v1/projects/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
