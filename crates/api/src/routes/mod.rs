pub mod health;
pub mod page;
pub mod project;
pub mod task;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /projects                  list, create
/// /projects/{id}             get, update, delete (cascades tasks)
///
/// /tasks                     list (priority order), create
/// /tasks/reorder             apply a drag order (POST)
/// /tasks/{id}                get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .nest("/tasks", task::router())
}
