//! Route definitions for the `/tasks` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::task;
use crate::state::AppState;

/// Routes mounted at `/tasks`.
///
/// ```text
/// GET    /           -> list
/// POST   /           -> create
/// POST   /reorder    -> reorder
/// GET    /{id}       -> get_by_id
/// PUT    /{id}       -> update
/// DELETE /{id}       -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(task::list).post(task::create))
        .route("/reorder", post(task::reorder))
        .route(
            "/{id}",
            get(task::get_by_id).put(task::update).delete(task::delete),
        )
}
