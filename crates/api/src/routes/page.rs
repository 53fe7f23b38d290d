//! Root route serving the list-view page payload.

use axum::routing::get;
use axum::Router;

use crate::handlers::page;
use crate::state::AppState;

/// Routes mounted at the root.
///
/// ```text
/// GET /    -> page props (projects, tasks, selected project)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(page::index))
}
