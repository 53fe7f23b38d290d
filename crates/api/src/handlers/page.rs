//! Handler for the list-view page payload.
//!
//! The client view renders from these props: every project with its
//! derived color, the tasks in priority order (filtered when a project
//! is selected), and the selection itself.

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use taskboard_core::filter::visible_tasks;
use taskboard_core::types::DbId;
use taskboard_db::models::project::ProjectView;
use taskboard_db::models::task::Task;
use taskboard_db::repositories::{ProjectRepo, TaskRepo};

use crate::error::AppResult;
use crate::state::AppState;

/// Query parameters for the page: an optional selected project.
#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub project: Option<DbId>,
}

/// Props for the list view.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageProps {
    pub tasks: Vec<Task>,
    pub projects: Vec<ProjectView>,
    pub selected_project: Option<DbId>,
}

/// GET /?project=ID
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<PageProps>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    let tasks = TaskRepo::list_ordered(&state.pool).await?;

    Ok(Json(PageProps {
        tasks: visible_tasks(tasks, params.project),
        projects: projects.into_iter().map(ProjectView::from).collect(),
        selected_project: params.project,
    }))
}
