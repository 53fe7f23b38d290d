//! Handlers for the `/projects` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use taskboard_core::error::CoreError;
use taskboard_core::types::DbId;
use taskboard_core::validation::validate_name;
use taskboard_db::models::project::{CreateProject, ProjectView, UpdateProject};
use taskboard_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::response::StatusResponse;
use crate::state::AppState;

/// POST /api/v1/projects
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<ProjectView>)> {
    validate_name(&input.name).map_err(AppError::BadRequest)?;

    let project = ProjectRepo::create(&state.pool, &input).await?;

    tracing::info!(project_id = project.id, "Project created");
    Ok((StatusCode::CREATED, Json(project.into())))
}

/// GET /api/v1/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ProjectView>>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(projects.into_iter().map(ProjectView::from).collect()))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProjectView>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(project.into()))
}

/// PUT /api/v1/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<ProjectView>> {
    validate_name(&input.name).map_err(AppError::BadRequest)?;

    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(project.into()))
}

/// DELETE /api/v1/projects/{id}
///
/// Owned tasks are deleted with the project (cascade).
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<StatusResponse>> {
    let deleted = ProjectRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }));
    }

    tracing::info!(project_id = id, "Project deleted");
    Ok(Json(StatusResponse::deleted()))
}
