//! Handlers for the `/tasks` resource, including reorder.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use taskboard_core::error::CoreError;
use taskboard_core::ordering::{next_priority, reorder_assignments, validate_reorder};
use taskboard_core::types::DbId;
use taskboard_core::validation::validate_name;
use taskboard_db::models::task::{CreateTask, ReorderTasks, Task, UpdateTask};
use taskboard_db::repositories::{ProjectRepo, TaskRepo};

use crate::error::{AppError, AppResult};
use crate::response::StatusResponse;
use crate::state::AppState;

/// POST /api/v1/tasks
///
/// The new task gets priority `max(project's priorities) + 1`, so it
/// always sorts last. The max-read and the insert are two separate
/// statements; racing creates against the same project are not
/// serialized (single-user system, accepted).
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateTask>,
) -> AppResult<(StatusCode, Json<Task>)> {
    validate_name(&input.name).map_err(AppError::BadRequest)?;

    if !ProjectRepo::exists(&state.pool, input.project_id).await? {
        return Err(AppError::Core(CoreError::Validation(
            "projectId must reference an existing project".into(),
        )));
    }

    let highest = TaskRepo::highest_priority(&state.pool, input.project_id).await?;
    let priority = next_priority(highest);
    let task = TaskRepo::create(&state.pool, &input, priority).await?;

    tracing::info!(
        task_id = task.id,
        project_id = task.project_id,
        priority = task.priority,
        "Task created"
    );
    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /api/v1/tasks
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Task>>> {
    let tasks = TaskRepo::list_ordered(&state.pool).await?;
    Ok(Json(tasks))
}

/// GET /api/v1/tasks/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Task>> {
    let task = TaskRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Task", id }))?;
    Ok(Json(task))
}

/// PUT /api/v1/tasks/{id}
///
/// Partial update of name / completed / completedAt. A `completed`
/// transition drives `completedAt`: false→true stamps it, true→false
/// clears it, and a non-transition preserves the existing stamp. An
/// explicit `completedAt` overrides the stamp and is only accepted on
/// a task that is (or is being marked) completed.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTask>,
) -> AppResult<Json<Task>> {
    if let Some(ref name) = input.name {
        validate_name(name).map_err(AppError::BadRequest)?;
    }

    if input.completed_at.is_some() {
        match input.completed {
            Some(true) => {}
            Some(false) => {
                return Err(AppError::Core(CoreError::Validation(
                    "completedAt cannot be supplied when marking a task incomplete".into(),
                )));
            }
            None => {
                let task = TaskRepo::find_by_id(&state.pool, id)
                    .await?
                    .ok_or(AppError::Core(CoreError::NotFound { entity: "Task", id }))?;
                if !task.completed {
                    return Err(AppError::Core(CoreError::Validation(
                        "completedAt can only be set on a completed task".into(),
                    )));
                }
            }
        }
    }

    let task = TaskRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Task", id }))?;
    Ok(Json(task))
}

/// DELETE /api/v1/tasks/{id}
///
/// The project's remaining priorities keep their numbers; the gap is
/// never compacted.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<StatusResponse>> {
    let deleted = TaskRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Task", id }));
    }

    tracing::info!(task_id = id, "Task deleted");
    Ok(Json(StatusResponse::deleted()))
}

/// POST /api/v1/tasks/reorder
///
/// Applies a drag order to one project's task list: the task at index
/// i gets priority i + 1. The target project is resolved from the
/// first submitted id, and the submission must be a permutation of
/// exactly that project's current task ids; anything else is rejected
/// before any write.
pub async fn reorder(
    State(state): State<AppState>,
    Json(input): Json<ReorderTasks>,
) -> AppResult<Json<StatusResponse>> {
    let Some(&probe_id) = input.ordered_task_ids.first() else {
        return Err(AppError::Core(CoreError::Validation(
            "orderedTaskIds must not be empty".into(),
        )));
    };

    let probe = TaskRepo::find_by_id(&state.pool, probe_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Task",
            id: probe_id,
        }))?;

    let current_ids = TaskRepo::ids_by_project(&state.pool, probe.project_id).await?;
    validate_reorder(&input.ordered_task_ids, &current_ids)?;

    let assignments = reorder_assignments(&input.ordered_task_ids);
    TaskRepo::set_priorities(&state.pool, &assignments).await?;

    tracing::info!(
        project_id = probe.project_id,
        task_count = assignments.len(),
        "Tasks reordered"
    );
    Ok(Json(StatusResponse::ok()))
}
