//! Task entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taskboard_core::filter::ProjectScoped;
use taskboard_core::types::{DbId, Timestamp};

/// A task row from the `tasks` table.
///
/// Serializes with camelCase keys (`projectId`, `completedAt`, ...)
/// since the row is the API record shape.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: DbId,
    pub name: String,
    pub project_id: DbId,
    pub priority: i32,
    pub completed: bool,
    pub completed_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ProjectScoped for Task {
    fn project_id(&self) -> DbId {
        self.project_id
    }
}

/// DTO for creating a new task. Priority is assigned by the ordering
/// engine, never by the client.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTask {
    pub name: String,
    pub project_id: DbId,
}

/// DTO for partially updating a task. A supplied `completed` flag
/// drives the `completed_at` transition; an explicit `completed_at`
/// is an override of the completion timestamp and is only valid on a
/// task that is (or is being marked) completed.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTask {
    pub name: Option<String>,
    pub completed: Option<bool>,
    pub completed_at: Option<Timestamp>,
}

/// DTO for the reorder operation: the full drag order for one
/// project's task list.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderTasks {
    pub ordered_task_ids: Vec<DbId>,
}
