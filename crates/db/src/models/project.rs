//! Project entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taskboard_core::palette::project_color;
use taskboard_core::types::{DbId, Timestamp};

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// API shape of a project: row fields plus the derived display color.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectView {
    pub id: DbId,
    pub name: String,
    pub color: &'static str,
}

impl From<Project> for ProjectView {
    fn from(project: Project) -> Self {
        ProjectView {
            color: project_color(project.id),
            id: project.id,
            name: project.name,
        }
    }
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub name: String,
}

/// DTO for renaming an existing project. `name` is required: renaming
/// is the only project mutation that exists.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProject {
    pub name: String,
}
