//! Repository for the `tasks` table.

use sqlx::PgPool;
use taskboard_core::types::DbId;

use crate::models::task::{CreateTask, Task, UpdateTask};

const COLUMNS: &str =
    "id, name, project_id, priority, completed, completed_at, created_at, updated_at";

/// CRUD and ordering operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a new task with the given priority, returning the
    /// created row. The priority comes from the ordering engine; this
    /// method does not compute it.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTask,
        priority: i32,
    ) -> Result<Task, sqlx::Error> {
        let query = format!(
            "INSERT INTO tasks (name, project_id, priority) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(&input.name)
            .bind(input.project_id)
            .bind(priority)
            .fetch_one(pool)
            .await
    }

    /// Highest priority currently assigned within a project, or `None`
    /// when the project has no tasks.
    pub async fn highest_priority(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Option<i32>, sqlx::Error> {
        sqlx::query_scalar::<_, Option<i32>>(
            "SELECT MAX(priority) FROM tasks WHERE project_id = $1",
        )
        .bind(project_id)
        .fetch_one(pool)
        .await
    }

    /// List all tasks ascending by priority (id as tiebreak, since the
    /// global list interleaves projects with overlapping priorities).
    pub async fn list_ordered(pool: &PgPool) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks ORDER BY priority ASC, id ASC");
        sqlx::query_as::<_, Task>(&query).fetch_all(pool).await
    }

    /// Find a task by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE id = $1");
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// IDs of all tasks belonging to a project.
    pub async fn ids_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>("SELECT id FROM tasks WHERE project_id = $1")
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Partially update a task. Only supplied fields are applied; the
    /// `completed` transition drives `completed_at`: false→true stamps
    /// it (client value or `now()`), true→false clears it, and a
    /// non-transition (true→true, or no flag at all) preserves the
    /// existing stamp unless an explicit `completed_at` replaces it.
    /// Returns `None` when the ID does not exist.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTask,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET \
                name = COALESCE($2, name), \
                completed = COALESCE($3, completed), \
                completed_at = CASE \
                    WHEN $3 IS TRUE AND completed THEN COALESCE($4, completed_at) \
                    WHEN $3 IS TRUE THEN COALESCE($4, now()) \
                    WHEN $3 IS FALSE THEN NULL \
                    WHEN completed THEN COALESCE($4, completed_at) \
                    ELSE completed_at \
                END, \
                updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.completed)
            .bind(input.completed_at)
            .fetch_optional(pool)
            .await
    }

    /// Apply a batch of `(task id, priority)` assignments in one
    /// transaction. Priorities of tasks outside the batch are left
    /// untouched.
    pub async fn set_priorities(
        pool: &PgPool,
        assignments: &[(DbId, i32)],
    ) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;
        for &(id, priority) in assignments {
            sqlx::query("UPDATE tasks SET priority = $2, updated_at = now() WHERE id = $1")
                .bind(id)
                .bind(priority)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await
    }

    /// Hard-delete a task by ID. Returns `true` if a row was removed.
    /// Leaves the project's remaining priorities untouched; the gap is
    /// tolerated by design.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
