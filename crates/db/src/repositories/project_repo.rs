//! Repository for the `Projects` table.

use knitnote_core::project::Project;
use knitnote_core::types::DbId;
use knitnote_core::validation::{NewProject, ProjectChanges};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::models::project::ProjectRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, category, craft, pattern, yarn, startDate, endDate, completed, progress, created_at";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a validated project, returning the created row with its
    /// assigned id. `created_at` comes from the column default.
    pub async fn create(pool: &SqlitePool, input: &NewProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO Projects
                (title, category, craft, pattern, yarn, startDate, endDate, completed, progress)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, ProjectRow>(&query)
            .bind(&input.title)
            .bind(&input.category)
            .bind(&input.craft)
            .bind(&input.pattern)
            .bind(&input.yarn)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.completed)
            .bind(input.progress)
            .fetch_one(pool)
            .await?;
        Ok(row.into())
    }

    /// Find a project by its id.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM Projects WHERE id = $1");
        let row = sqlx::query_as::<_, ProjectRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Project::from))
    }

    /// List all projects, newest id first.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM Projects ORDER BY id DESC");
        let rows = sqlx::query_as::<_, ProjectRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Project::from).collect())
    }

    /// Number of stored projects.
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM Projects")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Update a project. Only the columns present in `changes` are written.
    ///
    /// Returns `None` if no row with the given `id` exists. An empty change
    /// set writes nothing and returns the current row.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        changes: &ProjectChanges,
    ) -> Result<Option<Project>, sqlx::Error> {
        if changes.is_empty() {
            return Self::find_by_id(pool, id).await;
        }

        let mut builder = QueryBuilder::<Sqlite>::new("UPDATE Projects SET ");
        {
            let mut set = builder.separated(", ");
            if let Some(title) = &changes.title {
                set.push("title = ").push_bind_unseparated(title.clone());
            }
            if let Some(category) = &changes.category {
                set.push("category = ").push_bind_unseparated(category.clone());
            }
            if let Some(craft) = &changes.craft {
                set.push("craft = ").push_bind_unseparated(craft.clone());
            }
            if let Some(pattern) = &changes.pattern {
                set.push("pattern = ").push_bind_unseparated(pattern.clone());
            }
            if let Some(yarn) = &changes.yarn {
                set.push("yarn = ").push_bind_unseparated(yarn.clone());
            }
            if let Some(start_date) = changes.start_date {
                set.push("startDate = ").push_bind_unseparated(start_date);
            }
            if let Some(end_date) = changes.end_date {
                set.push("endDate = ").push_bind_unseparated(end_date);
            }
            if let Some(completed) = changes.completed {
                set.push("completed = ").push_bind_unseparated(completed);
            }
            if let Some(progress) = changes.progress {
                set.push("progress = ").push_bind_unseparated(progress);
            }
        }
        builder
            .push(" WHERE id = ")
            .push_bind(id)
            .push(format!(" RETURNING {COLUMNS}"));

        let row = builder
            .build_query_as::<ProjectRow>()
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Project::from))
    }

    /// Permanently delete a project by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM Projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
