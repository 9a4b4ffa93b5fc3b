//! Repository for the `projects` table.

use ledger_core::types::{DbId, Money};
use sqlx::PgPool;

use crate::models::project::{CreateProject, Project};

const COLUMNS: &str = "id, name, location, budget, actual_spend, start_date, end_date, \
     completion_percentage, created_at, updated_at";

/// Provides create and read operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project. Missing spend and completion default to zero.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects
                (name, location, budget, start_date, end_date, actual_spend, completion_percentage)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.name)
            .bind(&input.location)
            .bind(input.budget)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.actual_spend.unwrap_or(Money::ZERO))
            .bind(input.completion_percentage.unwrap_or(0))
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all projects ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }
}
