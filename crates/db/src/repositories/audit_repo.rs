//! Repository for the append-only `audit_logs` table.

use sqlx::PgPool;

use crate::models::audit::{AuditLog, AuditLogWithUser, CreateAuditLog};

const COLUMNS: &str = "id, user_id, action, details, created_at";

/// Insert and read audit log entries. There is no update or delete.
pub struct AuditLogRepo;

impl AuditLogRepo {
    pub async fn insert(pool: &PgPool, input: &CreateAuditLog) -> Result<AuditLog, sqlx::Error> {
        let query = format!(
            "INSERT INTO audit_logs (user_id, action, details)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AuditLog>(&query)
            .bind(input.user_id)
            .bind(&input.action)
            .bind(&input.details)
            .fetch_one(pool)
            .await
    }

    /// All entries with the acting user's name and role, newest first.
    pub async fn list_with_users(pool: &PgPool) -> Result<Vec<AuditLogWithUser>, sqlx::Error> {
        sqlx::query_as::<_, AuditLogWithUser>(
            "SELECT l.id, l.user_id, l.action, l.details, l.created_at,
                    u.name AS user_name, u.role
             FROM audit_logs l
             JOIN users u ON u.id = l.user_id
             ORDER BY l.created_at DESC, l.id DESC",
        )
        .fetch_all(pool)
        .await
    }

    /// Entries recorded for one action name, oldest first.
    pub async fn list_by_action(pool: &PgPool, action: &str) -> Result<Vec<AuditLog>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM audit_logs WHERE action = $1 ORDER BY id ASC");
        sqlx::query_as::<_, AuditLog>(&query)
            .bind(action)
            .fetch_all(pool)
            .await
    }
}
