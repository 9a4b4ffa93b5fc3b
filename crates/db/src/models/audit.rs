//! Audit log models. Audit rows have no `updated_at` (immutable records).

use ledger_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A single audit log entry.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AuditLog {
    pub id: DbId,
    pub user_id: DbId,
    pub action: String,
    pub details: Option<String>,
    pub created_at: Timestamp,
}

/// An audit entry joined with the acting user's name and role.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AuditLogWithUser {
    pub id: DbId,
    pub user_id: DbId,
    pub action: String,
    pub details: Option<String>,
    pub created_at: Timestamp,
    pub user_name: String,
    pub role: String,
}

/// DTO for appending an audit entry.
#[derive(Debug, Clone)]
pub struct CreateAuditLog {
    pub user_id: DbId,
    pub action: String,
    pub details: Option<String>,
}
