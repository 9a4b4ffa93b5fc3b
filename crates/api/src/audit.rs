//! Best-effort audit trail.
//!
//! Business operations report privileged actions to an [`AuditSink`]. The
//! call returns immediately and cannot fail from the caller's point of view:
//! a write failure shows up only in the sink's own log output.

use ledger_core::types::DbId;
use ledger_db::models::audit::CreateAuditLog;
use ledger_db::repositories::AuditLogRepo;
use ledger_db::DbPool;

/// Append-only action log.
pub trait AuditSink: Send + Sync {
    fn log_action(&self, user_id: DbId, action: &str, details: String);
}

/// Writes audit entries to the `audit_logs` table on a spawned task.
#[derive(Clone)]
pub struct DbAuditSink {
    pool: DbPool,
}

impl DbAuditSink {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl AuditSink for DbAuditSink {
    fn log_action(&self, user_id: DbId, action: &str, details: String) {
        let pool = self.pool.clone();
        let entry = CreateAuditLog {
            user_id,
            action: action.to_string(),
            details: Some(details),
        };

        tokio::spawn(async move {
            match AuditLogRepo::insert(&pool, &entry).await {
                Ok(row) => {
                    tracing::debug!(audit_id = row.id, user_id, action = %entry.action, "Audit entry written");
                }
                Err(e) => {
                    tracing::error!(error = %e, user_id, action = %entry.action, "Audit log write failed");
                }
            }
        });
    }
}
