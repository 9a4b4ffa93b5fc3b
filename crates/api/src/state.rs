use std::sync::Arc;

use crate::audit::AuditSink;
use crate::auth::verifier::TokenVerifier;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool. Repositories borrow it per call.
    pub pool: ledger_db::DbPool,
    /// Server configuration (JWT issuance reads the signing config from here).
    pub config: Arc<ServerConfig>,
    /// Bearer-token verification used by the auth extractors.
    pub verifier: Arc<dyn TokenVerifier>,
    /// Best-effort audit trail writer.
    pub audit: Arc<dyn AuditSink>,
}
