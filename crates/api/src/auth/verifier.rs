//! Token verification capability.
//!
//! Request extractors never decode tokens themselves: they call the
//! [`TokenVerifier`] held in application state. Production wires in a
//! [`JwtVerifier`] built from [`JwtConfig`] at start-up.

use ledger_core::types::DbId;

use super::jwt::{validate_token, JwtConfig};

/// Who a verified token belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserIdentity {
    pub id: DbId,
    pub email: String,
    pub role: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Token has expired")]
    Expired,

    #[error("Invalid token")]
    Invalid,
}

/// Turns a bearer token into a [`UserIdentity`].
pub trait TokenVerifier: Send + Sync {
    fn verify(&self, token: &str) -> Result<UserIdentity, AuthError>;
}

/// HS256 JWT verifier.
#[derive(Debug, Clone)]
pub struct JwtVerifier {
    config: JwtConfig,
}

impl JwtVerifier {
    pub fn new(config: JwtConfig) -> Self {
        Self { config }
    }
}

impl TokenVerifier for JwtVerifier {
    fn verify(&self, token: &str) -> Result<UserIdentity, AuthError> {
        let claims = validate_token(token, &self.config).map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::Expired,
            _ => AuthError::Invalid,
        })?;

        Ok(UserIdentity {
            id: claims.sub,
            email: claims.email,
            role: claims.role,
        })
    }
}
