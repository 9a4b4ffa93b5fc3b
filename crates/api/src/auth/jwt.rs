//! HS256 access tokens.
//!
//! A token carries the user's id, email and role so request handling never
//! needs a user lookup. The signing secret is supplied at start-up.

use chrono::Utc;
use jsonwebtoken::errors::Error as JwtError;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use ledger_core::types::DbId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::env_or;

/// Payload of every access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub sub: DbId,
    pub email: String,
    pub role: String,
    /// Unix seconds.
    pub exp: i64,
    /// Unix seconds.
    pub iat: i64,
    pub jti: String,
}

impl Claims {
    fn issue(user_id: DbId, email: &str, role: &str, lifetime_mins: i64) -> Self {
        let iat = Utc::now().timestamp();
        Self {
            sub: user_id,
            email: email.to_owned(),
            role: role.to_owned(),
            exp: iat + lifetime_mins * 60,
            iat,
            jti: Uuid::new_v4().to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiry_mins: i64,
}

impl JwtConfig {
    /// Read `JWT_SECRET` (required, non-empty) and `JWT_EXPIRY_MINS` (default 60).
    ///
    /// # Panics
    ///
    /// Panics when the secret is missing or empty.
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET").unwrap_or_default();
        assert!(!secret.is_empty(), "JWT_SECRET must be set and non-empty");

        Self {
            secret,
            expiry_mins: env_or("JWT_EXPIRY_MINS", 60),
        }
    }
}

/// Sign a token for a user.
pub fn generate_access_token(
    user_id: DbId,
    email: &str,
    role: &str,
    config: &JwtConfig,
) -> Result<String, JwtError> {
    let claims = Claims::issue(user_id, email, role, config.expiry_mins);
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Check signature and expiry, returning the claims.
pub fn validate_token(token: &str, config: &JwtConfig) -> Result<Claims, JwtError> {
    let key = DecodingKey::from_secret(config.secret.as_bytes());
    decode::<Claims>(token, &key, &Validation::default()).map(|data| data.claims)
}
