//! Process configuration, read once at start-up.
//!
//! | Env Var                | Default                 |
//! |------------------------|-------------------------|
//! | `HOST`                 | `0.0.0.0`               |
//! | `PORT`                 | `3000`                  |
//! | `CORS_ORIGINS`         | `http://localhost:5173` |
//! | `REQUEST_TIMEOUT_SECS` | `30`                    |
//! | `JWT_SECRET`           | required                |
//! | `JWT_EXPIRY_MINS`      | `60`                    |
//!
//! Bad values panic: a misconfigured server should not start.

use std::fmt::Display;
use std::str::FromStr;

use crate::auth::jwt::JwtConfig;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Comma-separated in `CORS_ORIGINS`; blanks are dropped.
    pub cors_origins: Vec<String>,
    pub request_timeout_secs: u64,
    pub jwt: JwtConfig,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let cors_origins = env_or("CORS_ORIGINS", "http://localhost:5173".to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect();

        Self {
            host: env_or("HOST", "0.0.0.0".to_string()),
            port: env_or("PORT", 3000),
            cors_origins,
            request_timeout_secs: env_or("REQUEST_TIMEOUT_SECS", 30),
            jwt: JwtConfig::from_env(),
        }
    }
}

/// Parse `key` from the environment, falling back to `default` when unset.
///
/// # Panics
///
/// Panics if the variable is set but does not parse as `T`.
pub(crate) fn env_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse()
            .unwrap_or_else(|e| panic!("{key} has an invalid value '{raw}': {e}")),
        Err(_) => default,
    }
}
