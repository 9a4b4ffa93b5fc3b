//! Authentication primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- HS256 access-token issuance and decoding.
//! - [`verifier`] -- the injected token verification capability used by
//!   request extractors.

pub mod jwt;
pub mod password;
pub mod verifier;
