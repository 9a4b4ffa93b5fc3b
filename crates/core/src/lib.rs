//! Domain logic for the ledger backend.
//!
//! This crate has no I/O: it holds the error taxonomy, shared id/timestamp
//! types, and the pure rules behind journal posting, order pricing and
//! project risk scoring. The `db` and `api` crates build on it.

pub mod audit;
pub mod error;
pub mod inventory;
pub mod invoice;
pub mod ledger;
pub mod money;
pub mod risk;
pub mod roles;
pub mod types;
