//! Request handlers, one submodule per resource.
//!
//! Handlers validate input with `ledger_core`, delegate persistence to the
//! repositories in `ledger_db`, and map failures through [`AppError`](crate::error::AppError).

pub mod admin;
pub mod auth;
pub mod dashboard;
pub mod finance;
pub mod insights;
pub mod invoices;
pub mod orders;
pub mod products;
pub mod projects;
pub mod vendors;
