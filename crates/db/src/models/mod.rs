//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - Joined read models where a listing enriches rows from another table

pub mod account;
pub mod audit;
pub mod invoice;
pub mod journal;
pub mod order;
pub mod product;
pub mod project;
pub mod stats;
pub mod user;
pub mod vendor;
