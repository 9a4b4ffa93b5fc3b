//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Multi-statement writes open their
//! own transaction so callers never observe a partial unit of work.

pub mod account_repo;
pub mod audit_repo;
pub mod invoice_repo;
pub mod journal_repo;
pub mod order_repo;
pub mod product_repo;
pub mod project_repo;
pub mod stats_repo;
pub mod user_repo;
pub mod vendor_repo;

pub use account_repo::AccountRepo;
pub use audit_repo::AuditLogRepo;
pub use invoice_repo::InvoiceRepo;
pub use journal_repo::JournalRepo;
pub use order_repo::OrderRepo;
pub use product_repo::ProductRepo;
pub use project_repo::ProjectRepo;
pub use stats_repo::StatsRepo;
pub use user_repo::UserRepo;
pub use vendor_repo::VendorRepo;
