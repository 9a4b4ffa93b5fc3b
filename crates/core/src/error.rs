use crate::types::{DbId, Money};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Debits and credits must be equal (debit {total_debit}, credit {total_credit})")]
    UnbalancedEntry {
        total_debit: Money,
        total_credit: Money,
    },

    #[error("Unknown account id(s): {account_ids:?}")]
    UnknownAccount { account_ids: Vec<DbId> },

    #[error("Insufficient stock for product {product_id}: requested {requested}, available {available}")]
    InsufficientStock {
        product_id: DbId,
        requested: i32,
        available: i32,
    },

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
