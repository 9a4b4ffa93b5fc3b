//! Chart-of-accounts models.

use ledger_core::money::serialize_fixed;
use ledger_core::types::{DbId, Money, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `accounts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Account {
    pub id: DbId,
    pub code: String,
    pub name: String,
    /// One of Asset, Liability, Equity, Income, Expense.
    #[serde(rename = "type")]
    pub account_type: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Running totals for one account, derived from its journal lines.
#[derive(Debug, Clone, Serialize)]
pub struct AccountBalance {
    pub account_id: DbId,
    pub code: String,
    pub name: String,
    #[serde(serialize_with = "serialize_fixed")]
    pub total_debit: Money,
    #[serde(serialize_with = "serialize_fixed")]
    pub total_credit: Money,
    #[serde(serialize_with = "serialize_fixed")]
    pub balance: Money,
}
