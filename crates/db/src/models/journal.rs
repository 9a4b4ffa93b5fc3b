//! Journal entry and journal line models.
//!
//! Lines are owned by their entry: both are written in one transaction and
//! neither is updated afterwards.

use chrono::NaiveDate;
use ledger_core::ledger::JournalLineInput;
use ledger_core::money::serialize_fixed;
use ledger_core::types::{DbId, Money, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A journal header row from `journal_entries`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct JournalEntry {
    pub id: DbId,
    pub date: NaiveDate,
    pub description: String,
    pub status: String,
    pub created_at: Timestamp,
}

/// A journal line joined with its account's display fields.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct JournalLineView {
    #[serde(skip)]
    pub entry_id: DbId,
    pub account_id: DbId,
    pub account_code: String,
    pub account_name: String,
    #[serde(serialize_with = "serialize_fixed")]
    pub debit: Money,
    #[serde(serialize_with = "serialize_fixed")]
    pub credit: Money,
}

/// One entry with its lines in insertion order.
#[derive(Debug, Clone, Serialize)]
pub struct JournalEntryWithLines {
    #[serde(flatten)]
    pub entry: JournalEntry,
    pub lines: Vec<JournalLineView>,
}

/// Request body for posting a journal entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateJournalEntry {
    pub date: NaiveDate,
    pub description: String,
    pub lines: Vec<JournalLineInput>,
}
