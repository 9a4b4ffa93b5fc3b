//! Double-entry journal rules.
//!
//! A journal entry is accepted only when it has at least one line, no line
//! carries a negative amount or more precision than the ledger stores, and the
//! sum of debits equals the sum of credits. All sums use exact decimal
//! arithmetic.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::money::{validate_amount, AMOUNT_PRECISION};
use crate::types::{DbId, Money};

// ---------------------------------------------------------------------------
// Status constants
// ---------------------------------------------------------------------------

/// Entry status for a committed entry. Every entry is created in this state.
pub const STATUS_POSTED: &str = "Posted";

/// Reserved for a draft workflow. Admitted by the schema, never written by the API.
pub const STATUS_DRAFT: &str = "Draft";

// ---------------------------------------------------------------------------
// Input types
// ---------------------------------------------------------------------------

/// One requested journal line. Missing amounts count as zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalLineInput {
    pub account_id: DbId,
    #[serde(default)]
    pub debit: Option<Money>,
    #[serde(default)]
    pub credit: Option<Money>,
}

impl JournalLineInput {
    pub fn debit_amount(&self) -> Money {
        self.debit.unwrap_or(Money::ZERO)
    }

    pub fn credit_amount(&self) -> Money {
        self.credit.unwrap_or(Money::ZERO)
    }
}

/// Debit and credit sums of a validated set of lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct JournalTotals {
    pub total_debit: Money,
    pub total_credit: Money,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Sum debits and credits across `lines`.
///
/// Fails with a validation error if either sum overflows.
pub fn totals(lines: &[JournalLineInput]) -> Result<JournalTotals, CoreError> {
    let mut sums = JournalTotals {
        total_debit: Money::ZERO,
        total_credit: Money::ZERO,
    };
    for line in lines {
        sums.total_debit = sums
            .total_debit
            .checked_add(line.debit_amount())
            .ok_or_else(|| CoreError::Validation("Total debit is out of range".into()))?;
        sums.total_credit = sums
            .total_credit
            .checked_add(line.credit_amount())
            .ok_or_else(|| CoreError::Validation("Total credit is out of range".into()))?;
    }
    Ok(sums)
}

/// Validate a set of journal lines before anything is written.
///
/// Checks run in order: non-empty, non-negative amounts, storable amounts,
/// balance. Balance is compared on the amounts exactly as they will be stored.
pub fn validate_lines(lines: &[JournalLineInput]) -> Result<JournalTotals, CoreError> {
    if lines.is_empty() {
        return Err(CoreError::Validation(
            "A journal entry needs at least one line".into(),
        ));
    }

    if let Some(line) = lines
        .iter()
        .find(|l| l.debit_amount().is_sign_negative() || l.credit_amount().is_sign_negative())
    {
        return Err(CoreError::Validation(format!(
            "Line for account {} has a negative amount",
            line.account_id
        )));
    }

    for line in lines {
        validate_amount("Debit", line.debit_amount(), AMOUNT_PRECISION)?;
        validate_amount("Credit", line.credit_amount(), AMOUNT_PRECISION)?;
    }

    let sums = totals(lines)?;
    if sums.total_debit != sums.total_credit {
        return Err(CoreError::UnbalancedEntry {
            total_debit: sums.total_debit,
            total_credit: sums.total_credit,
        });
    }

    Ok(sums)
}

/// Distinct account ids referenced by `lines`, in ascending order.
pub fn referenced_accounts(lines: &[JournalLineInput]) -> Vec<DbId> {
    let mut ids: Vec<DbId> = lines.iter().map(|l| l.account_id).collect();
    ids.sort_unstable();
    ids.dedup();
    ids
}

/// Balance of an account derived from its lines (debit-normal).
pub fn derived_balance(total_debit: Money, total_credit: Money) -> Money {
    total_debit - total_credit
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
