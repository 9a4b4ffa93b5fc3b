//! Fixed-point money rules shared by every NUMERIC(p, 2) column.
//!
//! Postgres silently rounds a value with more than two fractional digits to
//! the column scale, so amounts are checked here before any arithmetic that
//! the stored rows must later agree with.

use serde::{Serialize, Serializer};

use crate::error::CoreError;
use crate::types::Money;

/// Fractional digits stored for every amount.
pub const MONEY_SCALE: u32 = 2;

/// Precision of ledger line, order total, invoice and project amounts.
pub const AMOUNT_PRECISION: u32 = 14;

/// Precision of catalogue unit prices.
pub const PRICE_PRECISION: u32 = 12;

/// Reject `amount` if it cannot be stored in a `NUMERIC(precision, 2)` column
/// without rounding or overflow.
pub fn validate_amount(field: &str, amount: Money, precision: u32) -> Result<(), CoreError> {
    if amount.normalize().scale() > MONEY_SCALE {
        return Err(CoreError::Validation(format!(
            "{field} must have at most {MONEY_SCALE} decimal places, got {amount}"
        )));
    }
    if amount.abs() >= column_limit(precision) {
        return Err(CoreError::Validation(format!(
            "{field} is too large, got {amount}"
        )));
    }
    Ok(())
}

/// Smallest magnitude that no longer fits in `NUMERIC(precision, 2)`.
fn column_limit(precision: u32) -> Money {
    let integer_digits = precision.saturating_sub(MONEY_SCALE);
    Money::from(10_i64.pow(integer_digits))
}

/// Serialize an amount with exactly two fractional digits (`"0.00"`, `"59.97"`).
///
/// Postgres hands back a zero NUMERIC with scale 0, so without this a zero sum
/// would serialize as `"0"` next to `"12.50"`.
pub fn serialize_fixed<S: Serializer>(amount: &Money, serializer: S) -> Result<S::Ok, S::Error> {
    let mut fixed = *amount;
    fixed.rescale(MONEY_SCALE);
    Serialize::serialize(&fixed, serializer)
}
