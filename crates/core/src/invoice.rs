//! Accounts receivable and payable invoices.
//!
//! Receivable invoices are income, payable invoices are expense. An invoice
//! starts `Pending` and moves to `Paid` exactly once.

use crate::error::CoreError;
use crate::money::{validate_amount, AMOUNT_PRECISION};
use crate::types::Money;

pub const TYPE_RECEIVABLE: &str = "Receivable";
pub const TYPE_PAYABLE: &str = "Payable";

/// Every invoice type admitted by `ck_invoices_type`.
pub const ALL_TYPES: &[&str] = &[TYPE_RECEIVABLE, TYPE_PAYABLE];

pub const STATUS_PENDING: &str = "Pending";
pub const STATUS_PAID: &str = "Paid";

/// Validate the caller-supplied fields of a new invoice.
pub fn validate_invoice(vendor_name: &str, amount: Money, invoice_type: &str) -> Result<(), CoreError> {
    if vendor_name.trim().is_empty() {
        return Err(CoreError::Validation("Vendor name must not be empty".into()));
    }
    if amount <= Money::ZERO {
        return Err(CoreError::Validation(
            "Invoice amount must be greater than zero".into(),
        ));
    }
    validate_amount("Invoice amount", amount, AMOUNT_PRECISION)?;
    if !ALL_TYPES.contains(&invoice_type) {
        return Err(CoreError::Validation(format!(
            "Invoice type must be one of {}, got '{invoice_type}'",
            ALL_TYPES.join(", ")
        )));
    }
    Ok(())
}

/// Receivable total minus payable total.
pub fn net_profit(total_income: Money, total_expense: Money) -> Result<Money, CoreError> {
    total_income
        .checked_sub(total_expense)
        .ok_or_else(|| CoreError::Internal("Net profit is out of range".into()))
}
