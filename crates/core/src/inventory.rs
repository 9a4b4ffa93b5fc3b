//! Order pricing and stock rules.

use crate::error::CoreError;
use crate::money::{validate_amount, AMOUNT_PRECISION, PRICE_PRECISION};
use crate::types::Money;

/// Status assigned to every newly placed order.
pub const ORDER_STATUS_PENDING: &str = "Pending";

/// Products with fewer units than this count as low stock on the dashboard.
pub const LOW_STOCK_THRESHOLD: i32 = 5;

/// Reject non-positive order quantities.
pub fn validate_quantity(quantity: i32) -> Result<(), CoreError> {
    if quantity <= 0 {
        return Err(CoreError::Validation(format!(
            "Quantity must be greater than zero, got {quantity}"
        )));
    }
    Ok(())
}

/// Total price of an order line: unit price times quantity, exact.
pub fn order_total(price: Money, quantity: i32) -> Money {
    price * Money::from(quantity)
}

/// Reject an order total that the orders table cannot hold.
pub fn validate_order_total(total: Money) -> Result<(), CoreError> {
    validate_amount("Order total", total, AMOUNT_PRECISION)
}

/// Validate catalogue fields shared by product create and update.
pub fn validate_product(name: &str, price: Money, stock_quantity: i32) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation("Product name must not be empty".into()));
    }
    if price.is_sign_negative() {
        return Err(CoreError::Validation("Price must not be negative".into()));
    }
    validate_amount("Price", price, PRICE_PRECISION)?;
    if stock_quantity < 0 {
        return Err(CoreError::Validation(
            "Stock quantity must not be negative".into(),
        ));
    }
    Ok(())
}
