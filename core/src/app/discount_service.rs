//! Discount calculation
//!
//! Pure, synchronous. Every rejection is a `DomainError::InvalidInput`.

use serde_json::Value;

use crate::domain::entities::PriceQuote;
use crate::error::DomainError;

/// Apply `discount_percentage` to `price` and round to two decimals.
///
/// Fails when `price <= 0`, when the percentage is outside `[0, 100]`,
/// or when either value is NaN / infinite.
pub fn calculate_discount(price: f64, discount_percentage: f64) -> Result<f64, DomainError> {
    let quote = PriceQuote::new(price, discount_percentage).inspect_err(|e| {
        tracing::debug!(price, discount_percentage, error = %e, "Rejected price quote");
    })?;

    Ok(quote.final_price())
}

/// Same as [`calculate_discount`] for untyped input.
///
/// Anything that is not a JSON number (strings such as `"cien"`, `null`,
/// objects) is rejected before range checks run.
pub fn calculate_discount_value(
    price: &Value,
    discount_percentage: &Value,
) -> Result<f64, DomainError> {
    let price = price.as_f64().ok_or_else(|| {
        tracing::debug!(value = %price, "Price is not a number");
        DomainError::invalid("price must be a number")
    })?;
    let discount_percentage = discount_percentage.as_f64().ok_or_else(|| {
        tracing::debug!(value = %discount_percentage, "Discount is not a number");
        DomainError::invalid("discount must be a number")
    })?;

    calculate_discount(price, discount_percentage)
}
