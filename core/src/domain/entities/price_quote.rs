//! Price quote domain entity
//!
//! A price paired with a discount percentage. Construction validates both,
//! so a `PriceQuote` in hand is always computable.

use serde::Serialize;

use crate::error::DomainError;

/// Lowest accepted discount percentage
pub const MIN_DISCOUNT: f64 = 0.0;

/// Highest accepted discount percentage
pub const MAX_DISCOUNT: f64 = 100.0;

/// Sub-cent grid the scaled value is snapped to before rounding.
/// Absorbs binary noise such as `1.005 * 100 == 100.49999999999999`.
const SNAP_SCALE: f64 = 1_000_000.0;

/// A validated (price, discount percentage) pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceQuote {
    price: f64,
    discount_percentage: f64,
}

impl PriceQuote {
    /// Validate and build a quote.
    ///
    /// Checks run in order: both values finite, `price > 0`,
    /// `0 <= discount_percentage <= 100`.
    pub fn new(price: f64, discount_percentage: f64) -> Result<Self, DomainError> {
        if !price.is_finite() {
            return Err(DomainError::invalid("price must be a finite number"));
        }
        if !discount_percentage.is_finite() {
            return Err(DomainError::invalid("discount must be a finite number"));
        }
        if price <= 0.0 {
            return Err(DomainError::invalid("price must be positive"));
        }
        if !(MIN_DISCOUNT..=MAX_DISCOUNT).contains(&discount_percentage) {
            return Err(DomainError::invalid("discount out of range"));
        }

        Ok(Self {
            price,
            discount_percentage,
        })
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn discount_percentage(&self) -> f64 {
        self.discount_percentage
    }

    /// Discounted price, rounded to two decimals
    pub fn final_price(&self) -> f64 {
        round_to_cents(self.price * (1.0 - self.discount_percentage / 100.0))
    }
}

/// 2^53: from here on every f64 is already an integer
const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;

/// Round to two decimals, half away from zero, on the cent-scaled value
///
/// Values too large to carry a fractional cent come back unchanged.
pub fn round_to_cents(value: f64) -> f64 {
    let cents = value * 100.0;
    if !(cents.abs() < EXACT_INTEGER_LIMIT) {
        return value;
    }

    let scaled = cents * SNAP_SCALE;
    let snapped = if scaled.abs() < EXACT_INTEGER_LIMIT {
        scaled.round() / SNAP_SCALE
    } else {
        cents
    };
    // f64::round is half-away-from-zero
    snapped.round() / 100.0
}
