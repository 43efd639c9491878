//! Bounded counter state
//!
//! Count that moves one step at a time and clamps at `[MIN_VALUE, max_value]`.
//! Rendering and button wiring are left to whatever front end owns it;
//! `is_at_max` / `is_at_min` are the disabled-state flags it needs.

use serde::Serialize;

use crate::error::DomainError;

/// Floor of every counter
pub const MIN_VALUE: u32 = 0;

/// Default ceiling when none is given
pub const DEFAULT_MAX_VALUE: u32 = 10;

pub const MAX_WARNING: &str = "Límite Máximo alcanzado.";
pub const MIN_WARNING: &str = "Límite Mínimo alcanzado.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoundedCounter {
    count: u32,
    initial_value: u32,
    max_value: u32,
}

impl Default for BoundedCounter {
    fn default() -> Self {
        Self {
            count: MIN_VALUE,
            initial_value: MIN_VALUE,
            max_value: DEFAULT_MAX_VALUE,
        }
    }
}

impl BoundedCounter {
    pub fn new(initial_value: u32, max_value: u32) -> Result<Self, DomainError> {
        if initial_value > max_value {
            return Err(DomainError::invalid(format!(
                "initial value {} exceeds max value {}",
                initial_value, max_value
            )));
        }

        Ok(Self {
            count: initial_value,
            initial_value,
            max_value,
        })
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn max_value(&self) -> u32 {
        self.max_value
    }

    /// Step up unless already at the ceiling. Returns whether the count moved.
    pub fn increment(&mut self) -> bool {
        if self.count < self.max_value {
            self.count += 1;
            true
        } else {
            false
        }
    }

    /// Step down unless already at the floor. Returns whether the count moved.
    pub fn decrement(&mut self) -> bool {
        if self.count > MIN_VALUE {
            self.count -= 1;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.count = self.initial_value;
    }

    pub fn is_at_max(&self) -> bool {
        self.count == self.max_value
    }

    pub fn is_at_min(&self) -> bool {
        self.count == MIN_VALUE
    }

    /// Limit messages to show, max first. Both apply when `max_value == 0`.
    pub fn limit_warnings(&self) -> Vec<&'static str> {
        let mut warnings = Vec::new();
        if self.is_at_max() {
            warnings.push(MAX_WARNING);
        }
        if self.is_at_min() {
            warnings.push(MIN_WARNING);
        }
        warnings
    }
}
