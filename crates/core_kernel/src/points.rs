//! Point amounts with checked integer arithmetic
//!
//! A `Points` value is an unsigned count, so a balance can never be
//! represented as negative. Arithmetic is checked and surfaces overflow and
//! underflow as errors instead of wrapping.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors that can occur during point arithmetic
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PointsError {
    #[error("Overflow: {current} + {amount} exceeds the representable range")]
    Overflow { current: u64, amount: u64 },

    #[error("Underflow: cannot subtract {amount} from {current}")]
    Underflow { current: u64, amount: u64 },
}

/// A non-negative number of points
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Points(u64);

impl Points {
    /// Zero points
    pub const ZERO: Points = Points(0);

    /// Creates a new point amount
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw value
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition
    pub fn checked_add(&self, other: Points) -> Result<Points, PointsError> {
        self.0
            .checked_add(other.0)
            .map(Points)
            .ok_or(PointsError::Overflow {
                current: self.0,
                amount: other.0,
            })
    }

    /// Checked subtraction; fails rather than going below zero
    pub fn checked_sub(&self, other: Points) -> Result<Points, PointsError> {
        self.0
            .checked_sub(other.0)
            .map(Points)
            .ok_or(PointsError::Underflow {
                current: self.0,
                amount: other.0,
            })
    }
}

impl From<u64> for Points {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}P", self.0)
    }
}
