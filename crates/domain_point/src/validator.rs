//! Amount validation
//!
//! Runs before the service takes any lock, so a rejected request never
//! contends for or holds a per-user lock.

use core_kernel::Points;

use crate::error::PointError;

/// Validates requested mutation amounts
#[derive(Debug, Clone, Copy, Default)]
pub struct PointValidator;

impl PointValidator {
    /// Creates a new validator
    pub fn new() -> Self {
        Self
    }

    /// Checks that `amount` is strictly positive
    ///
    /// # Errors
    ///
    /// Returns `PointError::InvalidAmount` when `amount <= 0`
    pub fn check_amount(&self, amount: i64) -> Result<Points, PointError> {
        if amount <= 0 {
            return Err(PointError::InvalidAmount(amount));
        }
        Ok(Points::new(amount as u64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero() {
        let result = PointValidator::new().check_amount(0);
        assert!(matches!(result, Err(PointError::InvalidAmount(0))));
    }

    #[test]
    fn test_rejects_negative() {
        let result = PointValidator::new().check_amount(-1);
        assert!(matches!(result, Err(PointError::InvalidAmount(-1))));
    }

    #[test]
    fn test_accepts_positive() {
        assert_eq!(PointValidator::new().check_amount(1).unwrap(), Points::new(1));
        assert_eq!(
            PointValidator::new().check_amount(i64::MAX).unwrap(),
            Points::new(i64::MAX as u64)
        );
    }
}
