//! Point domain errors

use thiserror::Error;

use core_kernel::{Points, PortError, UserId};

/// Errors that can occur in the point domain
///
/// Every variant except `Store` is a terminal, user-facing rejection; the
/// service never retries any of them.
#[derive(Debug, Error)]
pub enum PointError {
    /// Charge or use amount was zero or negative
    #[error("Invalid point amount: {0} (must be positive)")]
    InvalidAmount(i64),

    /// No balance record exists for the user
    #[error("User point not found: {0}")]
    NotFound(UserId),

    /// Use amount exceeds the current balance
    #[error("Insufficient point balance for {user_id}: balance={balance}, requested={requested}")]
    InsufficientBalance {
        user_id: UserId,
        balance: Points,
        requested: Points,
    },

    /// Charge would push the balance over the configured limit
    #[error("Point balance limit exceeded for {user_id}: balance={balance}, requested={requested}, limit={limit}")]
    ExceedBalance {
        user_id: UserId,
        balance: Points,
        requested: Points,
        limit: Points,
    },

    /// A store collaborator failed
    #[error("Store error: {0}")]
    Store(#[from] PortError),
}

impl PointError {
    /// Stable error code exposed to API clients
    pub fn code(&self) -> &'static str {
        match self {
            PointError::InvalidAmount(_) => "400_1",
            PointError::InsufficientBalance { .. } => "400_2",
            PointError::ExceedBalance { .. } => "400_3",
            PointError::NotFound(_) => "404_1",
            PointError::Store(_) => "500_1",
        }
    }

    /// Fixed user-facing message for the error code
    pub fn message(&self) -> &'static str {
        match self {
            PointError::InvalidAmount(_) => "Point amount must be greater than zero.",
            PointError::InsufficientBalance { .. } => "Point balance is insufficient.",
            PointError::ExceedBalance { .. } => "Point balance would exceed the allowed maximum.",
            PointError::NotFound(_) => "User point could not be found.",
            PointError::Store(_) => "Point store is unavailable.",
        }
    }

    /// Returns true if the error was caused by the request rather than the system
    pub fn is_client_error(&self) -> bool {
        !matches!(self, PointError::Store(_))
    }
}
