//! Balance and history records
//!
//! Both record types are immutable values. A mutation never edits a
//! `UserPoint` in place; `charge` and `use_points` return a new snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{HistoryId, Points, UserId};

use crate::error::PointError;

/// Current point balance of a user at a point in time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPoint {
    id: UserId,
    point: Points,
    updated_at: DateTime<Utc>,
}

impl UserPoint {
    /// Creates a balance snapshot
    pub fn new(id: UserId, point: Points, updated_at: DateTime<Utc>) -> Self {
        Self { id, point, updated_at }
    }

    /// Implicit zero balance for a user that has never been charged
    pub fn empty(id: UserId) -> Self {
        Self::new(id, Points::ZERO, Utc::now())
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn point(&self) -> Points {
        self.point
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the snapshot after adding `amount`
    ///
    /// # Errors
    ///
    /// Returns `PointError::ExceedBalance` if the result would be above
    /// `max_balance`, or would not fit in the balance type at all.
    pub fn charge(&self, amount: Points, max_balance: Option<Points>) -> Result<UserPoint, PointError> {
        let exceed = |limit: Points| PointError::ExceedBalance {
            user_id: self.id,
            balance: self.point,
            requested: amount,
            limit,
        };

        let next = self
            .point
            .checked_add(amount)
            .map_err(|_| exceed(Points::new(u64::MAX)))?;

        if let Some(limit) = max_balance {
            if next > limit {
                return Err(exceed(limit));
            }
        }

        Ok(Self::new(self.id, next, Utc::now()))
    }

    /// Returns the snapshot after subtracting `amount`
    ///
    /// # Errors
    ///
    /// Returns `PointError::InsufficientBalance` if `amount` exceeds the balance.
    pub fn use_points(&self, amount: Points) -> Result<UserPoint, PointError> {
        let next = self
            .point
            .checked_sub(amount)
            .map_err(|_| PointError::InsufficientBalance {
                user_id: self.id,
                balance: self.point,
                requested: amount,
            })?;

        Ok(Self::new(self.id, next, Utc::now()))
    }
}

/// Kind of balance mutation recorded in the history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    /// Balance increased
    Charge,
    /// Balance decreased
    Use,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionType::Charge => write!(f, "CHARGE"),
            TransactionType::Use => write!(f, "USE"),
        }
    }
}

/// A history entry that has not been stored yet
///
/// The store assigns the identifier when it appends the entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPointHistory {
    pub user_id: UserId,
    pub amount: Points,
    pub kind: TransactionType,
    pub timestamp: DateTime<Utc>,
}

impl NewPointHistory {
    pub fn charge(user_id: UserId, amount: Points, timestamp: DateTime<Utc>) -> Self {
        Self { user_id, amount, kind: TransactionType::Charge, timestamp }
    }

    pub fn use_points(user_id: UserId, amount: Points, timestamp: DateTime<Utc>) -> Self {
        Self { user_id, amount, kind: TransactionType::Use, timestamp }
    }

    /// Attaches the store-assigned identifier
    pub fn into_history(self, id: HistoryId) -> PointHistory {
        PointHistory {
            id,
            user_id: self.user_id,
            amount: self.amount,
            kind: self.kind,
            timestamp: self.timestamp,
        }
    }
}

/// Immutable record of one balance mutation
///
/// `amount` is the delta that was applied, not the resulting balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointHistory {
    id: HistoryId,
    user_id: UserId,
    amount: Points,
    kind: TransactionType,
    timestamp: DateTime<Utc>,
}

impl PointHistory {
    pub fn id(&self) -> HistoryId {
        self.id
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn amount(&self) -> Points {
        self.amount
    }

    pub fn kind(&self) -> TransactionType {
        self.kind
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}
