//! Test Data Builders
//!
//! Builders for records with sensible defaults, so a test only spells out
//! the fields it cares about.

use chrono::{DateTime, Utc};
use core_kernel::{HistoryId, Points, UserId};
use domain_point::{NewPointHistory, PointHistory, TransactionType, UserPoint};

use crate::fixtures::{IdFixtures, TemporalFixtures};

/// Builder for balance records
pub struct TestUserPointBuilder {
    id: UserId,
    point: Points,
    updated_at: DateTime<Utc>,
}

impl Default for TestUserPointBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestUserPointBuilder {
    /// Creates a builder for a zero balance of the default user
    pub fn new() -> Self {
        Self {
            id: IdFixtures::user_id(),
            point: Points::ZERO,
            updated_at: TemporalFixtures::reference_time(),
        }
    }

    pub fn with_id(mut self, id: UserId) -> Self {
        self.id = id;
        self
    }

    pub fn with_point(mut self, point: u64) -> Self {
        self.point = Points::new(point);
        self
    }

    pub fn with_updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = updated_at;
        self
    }

    pub fn build(self) -> UserPoint {
        UserPoint::new(self.id, self.point, self.updated_at)
    }
}

/// Builder for history entries
pub struct TestHistoryBuilder {
    id: HistoryId,
    user_id: UserId,
    amount: Points,
    kind: TransactionType,
    timestamp: DateTime<Utc>,
}

impl Default for TestHistoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestHistoryBuilder {
    /// Creates a builder for a 100 point charge by the default user
    pub fn new() -> Self {
        Self {
            id: HistoryId::new(1),
            user_id: IdFixtures::user_id(),
            amount: Points::new(100),
            kind: TransactionType::Charge,
            timestamp: TemporalFixtures::reference_time(),
        }
    }

    pub fn with_id(mut self, id: u64) -> Self {
        self.id = HistoryId::new(id);
        self
    }

    pub fn with_user_id(mut self, user_id: UserId) -> Self {
        self.user_id = user_id;
        self
    }

    pub fn with_amount(mut self, amount: u64) -> Self {
        self.amount = Points::new(amount);
        self
    }

    pub fn with_kind(mut self, kind: TransactionType) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Builds the entry as it looks before a store assigns its id
    pub fn build_new(self) -> NewPointHistory {
        NewPointHistory {
            user_id: self.user_id,
            amount: self.amount,
            kind: self.kind,
            timestamp: self.timestamp,
        }
    }

    pub fn build(self) -> PointHistory {
        let id = self.id;
        self.build_new().into_history(id)
    }
}
