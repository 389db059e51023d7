//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for the point ledger. These fixtures are
//! consistent and predictable for unit tests.

use chrono::{DateTime, TimeZone, Utc};
use core_kernel::UserId;

/// Fixture for point amounts
pub struct PointFixtures;

impl PointFixtures {
    /// A typical charge amount
    pub fn charge_amount() -> i64 {
        1_000
    }

    /// A typical use amount, smaller than `charge_amount`
    pub fn use_amount() -> i64 {
        300
    }

    /// Balance limit used by capped-policy tests
    pub fn max_balance() -> u64 {
        100_000
    }

    /// Amounts the validator must reject
    pub fn invalid_amounts() -> [i64; 3] {
        [0, -1, i64::MIN]
    }
}

/// Fixture for user identifiers
pub struct IdFixtures;

impl IdFixtures {
    /// The default test user
    pub fn user_id() -> UserId {
        UserId::new(1)
    }

    /// A second user for independence tests
    pub fn other_user_id() -> UserId {
        UserId::new(2)
    }

    /// A user that no test ever charges
    pub fn unknown_user_id() -> UserId {
        UserId::new(999_999)
    }
}

/// Fixture for timestamps
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Fixed reference instant (Jan 1, 2024)
    pub fn reference_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    /// One second after `reference_time`
    pub fn later_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 1).unwrap()
    }
}
