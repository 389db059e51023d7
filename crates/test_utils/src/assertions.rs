//! Custom Test Assertions
//!
//! Assertion helpers for point types that give more meaningful failure
//! messages than bare `assert_eq!`.

use core_kernel::UserId;
use domain_point::{PointError, PointHistory, PointService, TransactionType, UserPoint};

/// Asserts that a balance record holds `expected` points
pub fn assert_balance(point: &UserPoint, expected: u64) {
    assert_eq!(
        point.point().value(),
        expected,
        "Balance mismatch for {}: actual={}, expected={}",
        point.id(),
        point.point(),
        expected
    );
}

/// Asserts that the service reports `expected` points for `user_id`
pub fn assert_service_balance(service: &PointService, user_id: UserId, expected: u64) {
    match service.get_balance(user_id) {
        Ok(point) => assert_balance(&point, expected),
        Err(e) => panic!("Expected balance {} for {}, got error: {}", expected, user_id, e),
    }
}

/// Asserts that a history has exactly the given (kind, amount) sequence
pub fn assert_history_entries(histories: &[PointHistory], expected: &[(TransactionType, u64)]) {
    let actual: Vec<(TransactionType, u64)> = histories
        .iter()
        .map(|h| (h.kind(), h.amount().value()))
        .collect();
    assert_eq!(
        actual, expected,
        "History mismatch: actual={:?}, expected={:?}",
        actual, expected
    );
}

/// Asserts that a result failed with the given error code
pub fn assert_point_error<T: std::fmt::Debug>(result: Result<T, PointError>, expected_code: &str) {
    match result {
        Err(e) => assert_eq!(
            e.code(),
            expected_code,
            "Error code mismatch: actual={} ({}), expected={}",
            e.code(),
            e,
            expected_code
        ),
        Ok(value) => panic!("Expected error {}, got Ok({:?})", expected_code, value),
    }
}

/// Asserts that history ids are unique and strictly increasing
pub fn assert_ids_increasing(histories: &[PointHistory]) {
    for pair in histories.windows(2) {
        assert!(
            pair[0].id().value() < pair[1].id().value(),
            "History ids not increasing: {} then {}",
            pair[0].id(),
            pair[1].id()
        );
    }
}
