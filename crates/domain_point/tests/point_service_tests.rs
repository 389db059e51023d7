//! Tests for PointService against the in-memory tables

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;
use proptest::prelude::*;

use core_kernel::{DomainPort, Points, PortError, UserId};
use domain_point::{
    PointError, PointHistoryPort, PointPolicy, PointService, TransactionType, UserPoint,
    UserPointPort,
};
use infra_memory::{PointHistoryTable, UserPointTable};
use test_utils::{
    assert_balance, assert_history_entries, assert_ids_increasing, assert_point_error,
    assert_service_balance, non_positive_amount_strategy, user_id_strategy, FailingHistoryStore,
    FailingUserPointStore, IdFixtures, PointFixtures, TemporalFixtures, TestHistoryBuilder,
    TestStores, TestUserPointBuilder,
};

/// Balance store that stamps every write one second earlier than the last
struct BackwardsClockStore {
    inner: UserPointTable,
    clock: Mutex<DateTime<Utc>>,
}

impl BackwardsClockStore {
    fn new() -> Self {
        Self {
            inner: UserPointTable::new(),
            clock: Mutex::new(TemporalFixtures::later_time()),
        }
    }
}

impl DomainPort for BackwardsClockStore {}

impl UserPointPort for BackwardsClockStore {
    fn read(&self, id: UserId) -> Result<Option<UserPoint>, PortError> {
        self.inner.read(id)
    }

    fn write(&self, point: UserPoint) -> Result<UserPoint, PortError> {
        let mut clock = self.clock.lock();
        *clock -= Duration::seconds(1);
        self.inner.write(UserPoint::new(point.id(), point.point(), *clock))
    }
}

// ============================================================================
// Charge Tests
// ============================================================================

mod charge_tests {
    use super::*;

    #[test]
    fn test_charge_unknown_user_creates_balance() {
        let stores = TestStores::new();
        let service = stores.service();

        let point = service.charge(IdFixtures::user_id(), 1_000).unwrap();

        assert_balance(&point, 1_000);
        assert_service_balance(&service, IdFixtures::user_id(), 1_000);
    }

    #[test]
    fn test_charge_accumulates() {
        let service = TestStores::new().service();
        let user = IdFixtures::user_id();

        service.charge(user, 100).unwrap();
        let point = service.charge(user, 250).unwrap();

        assert_balance(&point, 350);
    }

    #[test]
    fn test_charge_rejects_non_positive_amounts() {
        let stores = TestStores::new();
        let service = stores.service();
        let user = IdFixtures::user_id();
        service.charge(user, 500).unwrap();

        for amount in PointFixtures::invalid_amounts() {
            assert_point_error(service.charge(user, amount), "400_1");
        }

        assert_service_balance(&service, user, 500);
        assert_eq!(service.get_history(user).unwrap().len(), 1);
    }

    #[test]
    fn test_invalid_charge_of_unknown_user_creates_nothing() {
        let stores = TestStores::new();
        let service = stores.service();

        assert_point_error(service.charge(IdFixtures::user_id(), 0), "400_1");

        assert!(stores.user_points.is_empty());
        assert!(stores.histories.is_empty());
    }

    #[test]
    fn test_charge_respects_max_balance() {
        let stores = TestStores::new();
        let service =
            stores.service_with_policy(PointPolicy::with_max_balance(PointFixtures::max_balance()));
        let user = IdFixtures::user_id();

        service.charge(user, 99_000).unwrap();
        assert_point_error(service.charge(user, 1_001), "400_3");
        assert_service_balance(&service, user, 99_000);

        let point = service.charge(user, 1_000).unwrap();
        assert_balance(&point, 100_000);
        assert_eq!(service.get_history(user).unwrap().len(), 2);
    }

    #[test]
    fn test_charge_overflow_is_rejected() {
        let service = TestStores::new().service();
        let user = IdFixtures::user_id();

        service.charge(user, i64::MAX).unwrap();
        service.charge(user, i64::MAX).unwrap();
        let result = service.charge(user, 2);

        match result {
            Err(PointError::ExceedBalance { limit, .. }) => assert_eq!(limit, Points::new(u64::MAX)),
            other => panic!("Expected ExceedBalance, got {:?}", other),
        }
    }
}

// ============================================================================
// Use Tests
// ============================================================================

mod use_tests {
    use super::*;

    #[test]
    fn test_use_subtracts() {
        let service = TestStores::new().service();
        let user = IdFixtures::user_id();

        service.charge(user, PointFixtures::charge_amount()).unwrap();
        let point = service.use_point(user, PointFixtures::use_amount()).unwrap();

        assert_balance(&point, 700);
    }

    #[test]
    fn test_use_entire_balance() {
        let service = TestStores::new().service();
        let user = IdFixtures::user_id();

        service.charge(user, 100).unwrap();
        let point = service.use_point(user, 100).unwrap();

        assert!(point.point().is_zero());
    }

    #[test]
    fn test_use_unknown_user_is_not_found() {
        let stores = TestStores::new();
        let service = stores.service();

        let result = service.use_point(IdFixtures::unknown_user_id(), 10);

        assert!(matches!(result, Err(PointError::NotFound(id)) if id == IdFixtures::unknown_user_id()));
        assert!(stores.user_points.is_empty());
        assert!(stores.histories.is_empty());
    }

    #[test]
    fn test_use_more_than_balance_is_rejected() {
        let service = TestStores::new().service();
        let user = IdFixtures::user_id();
        service.charge(user, 50).unwrap();

        assert_point_error(service.use_point(user, 100), "400_2");

        assert_service_balance(&service, user, 50);
        assert_eq!(service.get_history(user).unwrap().len(), 1);
    }

    #[test]
    fn test_use_rejects_non_positive_amounts() {
        let service = TestStores::new().service();
        let user = IdFixtures::user_id();
        service.charge(user, 50).unwrap();

        assert_point_error(service.use_point(user, 0), "400_1");
        assert_point_error(service.use_point(user, -10), "400_1");
        assert_service_balance(&service, user, 50);
    }

    #[test]
    fn test_invalid_amount_checked_before_existence() {
        let service = TestStores::new().service();
        assert_point_error(service.use_point(IdFixtures::unknown_user_id(), 0), "400_1");
    }
}

// ============================================================================
// Query Tests
// ============================================================================

mod query_tests {
    use super::*;

    #[test]
    fn test_get_balance_unknown_user() {
        let service = TestStores::new().service();
        assert_point_error(service.get_balance(IdFixtures::unknown_user_id()), "404_1");
    }

    #[test]
    fn test_get_history_unknown_user_is_empty() {
        let service = TestStores::new().service();
        assert!(service.get_history(IdFixtures::unknown_user_id()).unwrap().is_empty());
    }

    #[test]
    fn test_history_records_charge_then_use() {
        let service = TestStores::new().service();
        let user = IdFixtures::user_id();

        service.charge(user, 100).unwrap();
        service.use_point(user, 40).unwrap();

        let histories = service.get_history(user).unwrap();
        assert_history_entries(
            &histories,
            &[(TransactionType::Charge, 100), (TransactionType::Use, 40)],
        );
        assert!(histories.iter().all(|h| h.user_id() == user));
        assert_ids_increasing(&histories);
    }

    #[test]
    fn test_history_is_per_user() {
        let service = TestStores::new().service();

        service.charge(IdFixtures::user_id(), 100).unwrap();
        service.charge(IdFixtures::other_user_id(), 200).unwrap();
        service.use_point(IdFixtures::user_id(), 30).unwrap();

        assert_history_entries(
            &service.get_history(IdFixtures::user_id()).unwrap(),
            &[(TransactionType::Charge, 100), (TransactionType::Use, 30)],
        );
        assert_history_entries(
            &service.get_history(IdFixtures::other_user_id()).unwrap(),
            &[(TransactionType::Charge, 200)],
        );
    }

    #[test]
    fn test_history_keeps_append_order_when_clock_runs_backwards() {
        let service = PointService::new(
            Arc::new(BackwardsClockStore::new()),
            Arc::new(PointHistoryTable::new()),
        );
        let user = IdFixtures::user_id();

        service.charge(user, 100).unwrap();
        service.use_point(user, 40).unwrap();

        let histories = service.get_history(user).unwrap();
        assert_history_entries(
            &histories,
            &[(TransactionType::Charge, 100), (TransactionType::Use, 40)],
        );
        assert!(histories[0].timestamp() > histories[1].timestamp());
    }

    #[test]
    fn test_history_returns_store_order() {
        let stores = TestStores::new();
        let service = stores.service();
        let user = IdFixtures::user_id();

        stores
            .histories
            .append(
                TestHistoryBuilder::new()
                    .with_user_id(user)
                    .with_amount(500)
                    .with_timestamp(TemporalFixtures::later_time())
                    .build_new(),
            )
            .unwrap();
        stores
            .histories
            .append(
                TestHistoryBuilder::new()
                    .with_user_id(user)
                    .with_amount(200)
                    .with_kind(TransactionType::Use)
                    .with_timestamp(TemporalFixtures::reference_time())
                    .build_new(),
            )
            .unwrap();

        assert_history_entries(
            &service.get_history(user).unwrap(),
            &[(TransactionType::Charge, 500), (TransactionType::Use, 200)],
        );
    }

    #[test]
    fn test_history_timestamp_matches_balance_update() {
        let service = TestStores::new().service();
        let point = service.charge(IdFixtures::user_id(), 10).unwrap();

        let histories = service.get_history(IdFixtures::user_id()).unwrap();
        assert_eq!(histories[0].timestamp(), point.updated_at());
    }
}

// ============================================================================
// Store Failure Tests
// ============================================================================

mod store_failure_tests {
    use super::*;

    #[test]
    fn test_write_failure_releases_lock() {
        let user_points = Arc::new(FailingUserPointStore::new());
        let histories = Arc::new(FailingHistoryStore::new());
        let service = PointService::new(user_points.clone(), histories.clone());
        let user = UserId::new(1);

        user_points.set_fail_writes(true);
        assert_point_error(service.charge(user, 10), "500_1");

        user_points.set_fail_writes(false);
        let point = service.charge(user, 10).unwrap();

        assert_balance(&point, 10);
        assert_eq!(user_points.write_attempts(), 2);
        assert_eq!(service.get_history(user).unwrap().len(), 1);
    }

    #[test]
    fn test_append_failure_keeps_written_balance() {
        let user_points = Arc::new(FailingUserPointStore::new());
        let histories = Arc::new(FailingHistoryStore::new());
        let service = PointService::new(user_points.clone(), histories.clone());
        let user = UserId::new(1);

        histories.set_fail_appends(true);
        let result = service.charge(user, 10);
        assert!(matches!(result, Err(PointError::Store(_))));

        assert_service_balance(&service, user, 10);
        assert!(service.get_history(user).unwrap().is_empty());

        histories.set_fail_appends(false);
        service.use_point(user, 5).unwrap();
        assert_service_balance(&service, user, 5);
    }
}

// ============================================================================
// Validation Properties
// ============================================================================

proptest! {
    #[test]
    fn invalid_amounts_leave_state_and_locks_untouched(
        user in user_id_strategy(),
        amount in non_positive_amount_strategy(),
    ) {
        let stores = TestStores::new();
        let service = stores.service();
        stores
            .user_points
            .write(TestUserPointBuilder::new().with_id(user).with_point(500).build())
            .unwrap();

        prop_assert!(matches!(service.charge(user, amount), Err(PointError::InvalidAmount(a)) if a == amount));
        prop_assert!(matches!(service.use_point(user, amount), Err(PointError::InvalidAmount(a)) if a == amount));

        prop_assert_eq!(service.get_balance(user).unwrap().point().value(), 500);
        prop_assert!(service.get_history(user).unwrap().is_empty());
        prop_assert_eq!(service.lock_count(), 0);
    }
}

#[test]
fn test_valid_mutation_creates_one_lock_per_user() {
    let service = TestStores::new().service();

    service.charge(IdFixtures::user_id(), 10).unwrap();
    service.use_point(IdFixtures::user_id(), 5).unwrap();
    assert_eq!(service.lock_count(), 1);

    service.charge(IdFixtures::other_user_id(), 10).unwrap();
    assert_eq!(service.lock_count(), 2);
}
