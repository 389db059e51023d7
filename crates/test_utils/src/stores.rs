//! Store Test Utilities
//!
//! Wires the in-memory tables into a service, provides failing store doubles
//! and a helper that releases many threads at once.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::Duration;

use core_kernel::{DomainPort, PortError, UserId};
use domain_point::{
    NewPointHistory, PointHistory, PointHistoryPort, PointPolicy, PointService, UserPoint,
    UserPointPort,
};
use infra_memory::{PointHistoryTable, TableConfig, UserPointTable};

/// In-memory tables plus a service wired to them
///
/// The tables stay reachable so tests can inspect them directly.
pub struct TestStores {
    pub user_points: Arc<UserPointTable>,
    pub histories: Arc<PointHistoryTable>,
}

impl Default for TestStores {
    fn default() -> Self {
        Self::new()
    }
}

impl TestStores {
    /// Tables without simulated latency
    pub fn new() -> Self {
        Self::with_config(TableConfig::new())
    }

    /// Tables that sleep on every access, widening race windows
    pub fn throttled(latency: Duration) -> Self {
        Self::with_config(TableConfig::new().read_latency(latency).write_latency(latency))
    }

    pub fn with_config(config: TableConfig) -> Self {
        Self {
            user_points: Arc::new(UserPointTable::with_config(config.clone())),
            histories: Arc::new(PointHistoryTable::with_config(config)),
        }
    }

    /// An unbounded service over these tables
    pub fn service(&self) -> PointService {
        self.service_with_policy(PointPolicy::unbounded())
    }

    pub fn service_with_policy(&self, policy: PointPolicy) -> PointService {
        PointService::with_policy(
            self.user_points.clone(),
            self.histories.clone(),
            policy,
        )
    }
}

/// Balance store whose writes can be switched to fail
///
/// Reads and successful writes go to an inner table.
#[derive(Debug, Default)]
pub struct FailingUserPointStore {
    inner: UserPointTable,
    fail_writes: AtomicBool,
    writes: AtomicUsize,
}

impl FailingUserPointStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of write attempts, failed ones included
    pub fn write_attempts(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl DomainPort for FailingUserPointStore {}

impl UserPointPort for FailingUserPointStore {
    fn read(&self, id: UserId) -> Result<Option<UserPoint>, PortError> {
        self.inner.read(id)
    }

    fn write(&self, point: UserPoint) -> Result<UserPoint, PortError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(PortError::unavailable("user_point"));
        }
        self.inner.write(point)
    }
}

/// History store whose appends can be switched to fail
#[derive(Debug, Default)]
pub struct FailingHistoryStore {
    inner: PointHistoryTable,
    fail_appends: AtomicBool,
}

impl FailingHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fail_appends(&self, fail: bool) {
        self.fail_appends.store(fail, Ordering::SeqCst);
    }
}

impl DomainPort for FailingHistoryStore {}

impl PointHistoryPort for FailingHistoryStore {
    fn append(&self, history: NewPointHistory) -> Result<PointHistory, PortError> {
        if self.fail_appends.load(Ordering::SeqCst) {
            return Err(PortError::internal("history append failed"));
        }
        self.inner.append(history)
    }

    fn list_by_user(&self, user_id: UserId) -> Result<Vec<PointHistory>, PortError> {
        self.inner.list_by_user(user_id)
    }
}

/// Runs `tasks` on one thread each, released together by a barrier
///
/// Results come back in task order.
pub fn run_concurrently<T, F>(tasks: Vec<F>) -> Vec<T>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    let barrier = Arc::new(Barrier::new(tasks.len()));
    let handles: Vec<_> = tasks
        .into_iter()
        .map(|task| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                task()
            })
        })
        .collect();

    handles
        .into_iter()
        .map(|handle| handle.join().expect("concurrent task panicked"))
        .collect()
}
