//! In-memory balance table

use dashmap::DashMap;
use tracing::{debug, instrument};

use core_kernel::{DomainPort, PortError, UserId};
use domain_point::{UserPoint, UserPointPort};

use crate::config::TableConfig;

/// Key → current balance map
///
/// Writes replace the whole record. The map's shards guard its own structure;
/// read-modify-write atomicity per user is the service's job, not the table's.
#[derive(Debug, Default)]
pub struct UserPointTable {
    rows: DashMap<UserId, UserPoint>,
    config: TableConfig,
}

impl UserPointTable {
    /// Creates an empty table without simulated latency
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty table with the given configuration
    pub fn with_config(config: TableConfig) -> Self {
        config.log_created("user_point");
        Self {
            rows: DashMap::new(),
            config,
        }
    }

    /// Number of users with a balance record
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl DomainPort for UserPointTable {}

impl UserPointPort for UserPointTable {
    #[instrument(skip(self), fields(user_id = %id))]
    fn read(&self, id: UserId) -> Result<Option<UserPoint>, PortError> {
        self.config.before_read();
        let point = self.rows.get(&id).map(|row| row.value().clone());
        debug!(found = point.is_some(), "Read user point");
        Ok(point)
    }

    #[instrument(skip(self, point), fields(user_id = %point.id()))]
    fn write(&self, point: UserPoint) -> Result<UserPoint, PortError> {
        self.config.before_write();
        self.rows.insert(point.id(), point.clone());
        debug!(balance = %point.point(), "Wrote user point");
        Ok(point)
    }
}
