//! In-memory history table

use parking_lot::RwLock;
use tracing::{debug, instrument};

use core_kernel::{DomainPort, HistoryId, PortError, UserId};
use domain_point::{NewPointHistory, PointHistory, PointHistoryPort};

use crate::config::TableConfig;

#[derive(Debug)]
struct Rows {
    entries: Vec<PointHistory>,
    next_id: u64,
}

impl Default for Rows {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }
}

/// Append-only history log
///
/// Identifiers are assigned in append order starting at 1. Id assignment and
/// the push happen under one write lock, so ids are unique and the log order
/// matches id order.
#[derive(Debug, Default)]
pub struct PointHistoryTable {
    rows: RwLock<Rows>,
    config: TableConfig,
}

impl PointHistoryTable {
    /// Creates an empty table without simulated latency
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty table with the given configuration
    pub fn with_config(config: TableConfig) -> Self {
        config.log_created("point_history");
        Self {
            rows: RwLock::new(Rows::default()),
            config,
        }
    }

    /// Total number of entries across all users
    pub fn len(&self) -> usize {
        self.rows.read().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.read().entries.is_empty()
    }
}

impl DomainPort for PointHistoryTable {}

impl PointHistoryPort for PointHistoryTable {
    #[instrument(skip(self, history), fields(user_id = %history.user_id, kind = %history.kind))]
    fn append(&self, history: NewPointHistory) -> Result<PointHistory, PortError> {
        self.config.before_write();

        let mut rows = self.rows.write();
        let id = HistoryId::new(rows.next_id);
        rows.next_id += 1;

        let stored = history.into_history(id);
        rows.entries.push(stored.clone());
        debug!(history_id = %id, "Appended point history");
        Ok(stored)
    }

    #[instrument(skip(self), fields(user_id = %user_id))]
    fn list_by_user(&self, user_id: UserId) -> Result<Vec<PointHistory>, PortError> {
        self.config.before_read();

        let rows = self.rows.read();
        let entries: Vec<PointHistory> = rows
            .entries
            .iter()
            .filter(|h| h.user_id() == user_id)
            .cloned()
            .collect();
        debug!(count = entries.len(), "Listed point history");
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use core_kernel::Points;

    #[test]
    fn test_ids_start_at_one_and_increase() {
        let table = PointHistoryTable::new();
        let first = table
            .append(NewPointHistory::charge(UserId::new(1), Points::new(10), Utc::now()))
            .unwrap();
        let second = table
            .append(NewPointHistory::use_points(UserId::new(2), Points::new(5), Utc::now()))
            .unwrap();

        assert_eq!(first.id(), HistoryId::new(1));
        assert_eq!(second.id(), HistoryId::new(2));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_list_by_user_filters() {
        let table = PointHistoryTable::new();
        table.append(NewPointHistory::charge(UserId::new(1), Points::new(10), Utc::now())).unwrap();
        table.append(NewPointHistory::charge(UserId::new(2), Points::new(20), Utc::now())).unwrap();
        table.append(NewPointHistory::use_points(UserId::new(1), Points::new(3), Utc::now())).unwrap();

        let entries = table.list_by_user(UserId::new(1)).unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|h| h.user_id() == UserId::new(1)));
        assert!(table.list_by_user(UserId::new(3)).unwrap().is_empty());
    }
}
