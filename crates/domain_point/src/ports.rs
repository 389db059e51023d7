//! Point Domain Ports
//!
//! Storage interfaces the point service depends on. The service only ever
//! sees these traits; `infra_memory` provides the in-memory tables and tests
//! provide failing doubles.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use domain_point::{PointService, UserPointPort, PointHistoryPort};
//!
//! let user_points: Arc<dyn UserPointPort> = Arc::new(UserPointTable::new());
//! let histories: Arc<dyn PointHistoryPort> = Arc::new(PointHistoryTable::new());
//! let service = PointService::new(user_points, histories);
//! ```

use core_kernel::{DomainPort, PortError, UserId};

use crate::model::{NewPointHistory, PointHistory, UserPoint};

/// Key → current balance store
pub trait UserPointPort: DomainPort {
    /// Returns the current balance record, or `None` if the user is unknown
    fn read(&self, id: UserId) -> Result<Option<UserPoint>, PortError>;

    /// Replaces the balance record for `point.id()` and returns the stored value
    fn write(&self, point: UserPoint) -> Result<UserPoint, PortError>;
}

/// Append-only mutation log
pub trait PointHistoryPort: DomainPort {
    /// Appends an entry and returns it with its store-assigned id
    fn append(&self, history: NewPointHistory) -> Result<PointHistory, PortError>;

    /// Returns every entry recorded for `user_id`
    fn list_by_user(&self, user_id: UserId) -> Result<Vec<PointHistory>, PortError>;
}
