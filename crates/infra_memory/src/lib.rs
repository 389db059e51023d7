//! Infrastructure In-Memory Layer
//!
//! This crate provides the authoritative, process-local stores behind the
//! point domain's ports.
//!
//! # Tables
//!
//! - [`UserPointTable`]: user id → current balance, full-record replace on write
//! - [`PointHistoryTable`]: append-only mutation log with auto-increment ids
//!
//! Each table guards its own internal structure. Neither table knows about
//! the per-user locks held by the service.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use infra_memory::{UserPointTable, PointHistoryTable};
//! use domain_point::PointService;
//!
//! let service = PointService::new(
//!     Arc::new(UserPointTable::new()),
//!     Arc::new(PointHistoryTable::new()),
//! );
//! ```

pub mod config;
pub mod user_point;
pub mod point_history;

pub use config::TableConfig;
pub use user_point::UserPointTable;
pub use point_history::PointHistoryTable;
