//! Point Domain - Concurrency-controlled point balances
//!
//! This crate keeps a per-user point balance that concurrent callers can
//! charge (increase) or use (decrease), and records every mutation as an
//! immutable, append-only history entry.
//!
//! # Consistency Rules
//!
//! - A balance is never negative
//! - Charge and use amounts are strictly positive
//! - Mutations on the same user are linearizable; mutations on different
//!   users never block one another
//! - Every successful mutation appends exactly one history entry
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_point::PointService;
//! use core_kernel::UserId;
//!
//! let service = PointService::new(user_points, histories);
//!
//! service.charge(UserId::new(1), 1_000)?;
//! let balance = service.use_point(UserId::new(1), 300)?;
//! assert_eq!(balance.point().value(), 700);
//! ```

pub mod model;
pub mod lock;
pub mod ports;
pub mod policy;
pub mod validator;
pub mod service;
pub mod error;

pub use model::{UserPoint, PointHistory, NewPointHistory, TransactionType};
pub use lock::LockRegistry;
pub use ports::{UserPointPort, PointHistoryPort};
pub use policy::PointPolicy;
pub use validator::PointValidator;
pub use service::PointService;
pub use error::PointError;
