//! Core Kernel - Foundational types for the point ledger
//!
//! This crate provides the building blocks shared by every other crate:
//! - Point amounts with checked, never-negative arithmetic
//! - Strongly-typed identifiers
//! - The port error type and marker trait for storage adapters

pub mod points;
pub mod identifiers;
pub mod ports;

pub use points::{Points, PointsError};
pub use identifiers::{UserId, HistoryId};
pub use ports::{PortError, DomainPort};
