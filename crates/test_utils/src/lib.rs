//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! point ledger test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built test data
//! - `builders`: Builder patterns for test data construction
//! - `stores`: In-memory store wiring, failing doubles and a concurrent runner
//! - `assertions`: Custom assertion helpers for point types
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod stores;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use stores::*;
pub use assertions::*;
pub use generators::*;
