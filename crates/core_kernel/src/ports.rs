//! Ports and Adapters Infrastructure
//!
//! This module provides the foundational types for the storage ports the
//! point domain consumes. The domain defines the port traits; adapters
//! (the in-memory tables in `infra_memory`, or test doubles) implement them.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      PointService                            │
//! │        (validation, per-key locking, read-modify-write)      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Port Traits                             │
//! │           (UserPointPort, PointHistoryPort)                  │
//! │   Defined in domain_point, depend only on core_kernel        │
//! └─────────────────────────────────────────────────────────────┘
//!                    ▲                         ▲
//!                    │                         │
//!         ┌─────────┴─────────┐     ┌────────┴────────┐
//!         │  In-memory tables │     │   Test doubles   │
//!         │   (infra_memory)  │     │ (failing stores) │
//!         └───────────────────┘     └──────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! // In domain_point/src/ports.rs
//! pub trait UserPointPort: DomainPort {
//!     fn read(&self, id: UserId) -> Result<Option<UserPoint>, PortError>;
//!     fn write(&self, point: UserPoint) -> Result<UserPoint, PortError>;
//! }
//!
//! // In infra_memory
//! impl UserPointPort for UserPointTable { ... }
//! ```

use thiserror::Error;

/// Error type for port operations
///
/// All store adapters report failures through this type so the service can
/// propagate them without knowing which adapter is behind the port. A missing
/// record is not an error at this level; reads return `Option`.
#[derive(Debug, Error)]
pub enum PortError {
    /// The backing store is unavailable
    #[error("Store unavailable: {store}")]
    Unavailable {
        store: String,
    },

    /// An internal error occurred
    #[error("Internal error: {message}")]
    Internal {
        message: String,
    },
}

impl PortError {
    /// Creates an Unavailable error
    pub fn unavailable(store: impl Into<String>) -> Self {
        PortError::Unavailable {
            store: store.into(),
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        PortError::Internal {
            message: message.into(),
        }
    }
}

/// Marker trait for all domain ports
///
/// Ports are shared across request handlers and worker threads, so every
/// implementation must be thread-safe.
pub trait DomainPort: Send + Sync + 'static {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_error_unavailable() {
        let error = PortError::unavailable("point_history");
        assert_eq!(error.to_string(), "Store unavailable: point_history");
    }

    #[test]
    fn test_port_error_internal() {
        let error = PortError::internal("disk full");
        assert!(matches!(error, PortError::Internal { ref message } if message == "disk full"));
    }
}
