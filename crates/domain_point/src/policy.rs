//! Balance policy
//!
//! Whether `charge` enforces an upper bound on a balance is a deployment
//! decision, so the bound lives here rather than in the model.

use serde::{Deserialize, Serialize};

use core_kernel::Points;

/// Limits applied to balance mutations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointPolicy {
    /// Highest balance a charge may produce; `None` means unbounded
    pub max_balance: Option<Points>,
}

impl PointPolicy {
    /// A policy without an upper bound
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// A policy that rejects charges above `max`
    pub fn with_max_balance(max: u64) -> Self {
        Self {
            max_balance: Some(Points::new(max)),
        }
    }
}
