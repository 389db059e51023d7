//! Property-Based Test Generators
//!
//! Proptest strategies for amounts, users and operation sequences.

use core_kernel::UserId;
use proptest::prelude::*;

/// A single balance mutation in a generated scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointOp {
    Charge(i64),
    Use(i64),
}

impl PointOp {
    pub fn amount(&self) -> i64 {
        match self {
            PointOp::Charge(amount) | PointOp::Use(amount) => *amount,
        }
    }
}

/// Strategy for user ids in a small range, so scenarios revisit users
pub fn user_id_strategy() -> impl Strategy<Value = UserId> {
    (1u64..=8u64).prop_map(UserId::new)
}

/// Strategy for amounts the validator accepts
pub fn positive_amount_strategy() -> impl Strategy<Value = i64> {
    1i64..=10_000i64
}

/// Strategy for amounts the validator rejects
pub fn non_positive_amount_strategy() -> impl Strategy<Value = i64> {
    prop_oneof![Just(0i64), i64::MIN..0i64]
}

/// Strategy for one charge or use of a valid amount
pub fn point_op_strategy() -> impl Strategy<Value = PointOp> {
    prop_oneof![
        positive_amount_strategy().prop_map(PointOp::Charge),
        positive_amount_strategy().prop_map(PointOp::Use),
    ]
}

/// Strategy for a sequence of operations
pub fn point_ops_strategy(max_len: usize) -> impl Strategy<Value = Vec<PointOp>> {
    prop::collection::vec(point_op_strategy(), 1..=max_len)
}
