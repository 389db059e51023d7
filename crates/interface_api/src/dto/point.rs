//! Point DTOs
//!
//! Field names are camelCase on the wire.

use serde::{Deserialize, Serialize};

use domain_point::{PointHistory, TransactionType, UserPoint};

#[derive(Debug, Deserialize, Serialize)]
pub struct ChargeRequest {
    pub amount: i64,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct UseRequest {
    pub amount: i64,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PointDetail {
    pub id: u64,
    pub point_amount: u64,
    pub update_millis: i64,
}

impl From<UserPoint> for PointDetail {
    fn from(point: UserPoint) -> Self {
        Self {
            id: point.id().value(),
            point_amount: point.point().value(),
            update_millis: point.updated_at().timestamp_millis(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PointHistoryDetail {
    pub id: u64,
    pub user_id: u64,
    pub amount: u64,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub update_millis: i64,
}

impl From<PointHistory> for PointHistoryDetail {
    fn from(history: PointHistory) -> Self {
        Self {
            id: history.id().value(),
            user_id: history.user_id().value(),
            amount: history.amount().value(),
            kind: history.kind(),
            update_millis: history.timestamp().timestamp_millis(),
        }
    }
}
