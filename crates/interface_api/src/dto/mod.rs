//! Request/Response data transfer objects

pub mod point;
pub mod response;

pub use point::{ChargeRequest, UseRequest, PointDetail, PointHistoryDetail};
pub use response::ApiResponse;
