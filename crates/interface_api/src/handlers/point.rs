//! Point handlers
//!
//! Every service call runs on the blocking pool: mutations may wait on a
//! per-user lock and store access may sleep when the tables are throttled.

use axum::{extract::{Path, State}, Json};
use tokio::task;

use core_kernel::UserId;

use crate::{AppState, error::ApiError};
use crate::dto::{ApiResponse, ChargeRequest, PointDetail, PointHistoryDetail, UseRequest};

/// Gets the balance of a user
pub async fn get_point(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<ApiResponse<PointDetail>>, ApiError> {
    let service = state.service.clone();
    let point = task::spawn_blocking(move || service.get_balance(UserId::new(id))).await??;
    Ok(Json(ApiResponse::ok(point.into())))
}

/// Lists the charge/use history of a user
pub async fn get_histories(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<ApiResponse<Vec<PointHistoryDetail>>>, ApiError> {
    let service = state.service.clone();
    let histories = task::spawn_blocking(move || service.get_history(UserId::new(id))).await??;
    Ok(Json(ApiResponse::ok(
        histories.into_iter().map(PointHistoryDetail::from).collect(),
    )))
}

/// Charges points to a user
pub async fn charge(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(request): Json<ChargeRequest>,
) -> Result<Json<ApiResponse<PointDetail>>, ApiError> {
    let service = state.service.clone();
    let point = task::spawn_blocking(move || service.charge(UserId::new(id), request.amount)).await??;
    Ok(Json(ApiResponse::ok(point.into())))
}

/// Uses points of a user
pub async fn use_point(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(request): Json<UseRequest>,
) -> Result<Json<ApiResponse<PointDetail>>, ApiError> {
    let service = state.service.clone();
    let point = task::spawn_blocking(move || service.use_point(UserId::new(id), request.amount)).await??;
    Ok(Json(ApiResponse::ok(point.into())))
}
