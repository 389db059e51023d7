//! HTTP API Layer
//!
//! This crate provides the REST API for the point ledger using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for points and health
//! - **Middleware**: Tracing and audit logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: `{ code, message }` error bodies
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(service, config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, patch},
    middleware as axum_middleware,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use domain_point::PointService;

use crate::config::ApiConfig;
use crate::middleware::audit_middleware;
use crate::handlers::{health, point};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<PointService>,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `service` - Point service backed by the process stores
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(service: Arc<PointService>, config: ApiConfig) -> Router {
    let state = AppState { service, config };

    let public_routes = Router::new()
        .route("/health", get(health::health_check));

    let point_routes = Router::new()
        .route("/:id", get(point::get_point))
        .route("/:id/histories", get(point::get_histories))
        .route("/:id/charge", patch(point::charge))
        .route("/:id/use", patch(point::use_point));

    Router::new()
        .merge(public_routes)
        .nest("/point", point_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum_middleware::from_fn(audit_middleware)),
        )
        .with_state(state)
}
