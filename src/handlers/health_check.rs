//! # Health Check Handler
//!
//! Simple health check endpoint for monitoring application availability.
//! This endpoint can be used by load balancers, monitoring systems, or
//! deployment tools to verify that the application is running.

use axum::Json;
use tracing::{debug, instrument};

use crate::models::HealthResponse;

/// Health check endpoint that returns `{"status": "ok"}`.
///
/// Ignores the query string and the request body. It performs no checks
/// beyond being reachable.
///
/// # Returns
///
/// Always returns `200 OK` with [`HealthResponse`].
#[instrument]
pub async fn health_check() -> Json<HealthResponse> {
    debug!("Health check endpoint accessed");
    Json(HealthResponse::ok())
}
