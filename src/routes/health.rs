// ABOUTME: Health check route handlers for load balancers and orchestrators
// ABOUTME: /health is liveness, /ready also checks the database and answers 503 when it fails
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};

use crate::health::HealthStatus;
use crate::resources::ServerResources;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/health", get(Self::handle_health))
            .route("/ready", get(Self::handle_ready))
            .with_state(resources)
    }

    async fn handle_health(State(resources): State<Arc<ServerResources>>) -> Response {
        (StatusCode::OK, Json(resources.health_checker.basic_health())).into_response()
    }

    async fn handle_ready(State(resources): State<Arc<ServerResources>>) -> Response {
        let report = resources.health_checker.readiness().await;
        let status = match report.status {
            HealthStatus::Healthy => StatusCode::OK,
            HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
        };
        (status, Json(report)).into_response()
    }
}
