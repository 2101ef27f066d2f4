// ABOUTME: Liveness and readiness checks for load balancers and orchestrators
// ABOUTME: Liveness reports service info; readiness also round-trips the database
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

//! Health check reports

use std::time::Instant;

use chrono::Utc;
use ironlog_core::constants::service_names;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::Environment;
use crate::database::Database;

/// Overall health status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// Everything works
    Healthy,
    /// A dependency is failing
    Unhealthy,
}

/// Individual component health status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentHealth {
    /// Component name
    pub name: String,
    /// Component status
    pub status: HealthStatus,
    /// Status description
    pub message: String,
    /// Check duration in milliseconds
    pub duration_ms: u64,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall service status
    pub status: HealthStatus,
    /// Service name
    pub service: String,
    /// Service version
    pub version: String,
    /// Deployment environment
    pub environment: String,
    /// Seconds since the checker was created
    pub uptime_seconds: u64,
    /// Individual component checks
    pub checks: Vec<ComponentHealth>,
    /// Response timestamp (RFC 3339)
    pub timestamp: String,
}

/// Health checker for the IronLog server
pub struct HealthChecker {
    start_time: Instant,
    environment: Environment,
    database: Database,
}

impl HealthChecker {
    /// Create a new health checker
    #[must_use]
    pub fn new(database: Database, environment: Environment) -> Self {
        Self {
            start_time: Instant::now(),
            environment,
            database,
        }
    }

    /// Liveness: the process is up and serving requests
    #[must_use]
    pub fn basic_health(&self) -> HealthResponse {
        self.response(vec![ComponentHealth {
            name: "service".into(),
            status: HealthStatus::Healthy,
            message: "Service is running".into(),
            duration_ms: 0,
        }])
    }

    /// Readiness: the database answers queries
    pub async fn readiness(&self) -> HealthResponse {
        let start = Instant::now();
        let database = match self.database.ping().await {
            Ok(()) => ComponentHealth {
                name: "database".into(),
                status: HealthStatus::Healthy,
                message: "Database connection successful".into(),
                duration_ms: elapsed_ms(start),
            },
            Err(e) => {
                warn!(error = %e, "Readiness check failed");
                ComponentHealth {
                    name: "database".into(),
                    status: HealthStatus::Unhealthy,
                    message: format!("Database check failed: {e}"),
                    duration_ms: elapsed_ms(start),
                }
            }
        };

        self.response(vec![database])
    }

    fn response(&self, checks: Vec<ComponentHealth>) -> HealthResponse {
        let status = if checks.iter().all(|c| c.status == HealthStatus::Healthy) {
            HealthStatus::Healthy
        } else {
            HealthStatus::Unhealthy
        };

        HealthResponse {
            status,
            service: service_names::IRONLOG_SERVER.into(),
            version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: self.environment.to_string(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            checks,
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}
