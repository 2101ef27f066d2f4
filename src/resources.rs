// ABOUTME: Shared server resources handed to every route as axum state
// ABOUTME: Holds the database, auth manager, notifier, health checker and configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

use std::sync::Arc;

use crate::auth::AuthManager;
use crate::config::ServerConfig;
use crate::database::Database;
use crate::health::HealthChecker;
use crate::notifications::{LogNotifier, Notifier};

/// Centralized resource container for dependency injection
///
/// Built once at startup and shared behind an `Arc`, so handlers never
/// reconstruct the auth manager or reopen the pool.
#[derive(Clone)]
pub struct ServerResources {
    /// Database handle
    pub database: Database,
    /// Token issuing and validation
    pub auth_manager: Arc<AuthManager>,
    /// Outbound notifications
    pub notifier: Arc<dyn Notifier>,
    /// Liveness and readiness checks
    pub health_checker: Arc<HealthChecker>,
    /// Loaded configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Create resources with the log-backed notifier
    #[must_use]
    pub fn new(database: Database, auth_manager: AuthManager, config: Arc<ServerConfig>) -> Self {
        let health_checker = HealthChecker::new(database.clone(), config.environment);
        Self {
            database,
            auth_manager: Arc::new(auth_manager),
            notifier: Arc::new(LogNotifier),
            health_checker: Arc::new(health_checker),
            config,
        }
    }

    /// Replace the notifier
    #[must_use]
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }
}
