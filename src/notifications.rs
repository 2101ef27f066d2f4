// ABOUTME: Outbound user notifications such as password reset delivery
// ABOUTME: Notifier trait with a tracing-backed implementation; email transport is not bundled
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use ironlog_core::errors::AppResult;
use tracing::info;

/// Delivers account notifications to users
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Send a password reset token to `email`
    async fn send_password_reset(
        &self,
        email: &str,
        token: &str,
        expires_at: DateTime<Utc>,
    ) -> AppResult<()>;
}

/// Notifier that records notifications in the log stream
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn send_password_reset(
        &self,
        email: &str,
        token: &str,
        expires_at: DateTime<Utc>,
    ) -> AppResult<()> {
        info!(
            notification.kind = "password_reset",
            notification.email = %email,
            notification.token = %token,
            notification.expires_at = %expires_at.to_rfc3339(),
            "Password reset requested"
        );
        Ok(())
    }
}
