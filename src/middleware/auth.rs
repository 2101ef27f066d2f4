// ABOUTME: Bearer token authentication used by every protected route handler
// ABOUTME: Validates the JWT from the Authorization header and loads the owning user
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

use http::HeaderMap;
use ironlog_core::errors::{AppError, AppResult};
use ironlog_core::models::User;
use tracing::debug;
use uuid::Uuid;

use crate::auth::Claims;
use crate::resources::ServerResources;

/// Result of a successful authentication
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// The user the token belongs to
    pub user: User,
    /// Validated token claims
    pub claims: Claims,
}

impl AuthenticatedUser {
    /// Id of the authenticated user
    #[must_use]
    pub const fn user_id(&self) -> Uuid {
        self.user.id
    }
}

fn bearer_token(headers: &HeaderMap) -> AppResult<&str> {
    let value = headers
        .get(http::header::AUTHORIZATION)
        .ok_or_else(AppError::auth_required)?
        .to_str()
        .map_err(|_| AppError::auth_malformed("Authorization header is not valid ASCII"))?;

    value
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| AppError::auth_malformed("Authorization header must use the Bearer scheme"))
}

/// Authenticate a request from its headers
///
/// # Errors
///
/// Returns an authentication error when the header is missing or the token
/// does not validate, and `ResourceNotFound` when the user was deleted after
/// the token was issued
pub async fn authenticate_request(
    headers: &HeaderMap,
    resources: &ServerResources,
) -> AppResult<AuthenticatedUser> {
    let token = bearer_token(headers)?;
    let claims = resources.auth_manager.validate_token(token)?;
    let user_id = claims.user_id()?;

    let user = resources
        .database
        .get_user(user_id)
        .await?
        .ok_or_else(|| AppError::not_found("User"))?;

    debug!(user_id = %user.id, "Authenticated request");
    Ok(AuthenticatedUser { user, claims })
}
