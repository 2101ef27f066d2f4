// ABOUTME: Current-user profile routes
// ABOUTME: Read, update (email, preferred unit, password) and delete the authenticated account
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use ironlog_core::errors::AppError;
use ironlog_core::models::WeightUnit;
use serde::Deserialize;
use tracing::info;

use crate::middleware::authenticate_request;
use crate::resources::ServerResources;
use crate::utils::validation::{validate_email, validate_password};

/// Partial profile update; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUserRequest {
    /// New login email
    pub email: Option<String>,
    /// New preferred unit
    pub preferred_weight_unit: Option<String>,
    /// New password
    pub password: Option<String>,
}

/// User profile routes
pub struct UserRoutes;

impl UserRoutes {
    /// Create all user routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/users/me",
                get(Self::handle_get_me)
                    .put(Self::handle_update_me)
                    .delete(Self::handle_delete_me),
            )
            .with_state(resources)
    }

    async fn handle_get_me(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let auth = authenticate_request(&headers, &resources).await?;
        Ok((StatusCode::OK, Json(auth.user)).into_response())
    }

    async fn handle_update_me(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(request): Json<UpdateUserRequest>,
    ) -> Result<Response, AppError> {
        let mut user = authenticate_request(&headers, &resources).await?.user;

        if let Some(email) = request.email.as_deref() {
            let email = validate_email(email)?;
            if email != user.email
                && resources.database.get_user_by_email(&email).await?.is_some()
            {
                return Err(AppError::already_exists("Email already registered"));
            }
            user.email = email;
        }

        if let Some(unit) = request.preferred_weight_unit.as_deref() {
            user.preferred_weight_unit = unit.parse::<WeightUnit>()?;
        }

        if let Some(password) = request.password {
            validate_password(&password)?;
            user.password_hash = resources.auth_manager.hash_password(password).await?;
        }

        user.updated_at = Utc::now();
        if !resources.database.update_user(&user).await? {
            return Err(AppError::not_found("User"));
        }

        Ok((StatusCode::OK, Json(user)).into_response())
    }

    async fn handle_delete_me(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let auth = authenticate_request(&headers, &resources).await?;
        if !resources.database.delete_user(auth.user_id()).await? {
            return Err(AppError::not_found("User"));
        }

        info!(user_id = %auth.user_id(), "User account deleted");
        Ok(StatusCode::NO_CONTENT.into_response())
    }
}
