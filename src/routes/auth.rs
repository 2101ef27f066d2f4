// ABOUTME: Authentication route handlers for registration, login and password reset
// ABOUTME: Issues JWT access tokens and hands reset tokens to the configured notifier
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

//! Authentication routes
//!
//! Register and login return an access token together with the user.
//! Forgot-password answers identically whether or not the account exists.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use chrono::{Duration, Utc};
use ironlog_core::errors::{AppError, AppResult};
use ironlog_core::models::{User, WeightUnit};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::auth::{generate_reset_token, AccessToken};
use crate::logging::AppLogger;
use crate::middleware::authenticate_request;
use crate::resources::ServerResources;
use crate::routes::MessageResponse;
use crate::utils::validation::{validate_email, validate_password};

const FORGOT_PASSWORD_MESSAGE: &str =
    "If an account exists for this email, a password reset link has been sent";

/// User registration request
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    /// Login email
    pub email: String,
    /// Plain text password, hashed before storage
    pub password: String,
    /// `kg` or `lbs`, defaults to `kg`
    pub preferred_weight_unit: Option<String>,
}

/// Login request
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    /// Login email
    pub email: String,
    /// Plain text password
    pub password: String,
}

/// Forgot-password request
#[derive(Debug, Clone, Deserialize)]
pub struct ForgotPasswordRequest {
    /// Account email
    pub email: String,
}

/// Reset-password request
#[derive(Debug, Clone, Deserialize)]
pub struct ResetPasswordRequest {
    /// Token delivered by the notifier
    pub token: String,
    /// Replacement password
    pub new_password: String,
}

/// Token plus the user it was issued for
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    /// Issued token
    #[serde(flatten)]
    pub token: AccessToken,
    /// Authenticated user
    pub user: User,
}

/// Authentication routes
pub struct AuthRoutes;

impl AuthRoutes {
    /// Create all authentication routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/auth/register", post(Self::handle_register))
            .route("/auth/login", post(Self::handle_login))
            .route("/auth/test-token", post(Self::handle_test_token))
            .route("/auth/forgot-password", post(Self::handle_forgot_password))
            .route("/auth/reset-password", post(Self::handle_reset_password))
            .with_state(resources)
    }

    fn issue(resources: &ServerResources, user: User) -> AppResult<AuthResponse> {
        let token = resources.auth_manager.generate_token(&user)?;
        Ok(AuthResponse { token, user })
    }

    /// Handle POST /auth/register
    async fn handle_register(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<RegisterRequest>,
    ) -> Result<Response, AppError> {
        let email = validate_email(&request.email)?;
        validate_password(&request.password)?;
        let unit = request
            .preferred_weight_unit
            .as_deref()
            .map(str::parse::<WeightUnit>)
            .transpose()?
            .unwrap_or_default();

        if resources.database.get_user_by_email(&email).await?.is_some() {
            return Err(AppError::already_exists("Email already registered"));
        }

        let password_hash = resources.auth_manager.hash_password(request.password).await?;
        let user = User::new(email, password_hash, unit);
        resources.database.create_user(&user).await?;

        AppLogger::log_auth_event(&user.id.to_string(), "register", true, None);
        let response = Self::issue(&resources, user)?;
        Ok((StatusCode::CREATED, Json(response)).into_response())
    }

    /// Handle POST /auth/login
    async fn handle_login(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<LoginRequest>,
    ) -> Result<Response, AppError> {
        let email = request.email.trim().to_lowercase();
        let Some(user) = resources.database.get_user_by_email(&email).await? else {
            AppLogger::log_auth_event("unknown", "login", false, Some("unknown email"));
            return Err(AppError::auth_invalid("Incorrect email or password"));
        };

        let valid = resources
            .auth_manager
            .verify_password(request.password, user.password_hash.clone())
            .await?;
        if !valid {
            AppLogger::log_auth_event(&user.id.to_string(), "login", false, Some("bad password"));
            return Err(AppError::auth_invalid("Incorrect email or password"));
        }

        AppLogger::log_auth_event(&user.id.to_string(), "login", true, None);
        let response = Self::issue(&resources, user)?;
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle POST /auth/test-token
    async fn handle_test_token(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let auth = authenticate_request(&headers, &resources).await?;
        let body = serde_json::json!({
            "user_id": auth.user_id(),
            "email": auth.user.email,
            "expires_at": auth.claims.exp,
        });
        Ok((StatusCode::OK, Json(body)).into_response())
    }

    /// Handle POST /auth/forgot-password
    async fn handle_forgot_password(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<ForgotPasswordRequest>,
    ) -> Result<Response, AppError> {
        let email = request.email.trim().to_lowercase();

        if let Some(user) = resources.database.get_user_by_email(&email).await? {
            let token = generate_reset_token();
            let expires_at =
                Utc::now() + Duration::minutes(resources.config.auth.reset_token_expiry_minutes);
            resources
                .database
                .set_reset_token(user.id, &token, expires_at)
                .await?;

            if let Err(e) = resources
                .notifier
                .send_password_reset(&user.email, &token, expires_at)
                .await
            {
                warn!(user_id = %user.id, error = %e, "Failed to deliver password reset");
            }
            info!(user_id = %user.id, "Password reset token issued");
        }

        Ok((StatusCode::OK, Json(MessageResponse::new(FORGOT_PASSWORD_MESSAGE))).into_response())
    }

    /// Handle POST /auth/reset-password
    async fn handle_reset_password(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<ResetPasswordRequest>,
    ) -> Result<Response, AppError> {
        validate_password(&request.new_password)?;

        let user = resources
            .database
            .get_user_by_reset_token(&request.token)
            .await?
            .filter(|user| user.reset_token_valid(&request.token, Utc::now()))
            .ok_or_else(|| AppError::invalid_input("Invalid or expired token"))?;

        let password_hash = resources
            .auth_manager
            .hash_password(request.new_password)
            .await?;
        resources
            .database
            .reset_password(user.id, &password_hash)
            .await?;

        AppLogger::log_auth_event(&user.id.to_string(), "password_reset", true, None);
        Ok((
            StatusCode::OK,
            Json(MessageResponse::new("Password has been reset successfully")),
        )
            .into_response())
    }
}
