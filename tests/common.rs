// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides in-memory database, resources, router and authenticated user helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `ironlog_server`

use std::sync::{Arc, Once};

use anyhow::Result;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use ironlog_core::models::{User, WeightUnit};
use ironlog_server::{
    auth::AuthManager,
    config::{AuthConfig, CorsConfig, DatabaseConfig, Environment, RateLimitConfig, ServerConfig},
    database::Database,
    resources::ServerResources,
    server::build_router,
};
use serde_json::Value;
use tower::ServiceExt;

static INIT_LOGGER: Once = Once::new();

/// Fixed signing secret so tokens can be minted outside the router
pub const TEST_JWT_SECRET: &str = "ironlog-test-secret-not-for-production-use";

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Standard test database setup
pub async fn create_test_database() -> Result<Database> {
    init_test_logging();
    Ok(Database::new("sqlite::memory:").await?)
}

/// Configuration for tests: no rate limiting, fixed secret
pub fn test_config() -> ServerConfig {
    ServerConfig {
        http_port: 0,
        environment: Environment::Testing,
        api_prefix: "/api/v1".into(),
        database: DatabaseConfig {
            url: "sqlite::memory:".into(),
        },
        auth: AuthConfig {
            jwt_secret: TEST_JWT_SECRET.into(),
            jwt_expiry_hours: 24,
            reset_token_expiry_minutes: 60,
        },
        cors: CorsConfig {
            allowed_origins: "*".into(),
        },
        rate_limit: RateLimitConfig {
            requests_per_minute: 0,
            trust_forwarded_for: false,
        },
    }
}

/// Create test authentication manager with the cheapest bcrypt cost
pub fn create_test_auth_manager() -> AuthManager {
    AuthManager::new(TEST_JWT_SECRET.as_bytes(), 24).with_bcrypt_cost(4)
}

/// Resources over a fresh in-memory database
pub async fn create_test_resources_with_config(config: ServerConfig) -> Result<Arc<ServerResources>> {
    let database = create_test_database().await?;
    Ok(Arc::new(ServerResources::new(
        database,
        create_test_auth_manager(),
        Arc::new(config),
    )))
}

/// Resources with the default test configuration
pub async fn create_test_resources() -> Result<Arc<ServerResources>> {
    create_test_resources_with_config(test_config()).await
}

/// Full router plus the resources behind it
pub async fn create_test_app() -> Result<(Router, Arc<ServerResources>)> {
    let resources = create_test_resources().await?;
    Ok((build_router(Arc::clone(&resources)), resources))
}

/// Insert a user directly and mint a token for it
pub async fn create_test_user(resources: &ServerResources, email: &str) -> Result<(User, String)> {
    create_test_user_with_unit(resources, email, WeightUnit::Kg).await
}

/// Insert a user with a preferred unit and mint a token for it
pub async fn create_test_user_with_unit(
    resources: &ServerResources,
    email: &str,
    unit: WeightUnit,
) -> Result<(User, String)> {
    let password_hash = resources
        .auth_manager
        .hash_password("Password123".into())
        .await?;
    let user = User::new(email.to_owned(), password_hash, unit);
    resources.database.create_user(&user).await?;
    let token = resources.auth_manager.generate_token(&user)?;
    Ok((user, token.access_token))
}

/// Send one request through the router and decode the JSON body (or `Null`)
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Result<(StatusCode, Value)> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&json)?))?,
        None => builder.body(Body::empty())?,
    };

    let response = app.clone().oneshot(request).await?;
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };
    Ok((status, value))
}

/// Create a workout through the API and return its id
pub async fn create_workout(app: &Router, token: &str, name: &str) -> Result<String> {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/v1/workouts",
        Some(token),
        Some(serde_json::json!({ "name": name })),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED, "create workout failed: {body}");
    Ok(body["id"].as_str().unwrap_or_default().to_owned())
}

/// Create an exercise through the API and return its id
pub async fn create_exercise(
    app: &Router,
    token: &str,
    workout_id: &str,
    name: &str,
) -> Result<String> {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/v1/exercises",
        Some(token),
        Some(serde_json::json!({ "name": name, "workout_id": workout_id })),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED, "create exercise failed: {body}");
    Ok(body["id"].as_str().unwrap_or_default().to_owned())
}

/// Record a log through the API
pub async fn create_log(app: &Router, token: &str, log: Value) -> Result<Value> {
    let (status, body) = send(app, Method::POST, "/api/v1/exercise-logs", Some(token), Some(log)).await?;
    assert_eq!(status, StatusCode::CREATED, "create log failed: {body}");
    Ok(body)
}
