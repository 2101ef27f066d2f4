// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses ports, database URL, JWT, CORS and rate limit settings from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

//! Environment-based configuration management

use std::env;
use std::fmt;
use std::str::FromStr;

use anyhow::{Context, Result};
use ironlog_core::constants::limits;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Default HTTP listen port
pub const DEFAULT_HTTP_PORT: u16 = 8081;

/// Default `SQLite` database location
pub const DEFAULT_DATABASE_URL: &str = "sqlite:./ironlog.db";

/// Default route prefix for the JSON API
pub const DEFAULT_API_PREFIX: &str = "/api/v1";

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback to development
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Database settings
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// `sqlx` connection URL
    pub url: String,
}

/// Token settings
#[derive(Clone)]
pub struct AuthConfig {
    /// HS256 signing secret
    pub jwt_secret: String,
    /// Access token lifetime in hours
    pub jwt_expiry_hours: i64,
    /// Password reset token lifetime in minutes
    pub reset_token_expiry_minutes: i64,
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"[REDACTED]")
            .field("jwt_expiry_hours", &self.jwt_expiry_hours)
            .field("reset_token_expiry_minutes", &self.reset_token_expiry_minutes)
            .finish()
    }
}

/// CORS settings
#[derive(Debug, Clone)]
pub struct CorsConfig {
    /// Comma-separated origins or `*`
    pub allowed_origins: String,
}

/// Rate limiting settings
#[derive(Debug, Clone, Copy)]
pub struct RateLimitConfig {
    /// Requests allowed per client per minute, `0` disables limiting
    pub requests_per_minute: u32,
    /// Key clients on `x-forwarded-for`; only safe behind a proxy that overwrites it
    pub trust_forwarded_for: bool,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// Route prefix for the JSON API
    pub api_prefix: String,
    /// Database settings
    pub database: DatabaseConfig,
    /// Token settings
    pub auth: AuthConfig,
    /// CORS settings
    pub cors: CorsConfig,
    /// Rate limiting settings
    pub rate_limit: RateLimitConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable cannot be parsed or if
    /// `JWT_SECRET` is missing in production
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let environment =
            Environment::from_str_or_default(&env_var_or("ENVIRONMENT", "development"));

        let config = Self {
            http_port: parse_env("HTTP_PORT", DEFAULT_HTTP_PORT)?,
            environment,
            api_prefix: env_var_or("API_PREFIX", DEFAULT_API_PREFIX),
            database: DatabaseConfig {
                url: env_var_or("DATABASE_URL", DEFAULT_DATABASE_URL),
            },
            auth: AuthConfig {
                jwt_secret: load_jwt_secret(environment)?,
                jwt_expiry_hours: parse_env("JWT_EXPIRY_HOURS", limits::DEFAULT_JWT_EXPIRY_HOURS)?,
                reset_token_expiry_minutes: parse_env(
                    "RESET_TOKEN_EXPIRY_MINUTES",
                    limits::DEFAULT_RESET_TOKEN_EXPIRY_MINUTES,
                )?,
            },
            cors: CorsConfig {
                allowed_origins: env_var_or("CORS_ALLOWED_ORIGINS", "*"),
            },
            rate_limit: RateLimitConfig {
                requests_per_minute: parse_env(
                    "RATE_LIMIT_PER_MINUTE",
                    limits::DEFAULT_RATE_LIMIT_PER_MINUTE,
                )?,
                trust_forwarded_for: parse_env("RATE_LIMIT_TRUST_PROXY", false)?,
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate cross-field constraints
    ///
    /// # Errors
    ///
    /// Returns an error when a lifetime is not positive or the prefix is malformed
    pub fn validate(&self) -> Result<()> {
        if self.auth.jwt_expiry_hours <= 0 {
            return Err(anyhow::anyhow!("JWT_EXPIRY_HOURS must be positive"));
        }
        if self.auth.reset_token_expiry_minutes <= 0 {
            return Err(anyhow::anyhow!("RESET_TOKEN_EXPIRY_MINUTES must be positive"));
        }
        if !self.api_prefix.starts_with('/')
            || self.api_prefix.ends_with('/')
            || self.api_prefix.len() < 2
        {
            return Err(anyhow::anyhow!(
                "API_PREFIX must start with '/', must not end with '/' and must not be the root"
            ));
        }
        Ok(())
    }

    /// Human-readable summary for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "IronLog server: environment={}, http_port={}, database={}, api_prefix={}, \
             jwt_expiry_hours={}, cors_origins={}, rate_limit_per_minute={}, trust_proxy={}",
            self.environment,
            self.http_port,
            self.database.url,
            self.api_prefix,
            self.auth.jwt_expiry_hours,
            self.cors.allowed_origins,
            self.rate_limit.requests_per_minute,
            self.rate_limit.trust_forwarded_for,
        )
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .with_context(|| format!("Invalid {key} value: {value}")),
        Err(_) => Ok(default),
    }
}

fn load_jwt_secret(environment: Environment) -> Result<String> {
    match env::var("JWT_SECRET") {
        Ok(secret) if !secret.trim().is_empty() => Ok(secret),
        _ if environment.is_production() => Err(anyhow::anyhow!(
            "JWT_SECRET must be set when ENVIRONMENT=production"
        )),
        _ => {
            warn!("JWT_SECRET not set, generating an ephemeral secret; tokens will not survive restarts");
            Ok(generate_jwt_secret())
        }
    }
}

/// Random 64-byte secret, hex encoded
#[must_use]
pub fn generate_jwt_secret() -> String {
    let mut bytes = [0_u8; 64];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}
