// ABOUTME: Main library entry point for the IronLog workout tracking server
// ABOUTME: Wires persistence, authentication, HTTP routes and progress analytics together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

#![deny(unsafe_code)]

//! # IronLog Server
//!
//! A JSON API for logging strength training and reading back progress.
//! Users own workouts, workouts own exercises, and exercises collect dated
//! logs of weight, reps and sets. The progress endpoints turn those logs into
//! chart series, personal bests, a least-squares trend and weekly deltas,
//! normalized to the unit the caller asks for.
//!
//! ## Architecture
//!
//! - **`ironlog-core`**: models, error types and constants shared by all crates
//! - **`ironlog-intelligence`**: unit conversion, date ranges and the aggregator
//! - **`database`**: `SQLite` persistence through `sqlx`, plus the user-scoped
//!   log source the progress service reads from
//! - **`routes`**: thin axum handlers, one module per resource
//! - **`server`**: router assembly and middleware stack
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use ironlog_server::config::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("IronLog configured on port {}", config.http_port);
//!     Ok(())
//! }
//! ```

/// JWT issuing, validation and password hashing
pub mod auth;

/// Environment-driven configuration
pub mod config;

/// `SQLite` persistence
pub mod database;

/// Error types re-exported from `ironlog-core`
pub mod errors;

/// Liveness and readiness reporting
pub mod health;

/// Structured logging setup
pub mod logging;

/// HTTP middleware
pub mod middleware;

/// Account notifications
pub mod notifications;

/// Shared server resources
pub mod resources;

/// HTTP route handlers
pub mod routes;

/// Router assembly and serve loop
pub mod server;

/// Business services used by the routes
pub mod services;

/// Small helpers for ids, slugs and validation
pub mod utils;
