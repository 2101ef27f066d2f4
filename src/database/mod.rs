// ABOUTME: SQLite persistence for users, workouts, exercises and exercise logs
// ABOUTME: Creates the schema on startup and exposes owner-scoped async queries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

//! # Database Management
//!
//! Every query that touches workouts, exercises or logs filters on the
//! owning `user_id`, so a row belonging to another user is indistinguishable
//! from a missing one.

mod exercise_logs;
mod exercises;
mod scoped;
mod users;
mod workouts;

pub use scoped::{ExerciseLogSource, ScopedLogRepository};

use std::str::FromStr;

use ironlog_core::errors::{AppError, AppResult};
use ironlog_core::models::WeightUnit;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Pool, Row, Sqlite};
use tracing::info;
use uuid::Uuid;

/// Database manager for all persisted entities
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Connect to `database_url` and create missing tables
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid, the connection fails or the
    /// schema cannot be created
    pub async fn new(database_url: &str) -> AppResult<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true);

        // Every connection to an in-memory database is a separate database
        let max_connections = if database_url.contains(":memory:") {
            1
        } else {
            5
        };

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        let db = Self { pool };
        db.migrate().await?;
        info!(max_connections, "Database ready");

        Ok(db)
    }

    /// Get a reference to the database pool
    #[must_use]
    pub const fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Create all tables and indexes
    ///
    /// # Errors
    ///
    /// Returns an error if a schema statement fails
    pub async fn migrate(&self) -> AppResult<()> {
        self.migrate_users().await?;
        self.migrate_workouts().await?;
        self.migrate_exercises().await?;
        self.migrate_exercise_logs().await?;
        Ok(())
    }

    /// Cheap round trip used by the readiness probe
    ///
    /// # Errors
    ///
    /// Returns an error if the database is unreachable
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

fn get_uuid(row: &SqliteRow, column: &str) -> AppResult<Uuid> {
    let raw: String = row.try_get(column)?;
    Uuid::parse_str(&raw)
        .map_err(|e| AppError::database(format!("Invalid UUID in column {column}: {e}")))
}

fn get_weight_unit(row: &SqliteRow, column: &str) -> AppResult<WeightUnit> {
    let raw: String = row.try_get(column)?;
    raw.parse()
        .map_err(|e| AppError::database(format!("Invalid value in column {column}: {e}")))
}

fn get_count(row: &SqliteRow, column: &str) -> AppResult<Option<u32>> {
    let raw: Option<i64> = row.try_get(column)?;
    raw.map(|value| {
        u32::try_from(value)
            .map_err(|_| AppError::database(format!("Out of range value in column {column}")))
    })
    .transpose()
}
