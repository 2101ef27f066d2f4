// ABOUTME: User account database operations
// ABOUTME: Registration, lookup by id/email/reset token, profile updates and reset token state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

use chrono::{DateTime, Utc};
use ironlog_core::errors::AppResult;
use ironlog_core::models::User;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use uuid::Uuid;

use super::{get_uuid, get_weight_unit, Database};

const USER_COLUMNS: &str = "id, email, password_hash, preferred_weight_unit, reset_token, \
                            reset_token_expires_at, created_at, updated_at";

impl Database {
    pub(super) async fn migrate_users(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                email TEXT UNIQUE NOT NULL,
                password_hash TEXT NOT NULL,
                preferred_weight_unit TEXT NOT NULL DEFAULT 'kg' CHECK (preferred_weight_unit IN ('kg', 'lbs')),
                reset_token TEXT,
                reset_token_expires_at TEXT,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_users_reset_token ON users(reset_token)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Insert a new user
    ///
    /// # Errors
    ///
    /// Returns `ResourceAlreadyExists` if the email is taken, or a database error
    pub async fn create_user(&self, user: &User) -> AppResult<()> {
        sqlx::query(
            r"
            INSERT INTO users (id, email, password_hash, preferred_weight_unit,
                               reset_token, reset_token_expires_at, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ",
        )
        .bind(user.id.to_string())
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.preferred_weight_unit.as_str())
        .bind(&user.reset_token)
        .bind(user.reset_token_expires_at)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Get a user by id
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn get_user(&self, user_id: Uuid) -> AppResult<Option<User>> {
        self.get_user_impl("id", &user_id.to_string()).await
    }

    /// Get a user by email
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn get_user_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.get_user_impl("email", email).await
    }

    /// Get the user holding an outstanding reset token
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn get_user_by_reset_token(&self, token: &str) -> AppResult<Option<User>> {
        self.get_user_impl("reset_token", token).await
    }

    async fn get_user_impl(&self, field: &str, value: &str) -> AppResult<Option<User>> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE {field} = $1");

        let row = sqlx::query(&query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    /// Persist email, preferred unit and password hash of an existing user
    ///
    /// # Errors
    ///
    /// Returns `ResourceAlreadyExists` if the new email is taken, or a database error
    pub async fn update_user(&self, user: &User) -> AppResult<bool> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET email = $2, password_hash = $3, preferred_weight_unit = $4, updated_at = $5
            WHERE id = $1
            ",
        )
        .bind(user.id.to_string())
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.preferred_weight_unit.as_str())
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Store a password reset token for a user
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails
    pub async fn set_reset_token(
        &self,
        user_id: Uuid,
        token: &str,
        expires_at: DateTime<Utc>,
    ) -> AppResult<()> {
        sqlx::query(
            "UPDATE users SET reset_token = $2, reset_token_expires_at = $3, updated_at = $4 WHERE id = $1",
        )
        .bind(user_id.to_string())
        .bind(token)
        .bind(expires_at)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Replace the password hash and clear the reset token in one statement
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails
    pub async fn reset_password(&self, user_id: Uuid, password_hash: &str) -> AppResult<()> {
        sqlx::query(
            r"
            UPDATE users
            SET password_hash = $2, reset_token = NULL, reset_token_expires_at = NULL, updated_at = $3
            WHERE id = $1
            ",
        )
        .bind(user_id.to_string())
        .bind(password_hash)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Delete a user together with all owned data
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails
    pub async fn delete_user(&self, user_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    fn row_to_user(row: &SqliteRow) -> AppResult<User> {
        Ok(User {
            id: get_uuid(row, "id")?,
            email: row.try_get("email")?,
            password_hash: row.try_get("password_hash")?,
            preferred_weight_unit: get_weight_unit(row, "preferred_weight_unit")?,
            reset_token: row.try_get("reset_token")?,
            reset_token_expires_at: row.try_get("reset_token_expires_at")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}
