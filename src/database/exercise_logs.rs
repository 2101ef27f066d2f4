// ABOUTME: Exercise log database operations scoped to the owning user
// ABOUTME: CRUD for logged sets plus the date range query feeding progress analytics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

use chrono::Utc;
use ironlog_core::errors::AppResult;
use ironlog_core::models::ExerciseLog;
use ironlog_intelligence::DateRange;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use uuid::Uuid;

use super::{get_count, get_uuid, get_weight_unit, Database};

const LOG_COLUMNS: &str =
    "id, exercise_id, user_id, date, weight, weight_unit, reps, sets, created_at, updated_at";

impl Database {
    pub(super) async fn migrate_exercise_logs(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS exercise_logs (
                id TEXT PRIMARY KEY,
                exercise_id TEXT NOT NULL REFERENCES exercises(id) ON DELETE CASCADE,
                user_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
                date TEXT NOT NULL,
                weight REAL CHECK (weight IS NULL OR weight > 0),
                weight_unit TEXT NOT NULL CHECK (weight_unit IN ('kg', 'lbs')),
                reps INTEGER CHECK (reps IS NULL OR reps > 0),
                sets INTEGER CHECK (sets IS NULL OR sets > 0),
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_exercise_logs_exercise_date ON exercise_logs(exercise_id, date)",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_exercise_logs_user_id ON exercise_logs(user_id)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Insert a new log entry. The caller checks exercise ownership first.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails
    pub async fn create_exercise_log(&self, log: &ExerciseLog) -> AppResult<()> {
        sqlx::query(
            r"
            INSERT INTO exercise_logs (id, exercise_id, user_id, date, weight, weight_unit,
                                       reps, sets, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ",
        )
        .bind(log.id.to_string())
        .bind(log.exercise_id.to_string())
        .bind(log.user_id.to_string())
        .bind(log.date)
        .bind(log.weight)
        .bind(log.weight_unit.as_str())
        .bind(log.reps.map(i64::from))
        .bind(log.sets.map(i64::from))
        .bind(log.created_at)
        .bind(log.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// List every log of an exercise, most recent first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn list_exercise_logs(
        &self,
        exercise_id: Uuid,
        user_id: Uuid,
    ) -> AppResult<Vec<ExerciseLog>> {
        let query = format!(
            "SELECT {LOG_COLUMNS} FROM exercise_logs WHERE exercise_id = $1 AND user_id = $2 \
             ORDER BY date DESC, rowid DESC"
        );

        let rows = sqlx::query(&query)
            .bind(exercise_id.to_string())
            .bind(user_id.to_string())
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(Self::row_to_exercise_log).collect()
    }

    /// Logs of one exercise inside an inclusive date range, oldest first.
    /// Entries on the same date keep insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn exercise_logs_in_range(
        &self,
        exercise_id: Uuid,
        user_id: Uuid,
        range: DateRange,
    ) -> AppResult<Vec<ExerciseLog>> {
        let query = format!(
            "SELECT {LOG_COLUMNS} FROM exercise_logs \
             WHERE exercise_id = $1 AND user_id = $2 AND date >= $3 AND date <= $4 \
             ORDER BY date ASC, rowid ASC"
        );

        let rows = sqlx::query(&query)
            .bind(exercise_id.to_string())
            .bind(user_id.to_string())
            .bind(range.start)
            .bind(range.end)
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(Self::row_to_exercise_log).collect()
    }

    /// Get a log entry owned by `user_id`
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn get_exercise_log(
        &self,
        log_id: Uuid,
        user_id: Uuid,
    ) -> AppResult<Option<ExerciseLog>> {
        let query =
            format!("SELECT {LOG_COLUMNS} FROM exercise_logs WHERE id = $1 AND user_id = $2");

        let row = sqlx::query(&query)
            .bind(log_id.to_string())
            .bind(user_id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(Self::row_to_exercise_log).transpose()
    }

    /// Persist the editable fields of a log entry
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails
    pub async fn update_exercise_log(&self, log: &ExerciseLog) -> AppResult<bool> {
        let result = sqlx::query(
            r"
            UPDATE exercise_logs
            SET date = $3, weight = $4, weight_unit = $5, reps = $6, sets = $7, updated_at = $8
            WHERE id = $1 AND user_id = $2
            ",
        )
        .bind(log.id.to_string())
        .bind(log.user_id.to_string())
        .bind(log.date)
        .bind(log.weight)
        .bind(log.weight_unit.as_str())
        .bind(log.reps.map(i64::from))
        .bind(log.sets.map(i64::from))
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete a log entry
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails
    pub async fn delete_exercise_log(&self, log_id: Uuid, user_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM exercise_logs WHERE id = $1 AND user_id = $2")
            .bind(log_id.to_string())
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    fn row_to_exercise_log(row: &SqliteRow) -> AppResult<ExerciseLog> {
        Ok(ExerciseLog {
            id: get_uuid(row, "id")?,
            exercise_id: get_uuid(row, "exercise_id")?,
            user_id: get_uuid(row, "user_id")?,
            date: row.try_get("date")?,
            weight: row.try_get("weight")?,
            weight_unit: get_weight_unit(row, "weight_unit")?,
            reps: get_count(row, "reps")?,
            sets: get_count(row, "sets")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}
