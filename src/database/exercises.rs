// ABOUTME: Exercise database operations scoped to the owning user
// ABOUTME: Exercises live inside a workout; deleting one removes its logs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

use chrono::Utc;
use ironlog_core::errors::AppResult;
use ironlog_core::models::Exercise;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use uuid::Uuid;

use super::{get_uuid, Database};

const EXERCISE_COLUMNS: &str = "id, name, slug, workout_id, user_id, created_at, updated_at";

impl Database {
    pub(super) async fn migrate_exercises(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS exercises (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                slug TEXT NOT NULL,
                workout_id TEXT NOT NULL REFERENCES workouts(id) ON DELETE CASCADE,
                user_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_exercises_workout_id ON exercises(workout_id)")
            .execute(&self.pool)
            .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_exercises_user_id ON exercises(user_id)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Insert a new exercise. The caller checks workout ownership first.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails
    pub async fn create_exercise(&self, exercise: &Exercise) -> AppResult<()> {
        sqlx::query(
            r"
            INSERT INTO exercises (id, name, slug, workout_id, user_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(exercise.id.to_string())
        .bind(&exercise.name)
        .bind(&exercise.slug)
        .bind(exercise.workout_id.to_string())
        .bind(exercise.user_id.to_string())
        .bind(exercise.created_at)
        .bind(exercise.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// List the exercises of a workout owned by `user_id`, in creation order
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn list_exercises_for_workout(
        &self,
        workout_id: Uuid,
        user_id: Uuid,
    ) -> AppResult<Vec<Exercise>> {
        let query = format!(
            "SELECT {EXERCISE_COLUMNS} FROM exercises WHERE workout_id = $1 AND user_id = $2 \
             ORDER BY created_at ASC, rowid ASC"
        );

        let rows = sqlx::query(&query)
            .bind(workout_id.to_string())
            .bind(user_id.to_string())
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(Self::row_to_exercise).collect()
    }

    /// Get an exercise owned by `user_id`
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn get_exercise(
        &self,
        exercise_id: Uuid,
        user_id: Uuid,
    ) -> AppResult<Option<Exercise>> {
        let query =
            format!("SELECT {EXERCISE_COLUMNS} FROM exercises WHERE id = $1 AND user_id = $2");

        let row = sqlx::query(&query)
            .bind(exercise_id.to_string())
            .bind(user_id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(Self::row_to_exercise).transpose()
    }

    /// Persist an exercise's name and slug
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails
    pub async fn update_exercise(&self, exercise: &Exercise) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE exercises SET name = $3, slug = $4, updated_at = $5 WHERE id = $1 AND user_id = $2",
        )
        .bind(exercise.id.to_string())
        .bind(exercise.user_id.to_string())
        .bind(&exercise.name)
        .bind(&exercise.slug)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete an exercise and its logs
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails
    pub async fn delete_exercise(&self, exercise_id: Uuid, user_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM exercises WHERE id = $1 AND user_id = $2")
            .bind(exercise_id.to_string())
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    fn row_to_exercise(row: &SqliteRow) -> AppResult<Exercise> {
        Ok(Exercise {
            id: get_uuid(row, "id")?,
            name: row.try_get("name")?,
            slug: row.try_get("slug")?,
            workout_id: get_uuid(row, "workout_id")?,
            user_id: get_uuid(row, "user_id")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}
