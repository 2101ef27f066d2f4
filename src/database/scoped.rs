// ABOUTME: User-scoped read access to exercises, workouts and logs for progress queries
// ABOUTME: The only data source handed to the progress service, so ownership is checked once here
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

use async_trait::async_trait;
use ironlog_core::errors::AppResult;
use ironlog_core::models::{Exercise, Workout};
use ironlog_intelligence::{DateRange, RawLogEntry};
use uuid::Uuid;

use super::Database;

/// Read-only view of one user's training data
///
/// Implementations must never return rows owned by anyone else: a foreign
/// exercise or workout looks exactly like a missing one.
#[async_trait]
pub trait ExerciseLogSource: Send + Sync {
    /// Exercise visible to the scoped user
    async fn exercise(&self, exercise_id: Uuid) -> AppResult<Option<Exercise>>;

    /// Workout visible to the scoped user
    async fn workout(&self, workout_id: Uuid) -> AppResult<Option<Workout>>;

    /// Exercises of a workout visible to the scoped user
    async fn exercises_in_workout(&self, workout_id: Uuid) -> AppResult<Vec<Exercise>>;

    /// Logs of an exercise inside `range`, oldest first
    async fn logs_in_range(&self, exercise_id: Uuid, range: DateRange)
        -> AppResult<Vec<RawLogEntry>>;
}

/// [`ExerciseLogSource`] backed by the database and bound to one user
#[derive(Clone)]
pub struct ScopedLogRepository {
    database: Database,
    user_id: Uuid,
}

impl ScopedLogRepository {
    /// Bind `database` to `user_id`
    #[must_use]
    pub const fn new(database: Database, user_id: Uuid) -> Self {
        Self { database, user_id }
    }

    /// The user this repository can see
    #[must_use]
    pub const fn user_id(&self) -> Uuid {
        self.user_id
    }
}

#[async_trait]
impl ExerciseLogSource for ScopedLogRepository {
    async fn exercise(&self, exercise_id: Uuid) -> AppResult<Option<Exercise>> {
        self.database.get_exercise(exercise_id, self.user_id).await
    }

    async fn workout(&self, workout_id: Uuid) -> AppResult<Option<Workout>> {
        self.database.get_workout(workout_id, self.user_id).await
    }

    async fn exercises_in_workout(&self, workout_id: Uuid) -> AppResult<Vec<Exercise>> {
        self.database
            .list_exercises_for_workout(workout_id, self.user_id)
            .await
    }

    async fn logs_in_range(
        &self,
        exercise_id: Uuid,
        range: DateRange,
    ) -> AppResult<Vec<RawLogEntry>> {
        let logs = self
            .database
            .exercise_logs_in_range(exercise_id, self.user_id, range)
            .await?;
        Ok(logs.iter().map(RawLogEntry::from).collect())
    }
}
