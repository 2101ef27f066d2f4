// ABOUTME: Progress query orchestration for single exercises and whole workouts
// ABOUTME: Looks up owned entities, fetches ranged logs and delegates to the aggregator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

use ironlog_core::errors::{AppError, AppResult, ErrorCode};
use ironlog_core::models::WeightUnit;
use ironlog_intelligence::{
    DateRange, ExerciseProgress, ExerciseSeries, ProgressAggregator, ProgressOptions,
};
use tracing::debug;
use uuid::Uuid;

use crate::database::ExerciseLogSource;

/// Fully resolved progress request
#[derive(Debug, Clone, Copy)]
pub struct ProgressQuery {
    /// Unit all weights are reported in
    pub target_unit: WeightUnit,
    /// Inclusive date range
    pub range: DateRange,
    /// Statistics to compute
    pub options: ProgressOptions,
}

impl ProgressQuery {
    fn aggregator(&self) -> ProgressAggregator {
        ProgressAggregator::new(self.target_unit, self.options)
    }
}

/// Progress for one exercise.
///
/// # Errors
///
/// Returns `ResourceNotFound` when the exercise is not visible to the scoped
/// user or has no logs in range, and propagates data source errors
pub async fn exercise_progress<S>(
    source: &S,
    exercise_id: Uuid,
    query: &ProgressQuery,
) -> AppResult<ExerciseProgress>
where
    S: ExerciseLogSource + ?Sized,
{
    let exercise = source
        .exercise(exercise_id)
        .await?
        .ok_or_else(|| AppError::not_found("Exercise"))?;

    let logs = source.logs_in_range(exercise.id, query.range).await?;
    if logs.is_empty() {
        return Err(AppError::new(
            ErrorCode::ResourceNotFound,
            "No logs found for this exercise in the specified date range",
        ));
    }

    Ok(query.aggregator().aggregate(exercise.id, &exercise.name, &logs))
}

/// Progress for every exercise of a workout that has logs in range.
///
/// # Errors
///
/// Returns `ResourceNotFound` when the workout is not visible, has no
/// exercises, or none of its exercises has logs in range
pub async fn workout_progress<S>(
    source: &S,
    workout_id: Uuid,
    query: &ProgressQuery,
) -> AppResult<Vec<ExerciseProgress>>
where
    S: ExerciseLogSource + ?Sized,
{
    let workout = source
        .workout(workout_id)
        .await?
        .ok_or_else(|| AppError::not_found("Workout"))?;

    let exercises = source.exercises_in_workout(workout.id).await?;
    if exercises.is_empty() {
        return Err(AppError::new(
            ErrorCode::ResourceNotFound,
            "No exercises found for this workout",
        ));
    }

    let mut series = Vec::with_capacity(exercises.len());
    for exercise in exercises {
        let logs = source.logs_in_range(exercise.id, query.range).await?;
        series.push(ExerciseSeries {
            exercise_id: exercise.id,
            exercise_name: exercise.name,
            logs,
        });
    }

    let progress = query.aggregator().aggregate_workout(series);
    debug!(
        workout_id = %workout.id,
        exercises_with_logs = progress.len(),
        "Aggregated workout progress"
    );

    if progress.is_empty() {
        return Err(AppError::new(
            ErrorCode::ResourceNotFound,
            "No progress data found for any exercise in this workout",
        ));
    }

    Ok(progress)
}
