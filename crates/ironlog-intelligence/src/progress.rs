// ABOUTME: Progress aggregation turning raw exercise logs into chart points and statistics
// ABOUTME: Computes personal best, least-squares trend and weekly progress in a target unit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

//! # Progress Aggregation
//!
//! [`ProgressAggregator`] is a pure function object: it owns only the target
//! unit and the feature toggles of a request, never any log data, so one
//! instance can be shared freely across concurrent handlers.
//!
//! Input logs must already be filtered to one user, one exercise and the
//! resolved date range. The aggregator performs no authorization checks.

use chrono::NaiveDate;
use ironlog_core::constants::units::DAYS_PER_WEEK;
use ironlog_core::models::{ExerciseLog, WeightUnit};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::statistics::least_squares_slope;
use crate::units::convert_weight;

/// One logged entry as seen by the aggregator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawLogEntry {
    /// Training date
    pub date: NaiveDate,
    /// Weight in `weight_unit`, absent for reps-only entries
    pub weight: Option<f64>,
    /// Unit the weight was recorded in
    pub weight_unit: WeightUnit,
    /// Repetitions per set
    pub reps: Option<u32>,
    /// Number of sets
    pub sets: Option<u32>,
}

impl From<&ExerciseLog> for RawLogEntry {
    fn from(log: &ExerciseLog) -> Self {
        Self {
            date: log.date,
            weight: log.weight,
            weight_unit: log.weight_unit,
            reps: log.reps,
            sets: log.sets,
        }
    }
}

/// Normalized point for charting, weight expressed in the target unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Training date
    pub date: NaiveDate,
    /// Converted weight, `null` when the entry had none
    pub weight: Option<f64>,
    /// Always the target unit of the request
    pub weight_unit: WeightUnit,
    /// Repetitions per set
    pub reps: Option<u32>,
    /// Number of sets
    pub sets: Option<u32>,
}

/// Change in weight between the first and last weighted points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeeklyProgressMetrics {
    /// Earliest weighted value
    pub start_weight: Option<f64>,
    /// Latest weighted value
    pub end_weight: Option<f64>,
    /// `(end - start) / (number_of_weeks - 1)`
    pub average_change_per_week: Option<f64>,
    /// Calendar week buckets touched by the series
    pub number_of_weeks: u32,
    /// Unit of the weight fields
    pub weight_unit: Option<WeightUnit>,
}

impl WeeklyProgressMetrics {
    const fn degenerate(number_of_weeks: u32, unit: WeightUnit) -> Self {
        Self {
            start_weight: None,
            end_weight: None,
            average_change_per_week: None,
            number_of_weeks,
            weight_unit: Some(unit),
        }
    }
}

/// Progress summary for one exercise in one date range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseProgress {
    /// Exercise identifier
    pub exercise_id: Uuid,
    /// Exercise display name
    pub exercise_name: String,
    /// Points in ascending date order
    pub data_points: Vec<ChartPoint>,
    /// Heaviest converted weight in the range
    pub personal_best: Option<f64>,
    /// Earliest date the personal best was reached
    pub personal_best_date: Option<NaiveDate>,
    /// Least-squares slope in target units per day
    pub trend: Option<f64>,
    /// Weekly progress metrics when requested
    pub weekly_progress: Option<WeeklyProgressMetrics>,
    /// Unit every weight above is expressed in
    pub target_unit: WeightUnit,
}

impl ExerciseProgress {
    /// True when no logs fell into the range
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data_points.is_empty()
    }
}

/// Optional statistics to compute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressOptions {
    /// Compute the least-squares trend
    pub include_trend: bool,
    /// Compute the personal best
    pub include_personal_best: bool,
    /// Compute weekly progress metrics
    pub include_weekly_progress: bool,
}

impl Default for ProgressOptions {
    fn default() -> Self {
        Self {
            include_trend: true,
            include_personal_best: true,
            include_weekly_progress: true,
        }
    }
}

/// Logs of one exercise, ready for workout-level aggregation
#[derive(Debug, Clone)]
pub struct ExerciseSeries {
    /// Exercise identifier
    pub exercise_id: Uuid,
    /// Exercise display name
    pub exercise_name: String,
    /// Logs already scoped to the caller and date range
    pub logs: Vec<RawLogEntry>,
}

/// Turns raw logs into [`ExerciseProgress`]
#[derive(Debug, Clone, Copy)]
pub struct ProgressAggregator {
    target_unit: WeightUnit,
    options: ProgressOptions,
}

impl ProgressAggregator {
    /// Create an aggregator normalizing to `target_unit`
    #[must_use]
    pub const fn new(target_unit: WeightUnit, options: ProgressOptions) -> Self {
        Self {
            target_unit,
            options,
        }
    }

    /// Unit all output weights are expressed in
    #[must_use]
    pub const fn target_unit(&self) -> WeightUnit {
        self.target_unit
    }

    /// Aggregate the logs of a single exercise.
    ///
    /// Never fails: an empty slice yields an empty point list with every
    /// optional statistic absent (weekly progress is still reported, with
    /// zero weeks, when requested).
    #[must_use]
    pub fn aggregate(
        &self,
        exercise_id: Uuid,
        exercise_name: &str,
        logs: &[RawLogEntry],
    ) -> ExerciseProgress {
        let data_points = self.chart_points(logs);
        let weighted: Vec<(NaiveDate, f64)> = data_points
            .iter()
            .filter_map(|point| point.weight.map(|weight| (point.date, weight)))
            .collect();

        let (personal_best, personal_best_date) = if self.options.include_personal_best {
            personal_best(&weighted).map_or((None, None), |(date, weight)| {
                (Some(weight), Some(date))
            })
        } else {
            (None, None)
        };

        let trend = if self.options.include_trend {
            trend_per_day(&weighted)
        } else {
            None
        };

        let weekly_progress = self
            .options
            .include_weekly_progress
            .then(|| weekly_progress(&weighted, self.target_unit));

        debug!(
            exercise_id = %exercise_id,
            points = data_points.len(),
            weighted_points = weighted.len(),
            target_unit = %self.target_unit,
            "Aggregated exercise progress"
        );

        ExerciseProgress {
            exercise_id,
            exercise_name: exercise_name.to_owned(),
            data_points,
            personal_best,
            personal_best_date,
            trend,
            weekly_progress,
            target_unit: self.target_unit,
        }
    }

    /// Aggregate every exercise of a workout independently.
    ///
    /// Exercises without logs in range are skipped; the result is empty when
    /// all of them are, which callers may report as not found.
    pub fn aggregate_workout<I>(&self, exercises: I) -> Vec<ExerciseProgress>
    where
        I: IntoIterator<Item = ExerciseSeries>,
    {
        exercises
            .into_iter()
            .map(|series| self.aggregate(series.exercise_id, &series.exercise_name, &series.logs))
            .filter(|progress| {
                if progress.is_empty() {
                    debug!(
                        exercise_id = %progress.exercise_id,
                        "Skipping exercise without logs in range"
                    );
                    return false;
                }
                true
            })
            .collect()
    }

    fn chart_points(&self, logs: &[RawLogEntry]) -> Vec<ChartPoint> {
        let mut points: Vec<ChartPoint> = logs
            .iter()
            .map(|log| ChartPoint {
                date: log.date,
                weight: log
                    .weight
                    .map(|weight| convert_weight(weight, log.weight_unit, self.target_unit)),
                weight_unit: self.target_unit,
                reps: log.reps,
                sets: log.sets,
            })
            .collect();
        // stable: same-day entries keep their input order
        points.sort_by_key(|point| point.date);
        points
    }
}

/// First occurrence of the maximum weight in date order
fn personal_best(weighted: &[(NaiveDate, f64)]) -> Option<(NaiveDate, f64)> {
    weighted.iter().fold(None, |best, &(date, weight)| match best {
        Some((_, best_weight)) if weight <= best_weight => best,
        _ => Some((date, weight)),
    })
}

/// Slope of weight against days since the first weighted point
fn trend_per_day(weighted: &[(NaiveDate, f64)]) -> Option<f64> {
    let origin = weighted.first()?.0;
    let points: Vec<(f64, f64)> = weighted
        .iter()
        .map(|&(date, weight)| ((date - origin).num_days() as f64, weight))
        .collect();
    least_squares_slope(&points)
}

fn weekly_progress(weighted: &[(NaiveDate, f64)], unit: WeightUnit) -> WeeklyProgressMetrics {
    let (first, last) = match weighted {
        [] => return WeeklyProgressMetrics::degenerate(0, unit),
        [_] => return WeeklyProgressMetrics::degenerate(1, unit),
        [first, .., last] => (*first, *last),
    };

    let days = (last.0 - first.0).num_days();
    let number_of_weeks = u32::try_from(days / DAYS_PER_WEEK + 1).unwrap_or(u32::MAX);
    let elapsed_weeks = number_of_weeks.saturating_sub(1);
    let average_change_per_week = if elapsed_weeks > 0 {
        (last.1 - first.1) / f64::from(elapsed_weeks)
    } else {
        0.0
    };

    WeeklyProgressMetrics {
        start_weight: Some(first.1),
        end_weight: Some(last.1),
        average_change_per_week: Some(average_change_per_week),
        number_of_weeks,
        weight_unit: Some(unit),
    }
}
