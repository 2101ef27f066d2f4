// ABOUTME: Progress analytics engine for logged strength training sets
// ABOUTME: Normalizes units, resolves date ranges and derives trend, personal best and weekly deltas
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

#![deny(unsafe_code)]

//! # IronLog Intelligence
//!
//! Pure, synchronous analytics over snapshots of exercise logs. Nothing in
//! this crate performs I/O or holds shared state: callers fetch the logs a
//! user is allowed to see, hand them to [`ProgressAggregator`], and serialize
//! the returned [`ExerciseProgress`].
//!
//! ## Pipeline
//!
//! 1. [`resolve_date_range`] turns a preset or explicit bounds into a [`DateRange`]
//! 2. The caller fetches logs for that range (ownership already enforced)
//! 3. [`ProgressAggregator::aggregate`] converts every weight with
//!    [`convert_weight`], sorts the points and computes the statistics

/// Analytics error taxonomy
pub mod errors;

/// Date range presets and resolution
pub mod date_range;

/// Per-exercise and per-workout progress aggregation
pub mod progress;

/// Least-squares regression helpers
pub mod statistics;

/// Weight unit conversion
pub mod units;

pub use date_range::{resolve_date_range, DateRange, DateRangePreset};
pub use errors::ProgressError;
pub use progress::{
    ChartPoint, ExerciseProgress, ExerciseSeries, ProgressAggregator, ProgressOptions,
    RawLogEntry, WeeklyProgressMetrics,
};
pub use units::convert_weight;
