// ABOUTME: Core data models for the IronLog workout tracking API
// ABOUTME: Re-exports User, Workout, Exercise, ExerciseLog and WeightUnit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

//! # Data Models
//!
//! Persisted entities of the workout tracker. Every workout, exercise and
//! log belongs to exactly one user; derived analytics types live in the
//! `ironlog-intelligence` crate and are never stored.

mod exercise_log;
mod user;
mod weight_unit;
mod workout;

pub use exercise_log::ExerciseLog;
pub use user::User;
pub use weight_unit::{UnsupportedUnitError, WeightUnit};
pub use workout::{Exercise, Workout};
