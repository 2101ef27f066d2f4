// ABOUTME: Route module organization for the IronLog HTTP API
// ABOUTME: One module per resource; each exposes a `*Routes::routes` constructor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

//! HTTP routes grouped by resource.
//!
//! Handlers stay thin: they authenticate, validate the request body, call
//! the database or a service, and shape the JSON response.

use serde::{Deserialize, Serialize};

/// Registration, login and password reset
pub mod auth;
/// Exercise logs (individual sets)
pub mod exercise_logs;
/// Exercises within a workout
pub mod exercises;
/// Liveness and readiness probes
pub mod health;
/// Progress analytics
pub mod progress;
/// Current user profile
pub mod users;
/// Workouts
pub mod workouts;

pub use auth::AuthRoutes;
pub use exercise_logs::ExerciseLogRoutes;
pub use exercises::ExerciseRoutes;
pub use health::HealthRoutes;
pub use progress::ProgressRoutes;
pub use users::UserRoutes;
pub use workouts::WorkoutRoutes;

/// Plain confirmation body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human readable message
    pub message: String,
}

impl MessageResponse {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
