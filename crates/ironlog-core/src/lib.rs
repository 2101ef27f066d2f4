// ABOUTME: Core types and constants for the IronLog workout tracking platform
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

#![deny(unsafe_code)]

//! # IronLog Core
//!
//! Foundation crate providing shared types and constants for the IronLog
//! workout tracking platform. Both the analytics crate and the server crate
//! depend on it, so it is kept small and changes infrequently.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Unit conversion factors, limits and range defaults
//! - **models**: Users, workouts, exercises, exercise logs and `WeightUnit`

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (User, Workout, Exercise, `ExerciseLog`, `WeightUnit`)
pub mod models;
