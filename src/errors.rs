// ABOUTME: Server-facing re-export of the unified error types from ironlog-core
// ABOUTME: Handlers return AppResult and rely on AppError's IntoResponse implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

//! # Error Handling
//!
//! The error types live in `ironlog-core` so the analytics crate can convert
//! into them; this module keeps `crate::errors::AppError` paths stable.

pub use ironlog_core::errors::{AppError, AppResult, ErrorCode, ErrorResponse};
