// ABOUTME: UUID parsing for path parameters with consistent client errors
// ABOUTME: Malformed ids are reported as invalid input instead of a framework rejection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

use ironlog_core::errors::{AppError, AppResult};
use uuid::Uuid;

/// Parse a UUID path segment, naming the resource in the error
///
/// # Errors
///
/// Returns `InvalidInput` if the string is not a valid UUID
pub fn parse_uuid(uuid_str: &str, resource: &str) -> AppResult<Uuid> {
    Uuid::parse_str(uuid_str)
        .map_err(|_| AppError::invalid_input(format!("Invalid {resource} id: '{uuid_str}'")))
}
