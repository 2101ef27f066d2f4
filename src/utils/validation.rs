// ABOUTME: Validation helpers for request bodies
// ABOUTME: Names, emails, positive weights and positive rep/set counts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

use ironlog_core::constants::limits::MAX_NAME_LENGTH;
use ironlog_core::errors::{AppError, AppResult};

/// Trim a workout or exercise name and check its length
///
/// # Errors
///
/// Returns `InvalidInput` when the trimmed name is empty or too long
pub fn validate_name(name: &str) -> AppResult<String> {
    let trimmed = name.trim();
    let length = trimmed.chars().count();
    if length == 0 {
        return Err(AppError::invalid_input("Name must not be empty"));
    }
    if length > MAX_NAME_LENGTH {
        return Err(AppError::invalid_input(format!(
            "Name must be at most {MAX_NAME_LENGTH} characters"
        )));
    }
    Ok(trimmed.to_owned())
}

/// Normalize an email address and reject obviously malformed ones
///
/// # Errors
///
/// Returns `InvalidInput` if the address has no local part or no dotted domain
pub fn validate_email(email: &str) -> AppResult<String> {
    let normalized = email.trim().to_lowercase();
    let valid = normalized.split_once('@').is_some_and(|(local, domain)| {
        !local.is_empty()
            && domain.contains('.')
            && !domain.starts_with('.')
            && !domain.ends_with('.')
            && !domain.contains('@')
    });

    if valid {
        Ok(normalized)
    } else {
        Err(AppError::invalid_input(format!("Invalid email address: {email}")))
    }
}

/// Reject empty passwords
///
/// # Errors
///
/// Returns `MissingRequiredField` when the password is empty
pub fn validate_password(password: &str) -> AppResult<()> {
    if password.is_empty() {
        return Err(AppError::missing_field("password"));
    }
    Ok(())
}

/// A weight, when present, must be a finite value above zero
///
/// # Errors
///
/// Returns `ValueOutOfRange` for zero, negative or non-finite weights
pub fn validate_weight(weight: Option<f64>) -> AppResult<Option<f64>> {
    match weight {
        Some(value) if !value.is_finite() || value <= 0.0 => Err(AppError::out_of_range(
            "weight must be greater than 0",
        )),
        other => Ok(other),
    }
}

/// A rep or set count, when present, must be a positive integer
///
/// # Errors
///
/// Returns `ValueOutOfRange` for zero, negative or oversized counts
pub fn validate_count(value: Option<i64>, field: &str) -> AppResult<Option<u32>> {
    value
        .map(|count| {
            u32::try_from(count)
                .ok()
                .filter(|count| *count > 0)
                .ok_or_else(|| AppError::out_of_range(format!("{field} must be greater than 0")))
        })
        .transpose()
}
