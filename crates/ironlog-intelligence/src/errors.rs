// ABOUTME: Error taxonomy for unit conversion and date range resolution
// ABOUTME: All variants are client-input errors and convert into AppError::InvalidInput
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

use ironlog_core::errors::AppError;
use ironlog_core::models::UnsupportedUnitError;

use crate::date_range::DateRangePreset;

/// Failures raised while preparing or running a progress query
///
/// An empty result is not an error here; it is a valid, empty answer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProgressError {
    /// Weight unit outside `{kg, lbs}`
    #[error(transparent)]
    UnsupportedUnit(#[from] UnsupportedUnitError),

    /// Explicit bounds supplied together with a fixed preset
    #[error("Cannot specify start_date or end_date when using the {preset} preset")]
    ConflictingRange {
        /// The fixed preset that was requested
        preset: DateRangePreset,
    },

    /// Custom preset without both bounds
    #[error("start_date and end_date are required when using the custom preset")]
    MissingRangeBounds,
}

impl From<ProgressError> for AppError {
    fn from(error: ProgressError) -> Self {
        match error {
            ProgressError::MissingRangeBounds => {
                Self::missing_field("start_date and end_date").with_source(error)
            }
            ProgressError::UnsupportedUnit(_) | ProgressError::ConflictingRange { .. } => {
                Self::invalid_input(error.to_string()).with_source(error)
            }
        }
    }
}
