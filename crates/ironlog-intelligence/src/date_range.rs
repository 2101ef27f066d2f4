// ABOUTME: Date range presets and resolution of query bounds into a concrete inclusive range
// ABOUTME: Fixed presets count backwards from today, custom ranges take both explicit bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

use std::fmt;

use chrono::{Days, NaiveDate};
use ironlog_core::constants::date_ranges;
use serde::{Deserialize, Serialize};

use crate::errors::ProgressError;

/// Named date window used by progress queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DateRangePreset {
    /// Last 30 days
    #[serde(rename = "last_month")]
    LastMonth,
    /// Last 90 days
    #[serde(rename = "last_3_months")]
    Last3Months,
    /// Last 180 days
    #[serde(rename = "last_6_months")]
    Last6Months,
    /// Last 365 days
    #[serde(rename = "last_12_months")]
    Last12Months,
    /// Caller supplies both bounds
    #[serde(rename = "custom")]
    Custom,
}

impl DateRangePreset {
    /// Wire name of the preset
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LastMonth => "last_month",
            Self::Last3Months => "last_3_months",
            Self::Last6Months => "last_6_months",
            Self::Last12Months => "last_12_months",
            Self::Custom => "custom",
        }
    }

    /// Number of days the preset reaches back, `None` for [`Self::Custom`]
    #[must_use]
    pub const fn span_days(self) -> Option<u64> {
        match self {
            Self::LastMonth => Some(date_ranges::LAST_MONTH_DAYS),
            Self::Last3Months => Some(date_ranges::LAST_3_MONTHS_DAYS),
            Self::Last6Months => Some(date_ranges::LAST_6_MONTHS_DAYS),
            Self::Last12Months => Some(date_ranges::LAST_12_MONTHS_DAYS),
            Self::Custom => None,
        }
    }
}

impl fmt::Display for DateRangePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive calendar date range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First day included
    pub start: NaiveDate,
    /// Last day included
    pub end: NaiveDate,
}

impl DateRange {
    /// Range covering the `days` days before `today` and `today` itself
    #[must_use]
    pub fn trailing(days: u64, today: NaiveDate) -> Self {
        Self {
            start: today.checked_sub_days(Days::new(days)).unwrap_or(NaiveDate::MIN),
            end: today,
        }
    }

    /// Whether `date` falls inside the range
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// A range whose start is after its end matches nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }
}

/// Resolve a preset and optional explicit bounds into a concrete range.
///
/// * A fixed preset yields `[today - span, today]` and rejects explicit bounds.
/// * [`DateRangePreset::Custom`] requires both bounds.
/// * Without a preset, missing bounds default to the trailing 30 days
///   ending `today`. An inverted range is returned as-is and simply matches
///   no logs.
///
/// # Errors
///
/// Returns [`ProgressError::ConflictingRange`] or
/// [`ProgressError::MissingRangeBounds`] for inconsistent input.
pub fn resolve_date_range(
    preset: Option<DateRangePreset>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    today: NaiveDate,
) -> Result<DateRange, ProgressError> {
    match preset {
        Some(DateRangePreset::Custom) => match (start_date, end_date) {
            (Some(start), Some(end)) => Ok(DateRange { start, end }),
            _ => Err(ProgressError::MissingRangeBounds),
        },
        Some(preset) => {
            if start_date.is_some() || end_date.is_some() {
                return Err(ProgressError::ConflictingRange { preset });
            }
            let days = preset
                .span_days()
                .unwrap_or(date_ranges::DEFAULT_RANGE_DAYS);
            Ok(DateRange::trailing(days, today))
        }
        None => {
            let end = end_date.unwrap_or(today);
            let start = start_date.unwrap_or_else(|| {
                DateRange::trailing(date_ranges::DEFAULT_RANGE_DAYS, end).start
            });
            Ok(DateRange { start, end })
        }
    }
}
