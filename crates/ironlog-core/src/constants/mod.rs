// ABOUTME: Application constants for unit conversion, validation limits and date ranges
// ABOUTME: Named constants shared by the analytics engine and the HTTP layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

/// Unit conversion factors
pub mod units {
    /// Pounds per kilogram. The LBS -> KG direction divides by this same value.
    pub const LBS_PER_KG: f64 = 2.204_62;

    /// Days per week
    pub const DAYS_PER_WEEK: i64 = 7;
}

/// Date range defaults in days
pub mod date_ranges {
    /// Span used when no bounds or preset are supplied
    pub const DEFAULT_RANGE_DAYS: u64 = 30;

    /// `last_month` preset
    pub const LAST_MONTH_DAYS: u64 = 30;

    /// `last_3_months` preset
    pub const LAST_3_MONTHS_DAYS: u64 = 90;

    /// `last_6_months` preset
    pub const LAST_6_MONTHS_DAYS: u64 = 180;

    /// `last_12_months` preset
    pub const LAST_12_MONTHS_DAYS: u64 = 365;
}

/// Validation limits
pub mod limits {
    /// Maximum length of a workout or exercise name
    pub const MAX_NAME_LENGTH: usize = 100;

    /// Default JWT lifetime (8 days)
    pub const DEFAULT_JWT_EXPIRY_HOURS: i64 = 24 * 8;

    /// Default password reset token lifetime
    pub const DEFAULT_RESET_TOKEN_EXPIRY_MINUTES: i64 = 60;

    /// Default per-client request cap per minute
    pub const DEFAULT_RATE_LIMIT_PER_MINUTE: u32 = 60;

    /// Random bytes in a password reset token
    pub const RESET_TOKEN_BYTES: usize = 32;
}

/// Service identity used in logs and tokens
pub mod service_names {
    /// Service name for structured logging
    pub const IRONLOG_SERVER: &str = "ironlog-server";

    /// JWT audience
    pub const API_AUDIENCE: &str = "ironlog-api";
}
