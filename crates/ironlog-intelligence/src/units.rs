// ABOUTME: Conversion of weights between kilograms and pounds
// ABOUTME: Both directions share one factor so they are exact inverses up to float rounding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

use ironlog_core::constants::units::LBS_PER_KG;
use ironlog_core::models::WeightUnit;

/// Convert `weight` from one unit to another.
///
/// Same-unit conversion returns the input untouched, including zero and
/// negative values. The unit set is closed, so every pair is supported;
/// unknown unit strings are rejected earlier when they are parsed into
/// [`WeightUnit`].
#[must_use]
pub fn convert_weight(weight: f64, from: WeightUnit, to: WeightUnit) -> f64 {
    match (from, to) {
        (WeightUnit::Kg, WeightUnit::Lbs) => weight * LBS_PER_KG,
        (WeightUnit::Lbs, WeightUnit::Kg) => weight / LBS_PER_KG,
        (WeightUnit::Kg, WeightUnit::Kg) | (WeightUnit::Lbs, WeightUnit::Lbs) => weight,
    }
}
