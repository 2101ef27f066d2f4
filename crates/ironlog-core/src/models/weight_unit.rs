// ABOUTME: Mass unit enum shared by storage, analytics and the HTTP layer
// ABOUTME: Closed set {kg, lbs}; unknown strings are rejected with UnsupportedUnitError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Mass unit a weight is recorded or reported in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    /// Kilograms
    #[default]
    Kg,
    /// Pounds
    Lbs,
}

impl WeightUnit {
    /// Wire and storage representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kg => "kg",
            Self::Lbs => "lbs",
        }
    }
}

impl Display for WeightUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// A unit string outside the supported `{kg, lbs}` set
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported weight unit: {unit}")]
pub struct UnsupportedUnitError {
    /// The rejected unit string
    pub unit: String,
}

impl FromStr for WeightUnit {
    type Err = UnsupportedUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kg" => Ok(Self::Kg),
            "lbs" => Ok(Self::Lbs),
            _ => Err(UnsupportedUnitError { unit: s.to_owned() }),
        }
    }
}
