// ABOUTME: Logged weight/rep/set entry for one exercise on one date
// ABOUTME: Weight is stored in the unit it was logged in and converted at read time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::WeightUnit;

/// Stored exercise log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseLog {
    /// Unique log identifier
    pub id: Uuid,
    /// Exercise this entry belongs to
    pub exercise_id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Training date
    pub date: NaiveDate,
    /// Weight lifted, absent for bodyweight or reps-only entries
    pub weight: Option<f64>,
    /// Unit `weight` was recorded in
    pub weight_unit: WeightUnit,
    /// Repetitions per set
    pub reps: Option<u32>,
    /// Number of sets
    pub sets: Option<u32>,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last update time
    pub updated_at: DateTime<Utc>,
}
