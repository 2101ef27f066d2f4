// ABOUTME: Workout and exercise models owned by a single user
// ABOUTME: A workout groups exercises; each exercise owns its logged sets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Named training routine belonging to one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workout {
    /// Unique workout identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// URL-friendly name
    pub slug: String,
    /// Owning user
    pub user_id: Uuid,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last update time
    pub updated_at: DateTime<Utc>,
}

/// Exercise within a workout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// Unique exercise identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// URL-friendly name
    pub slug: String,
    /// Parent workout
    pub workout_id: Uuid,
    /// Owning user (always the workout's owner)
    pub user_id: Uuid,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last update time
    pub updated_at: DateTime<Utc>,
}
