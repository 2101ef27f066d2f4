// ABOUTME: Progress analytics routes for a single exercise or every exercise of a workout
// ABOUTME: Parses unit, range and option query parameters and delegates to the progress service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

//! Progress routes
//!
//! `target_unit` is required. The exercise endpoint accepts a
//! `date_range_preset`; the workout endpoint ignores it, only honours
//! explicit bounds and otherwise uses the trailing 30 days.

use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::{NaiveDate, Utc};
use ironlog_core::errors::{AppError, AppResult};
use ironlog_core::models::WeightUnit;
use ironlog_intelligence::{resolve_date_range, DateRangePreset, ProgressOptions};
use serde::Deserialize;
use tracing::debug;

use crate::database::ScopedLogRepository;
use crate::logging::AppLogger;
use crate::middleware::authenticate_request;
use crate::resources::ServerResources;
use crate::services::progress::{exercise_progress, workout_progress, ProgressQuery};
use crate::utils::uuid::parse_uuid;

/// Query parameters shared by both progress endpoints
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProgressParams {
    /// `kg` or `lbs`
    pub target_unit: Option<String>,
    /// Inclusive range start
    pub start_date: Option<NaiveDate>,
    /// Inclusive range end
    pub end_date: Option<NaiveDate>,
    /// Named range, exercise endpoint only
    pub date_range_preset: Option<DateRangePreset>,
    /// Compute the trend (default true)
    pub include_trend: Option<bool>,
    /// Compute the personal best (default true)
    pub include_personal_best: Option<bool>,
    /// Compute weekly progress (default true)
    pub include_weekly_progress: Option<bool>,
}

/// Whether an endpoint resolves `date_range_preset`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PresetPolicy {
    Honour,
    Ignore,
}

impl ProgressParams {
    fn options(&self) -> ProgressOptions {
        ProgressOptions {
            include_trend: self.include_trend.unwrap_or(true),
            include_personal_best: self.include_personal_best.unwrap_or(true),
            include_weekly_progress: self.include_weekly_progress.unwrap_or(true),
        }
    }

    fn target_unit(&self) -> AppResult<WeightUnit> {
        let unit = self
            .target_unit
            .as_deref()
            .ok_or_else(|| AppError::missing_field("target_unit"))?;
        Ok(unit.parse::<WeightUnit>()?)
    }

    fn into_query(self, policy: PresetPolicy, today: NaiveDate) -> AppResult<ProgressQuery> {
        let target_unit = self.target_unit()?;
        let preset = match (policy, self.date_range_preset) {
            (PresetPolicy::Honour, preset) => preset,
            (PresetPolicy::Ignore, Some(ignored)) => {
                debug!(preset = %ignored, "date_range_preset ignored for workout progress");
                None
            }
            (PresetPolicy::Ignore, None) => None,
        };
        let range = resolve_date_range(preset, self.start_date, self.end_date, today)?;
        Ok(ProgressQuery {
            target_unit,
            range,
            options: self.options(),
        })
    }
}

fn params(query: Result<Query<ProgressParams>, QueryRejection>) -> AppResult<ProgressParams> {
    query
        .map(|Query(params)| params)
        .map_err(|rejection| AppError::invalid_input(rejection.body_text()))
}

/// Progress routes
pub struct ProgressRoutes;

impl ProgressRoutes {
    /// Create all progress routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/progress/exercise/:exercise_id",
                get(Self::handle_exercise_progress),
            )
            .route(
                "/progress/workout/:workout_id",
                get(Self::handle_workout_progress),
            )
            .with_state(resources)
    }

    /// Handle GET /progress/exercise/:exercise_id
    async fn handle_exercise_progress(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(exercise_id): Path<String>,
        query: Result<Query<ProgressParams>, QueryRejection>,
    ) -> Result<Response, AppError> {
        let auth = authenticate_request(&headers, &resources).await?;
        let exercise_id = parse_uuid(&exercise_id, "exercise")?;
        let query = params(query)?.into_query(PresetPolicy::Honour, Utc::now().date_naive())?;

        let source = ScopedLogRepository::new(resources.database.clone(), auth.user_id());
        let progress = exercise_progress(&source, exercise_id, &query).await?;

        AppLogger::log_progress_query(
            &auth.user_id().to_string(),
            "exercise",
            1,
            progress.data_points.len(),
        );
        Ok((StatusCode::OK, Json(progress)).into_response())
    }

    /// Handle GET /progress/workout/:workout_id
    async fn handle_workout_progress(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(workout_id): Path<String>,
        query: Result<Query<ProgressParams>, QueryRejection>,
    ) -> Result<Response, AppError> {
        let auth = authenticate_request(&headers, &resources).await?;
        let workout_id = parse_uuid(&workout_id, "workout")?;
        let query = params(query)?.into_query(PresetPolicy::Ignore, Utc::now().date_naive())?;

        let source = ScopedLogRepository::new(resources.database.clone(), auth.user_id());
        let progress = workout_progress(&source, workout_id, &query).await?;

        AppLogger::log_progress_query(
            &auth.user_id().to_string(),
            "workout",
            progress.len(),
            progress.iter().map(|p| p.data_points.len()).sum(),
        );
        Ok((StatusCode::OK, Json(progress)).into_response())
    }
}
