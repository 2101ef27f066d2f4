// ABOUTME: Exercise log CRUD routes for recording weight, reps and sets per session date
// ABOUTME: Logs inherit ownership from their exercise; positive values are enforced on write
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{NaiveDate, Utc};
use ironlog_core::errors::{AppError, AppResult};
use ironlog_core::models::{ExerciseLog, WeightUnit};
use serde::Deserialize;
use uuid::Uuid;

use crate::middleware::authenticate_request;
use crate::resources::ServerResources;
use crate::utils::uuid::parse_uuid;
use crate::utils::validation::{validate_count, validate_weight};

/// Record a set
#[derive(Debug, Clone, Deserialize)]
pub struct CreateExerciseLogRequest {
    /// Exercise the log belongs to
    pub exercise_id: String,
    /// Session date, defaults to today (UTC)
    pub date: Option<NaiveDate>,
    /// Weight lifted
    pub weight: Option<f64>,
    /// Unit of `weight`, defaults to the user's preferred unit
    pub weight_unit: Option<String>,
    /// Repetitions
    pub reps: Option<i64>,
    /// Sets
    pub sets: Option<i64>,
}

/// Partial update; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateExerciseLogRequest {
    /// Session date
    pub date: Option<NaiveDate>,
    /// Weight lifted
    pub weight: Option<f64>,
    /// Unit of `weight`
    pub weight_unit: Option<String>,
    /// Repetitions
    pub reps: Option<i64>,
    /// Sets
    pub sets: Option<i64>,
}

fn parse_unit(unit: Option<&str>) -> AppResult<Option<WeightUnit>> {
    Ok(unit.map(str::parse::<WeightUnit>).transpose()?)
}

/// Exercise log routes
pub struct ExerciseLogRoutes;

impl ExerciseLogRoutes {
    /// Create all exercise log routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/exercise-logs", post(Self::handle_create))
            .route(
                "/exercise-logs/by-exercise/:exercise_id",
                get(Self::handle_list_for_exercise),
            )
            .route(
                "/exercise-logs/:id",
                get(Self::handle_get)
                    .put(Self::handle_update)
                    .delete(Self::handle_delete),
            )
            .with_state(resources)
    }

    async fn owned_exercise_id(
        resources: &ServerResources,
        exercise_id: &str,
        user_id: Uuid,
    ) -> AppResult<Uuid> {
        let exercise_id = parse_uuid(exercise_id, "exercise")?;
        resources
            .database
            .get_exercise(exercise_id, user_id)
            .await?
            .map(|exercise| exercise.id)
            .ok_or_else(|| AppError::not_found("Exercise"))
    }

    async fn owned_log(
        resources: &ServerResources,
        log_id: &str,
        user_id: Uuid,
    ) -> AppResult<ExerciseLog> {
        let log_id = parse_uuid(log_id, "exercise log")?;
        resources
            .database
            .get_exercise_log(log_id, user_id)
            .await?
            .ok_or_else(|| AppError::not_found("Exercise log"))
    }

    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(request): Json<CreateExerciseLogRequest>,
    ) -> Result<Response, AppError> {
        let auth = authenticate_request(&headers, &resources).await?;
        let weight = validate_weight(request.weight)?;
        let reps = validate_count(request.reps, "reps")?;
        let sets = validate_count(request.sets, "sets")?;
        let weight_unit = parse_unit(request.weight_unit.as_deref())?
            .unwrap_or(auth.user.preferred_weight_unit);

        let exercise_id =
            Self::owned_exercise_id(&resources, &request.exercise_id, auth.user_id()).await?;

        let now = Utc::now();
        let log = ExerciseLog {
            id: Uuid::new_v4(),
            exercise_id,
            user_id: auth.user_id(),
            date: request.date.unwrap_or_else(|| now.date_naive()),
            weight,
            weight_unit,
            reps,
            sets,
            created_at: now,
            updated_at: now,
        };
        resources.database.create_exercise_log(&log).await?;

        Ok((StatusCode::CREATED, Json(log)).into_response())
    }

    async fn handle_list_for_exercise(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(exercise_id): Path<String>,
    ) -> Result<Response, AppError> {
        let auth = authenticate_request(&headers, &resources).await?;
        let exercise_id = Self::owned_exercise_id(&resources, &exercise_id, auth.user_id()).await?;

        let logs = resources
            .database
            .list_exercise_logs(exercise_id, auth.user_id())
            .await?;
        Ok((StatusCode::OK, Json(logs)).into_response())
    }

    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let auth = authenticate_request(&headers, &resources).await?;
        let log = Self::owned_log(&resources, &id, auth.user_id()).await?;
        Ok((StatusCode::OK, Json(log)).into_response())
    }

    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(id): Path<String>,
        Json(request): Json<UpdateExerciseLogRequest>,
    ) -> Result<Response, AppError> {
        let auth = authenticate_request(&headers, &resources).await?;
        let weight = validate_weight(request.weight)?;
        let reps = validate_count(request.reps, "reps")?;
        let sets = validate_count(request.sets, "sets")?;
        let weight_unit = parse_unit(request.weight_unit.as_deref())?;

        let mut log = Self::owned_log(&resources, &id, auth.user_id()).await?;
        if let Some(date) = request.date {
            log.date = date;
        }
        if weight.is_some() {
            log.weight = weight;
        }
        if let Some(unit) = weight_unit {
            log.weight_unit = unit;
        }
        if reps.is_some() {
            log.reps = reps;
        }
        if sets.is_some() {
            log.sets = sets;
        }
        log.updated_at = Utc::now();
        resources.database.update_exercise_log(&log).await?;

        Ok((StatusCode::OK, Json(log)).into_response())
    }

    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let auth = authenticate_request(&headers, &resources).await?;
        let log_id = parse_uuid(&id, "exercise log")?;

        if !resources
            .database
            .delete_exercise_log(log_id, auth.user_id())
            .await?
        {
            return Err(AppError::not_found("Exercise log"));
        }

        Ok(StatusCode::NO_CONTENT.into_response())
    }
}
