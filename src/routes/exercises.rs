// ABOUTME: Exercise CRUD routes; every exercise belongs to a workout of the same user
// ABOUTME: Creating or listing requires the parent workout to be owned by the caller
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use ironlog_core::errors::{AppError, AppResult};
use ironlog_core::models::{Exercise, Workout};
use serde::Deserialize;
use uuid::Uuid;

use crate::middleware::authenticate_request;
use crate::resources::ServerResources;
use crate::utils::slug::slugify;
use crate::utils::uuid::parse_uuid;
use crate::utils::validation::validate_name;

/// Create an exercise inside a workout
#[derive(Debug, Clone, Deserialize)]
pub struct CreateExerciseRequest {
    /// Display name
    pub name: String,
    /// Parent workout
    pub workout_id: String,
}

/// Rename an exercise
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateExerciseRequest {
    /// Display name
    pub name: String,
}

/// Exercise routes
pub struct ExerciseRoutes;

impl ExerciseRoutes {
    /// Create all exercise routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/exercises", post(Self::handle_create))
            .route(
                "/exercises/by-workout/:workout_id",
                get(Self::handle_list_for_workout),
            )
            .route(
                "/exercises/:id",
                get(Self::handle_get)
                    .put(Self::handle_update)
                    .delete(Self::handle_delete),
            )
            .with_state(resources)
    }

    async fn owned_workout(
        resources: &ServerResources,
        workout_id: &str,
        user_id: Uuid,
    ) -> AppResult<Workout> {
        let workout_id = parse_uuid(workout_id, "workout")?;
        resources
            .database
            .get_workout(workout_id, user_id)
            .await?
            .ok_or_else(|| AppError::not_found("Workout"))
    }

    async fn owned_exercise(
        resources: &ServerResources,
        exercise_id: &str,
        user_id: Uuid,
    ) -> AppResult<Exercise> {
        let exercise_id = parse_uuid(exercise_id, "exercise")?;
        resources
            .database
            .get_exercise(exercise_id, user_id)
            .await?
            .ok_or_else(|| AppError::not_found("Exercise"))
    }

    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(request): Json<CreateExerciseRequest>,
    ) -> Result<Response, AppError> {
        let auth = authenticate_request(&headers, &resources).await?;
        let name = validate_name(&request.name)?;
        let workout = Self::owned_workout(&resources, &request.workout_id, auth.user_id()).await?;

        let now = Utc::now();
        let exercise = Exercise {
            id: Uuid::new_v4(),
            slug: slugify(&name),
            name,
            workout_id: workout.id,
            user_id: auth.user_id(),
            created_at: now,
            updated_at: now,
        };
        resources.database.create_exercise(&exercise).await?;

        Ok((StatusCode::CREATED, Json(exercise)).into_response())
    }

    async fn handle_list_for_workout(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(workout_id): Path<String>,
    ) -> Result<Response, AppError> {
        let auth = authenticate_request(&headers, &resources).await?;
        let workout = Self::owned_workout(&resources, &workout_id, auth.user_id()).await?;

        let exercises = resources
            .database
            .list_exercises_for_workout(workout.id, auth.user_id())
            .await?;
        Ok((StatusCode::OK, Json(exercises)).into_response())
    }

    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let auth = authenticate_request(&headers, &resources).await?;
        let exercise = Self::owned_exercise(&resources, &id, auth.user_id()).await?;
        Ok((StatusCode::OK, Json(exercise)).into_response())
    }

    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(id): Path<String>,
        Json(request): Json<UpdateExerciseRequest>,
    ) -> Result<Response, AppError> {
        let auth = authenticate_request(&headers, &resources).await?;
        let name = validate_name(&request.name)?;
        let mut exercise = Self::owned_exercise(&resources, &id, auth.user_id()).await?;

        exercise.slug = slugify(&name);
        exercise.name = name;
        exercise.updated_at = Utc::now();
        resources.database.update_exercise(&exercise).await?;

        Ok((StatusCode::OK, Json(exercise)).into_response())
    }

    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let auth = authenticate_request(&headers, &resources).await?;
        let exercise_id = parse_uuid(&id, "exercise")?;

        if !resources
            .database
            .delete_exercise(exercise_id, auth.user_id())
            .await?
        {
            return Err(AppError::not_found("Exercise"));
        }

        Ok(StatusCode::NO_CONTENT.into_response())
    }
}
