// ABOUTME: Workout CRUD routes scoped to the authenticated user
// ABOUTME: Workouts owned by other users are reported as not found
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use ironlog_core::errors::AppError;
use ironlog_core::models::Workout;
use serde::Deserialize;
use uuid::Uuid;

use crate::middleware::authenticate_request;
use crate::resources::ServerResources;
use crate::utils::slug::slugify;
use crate::utils::uuid::parse_uuid;
use crate::utils::validation::validate_name;

/// Create or rename a workout
#[derive(Debug, Clone, Deserialize)]
pub struct WorkoutRequest {
    /// Display name
    pub name: String,
}

/// Workout routes
pub struct WorkoutRoutes;

impl WorkoutRoutes {
    /// Create all workout routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/workouts",
                get(Self::handle_list).post(Self::handle_create),
            )
            .route(
                "/workouts/:id",
                get(Self::handle_get)
                    .put(Self::handle_update)
                    .delete(Self::handle_delete),
            )
            .with_state(resources)
    }

    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(request): Json<WorkoutRequest>,
    ) -> Result<Response, AppError> {
        let auth = authenticate_request(&headers, &resources).await?;
        let name = validate_name(&request.name)?;

        let now = Utc::now();
        let workout = Workout {
            id: Uuid::new_v4(),
            slug: slugify(&name),
            name,
            user_id: auth.user_id(),
            created_at: now,
            updated_at: now,
        };
        resources.database.create_workout(&workout).await?;

        Ok((StatusCode::CREATED, Json(workout)).into_response())
    }

    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let auth = authenticate_request(&headers, &resources).await?;
        let workouts = resources.database.list_workouts(auth.user_id()).await?;
        Ok((StatusCode::OK, Json(workouts)).into_response())
    }

    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let auth = authenticate_request(&headers, &resources).await?;
        let workout_id = parse_uuid(&id, "workout")?;

        let workout = resources
            .database
            .get_workout(workout_id, auth.user_id())
            .await?
            .ok_or_else(|| AppError::not_found("Workout"))?;

        Ok((StatusCode::OK, Json(workout)).into_response())
    }

    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(id): Path<String>,
        Json(request): Json<WorkoutRequest>,
    ) -> Result<Response, AppError> {
        let auth = authenticate_request(&headers, &resources).await?;
        let workout_id = parse_uuid(&id, "workout")?;
        let name = validate_name(&request.name)?;

        let mut workout = resources
            .database
            .get_workout(workout_id, auth.user_id())
            .await?
            .ok_or_else(|| AppError::not_found("Workout"))?;

        workout.slug = slugify(&name);
        workout.name = name;
        workout.updated_at = Utc::now();
        resources.database.update_workout(&workout).await?;

        Ok((StatusCode::OK, Json(workout)).into_response())
    }

    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let auth = authenticate_request(&headers, &resources).await?;
        let workout_id = parse_uuid(&id, "workout")?;

        if !resources
            .database
            .delete_workout(workout_id, auth.user_id())
            .await?
        {
            return Err(AppError::not_found("Workout"));
        }

        Ok(StatusCode::NO_CONTENT.into_response())
    }
}
