// ABOUTME: Integration tests for workout, exercise and exercise log CRUD routes
// ABOUTME: Checks validation errors, owner isolation and cascade behaviour through the HTTP surface
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

//! CRUD route integration tests

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use anyhow::Result;
use axum::http::{Method, StatusCode};
use ironlog_core::models::WeightUnit;
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn test_workout_lifecycle() -> Result<()> {
    let (app, resources) = common::create_test_app().await?;
    let (user, token) = common::create_test_user(&resources, "crud@example.com").await?;

    let (status, created) = common::send(
        &app,
        Method::POST,
        "/api/v1/workouts",
        Some(&token),
        Some(json!({ "name": "  Upper Body A " })),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["name"], "Upper Body A");
    assert_eq!(created["slug"], "upper-body-a");
    assert_eq!(created["user_id"], user.id.to_string());
    let id = created["id"].as_str().unwrap().to_owned();

    let (status, list) =
        common::send(&app, Method::GET, "/api/v1/workouts", Some(&token), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().map(Vec::len), Some(1));

    let (status, updated) = common::send(
        &app,
        Method::PUT,
        &format!("/api/v1/workouts/{id}"),
        Some(&token),
        Some(json!({ "name": "Upper Body B" })),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["slug"], "upper-body-b");

    let (status, body) = common::send(
        &app,
        Method::DELETE,
        &format!("/api/v1/workouts/{id}"),
        Some(&token),
        None,
    )
    .await?;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_null());

    let (status, _) = common::send(
        &app,
        Method::GET,
        &format!("/api/v1/workouts/{id}"),
        Some(&token),
        None,
    )
    .await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn test_workout_validation() -> Result<()> {
    let (app, resources) = common::create_test_app().await?;
    let (_user, token) = common::create_test_user(&resources, "valid@example.com").await?;

    for name in [String::new(), "   ".to_owned(), "x".repeat(101)] {
        let (status, body) = common::send(
            &app,
            Method::POST,
            "/api/v1/workouts",
            Some(&token),
            Some(json!({ "name": name })),
        )
        .await?;
        assert_eq!(status, StatusCode::BAD_REQUEST, "name {name:?} accepted: {body}");
    }

    let (status, body) = common::send(
        &app,
        Method::GET,
        "/api/v1/workouts/not-a-uuid",
        Some(&token),
        None,
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
    Ok(())
}

#[tokio::test]
async fn test_other_users_resources_are_not_found() -> Result<()> {
    let (app, resources) = common::create_test_app().await?;
    let (_alice, alice) = common::create_test_user(&resources, "alice@example.com").await?;
    let (_bob, bob) = common::create_test_user(&resources, "bob@example.com").await?;

    let workout_id = common::create_workout(&app, &alice, "Alice Legs").await?;
    let exercise_id = common::create_exercise(&app, &alice, &workout_id, "Squat").await?;
    let log = common::create_log(
        &app,
        &alice,
        json!({ "exercise_id": exercise_id, "date": "2024-05-01", "weight": 100.0 }),
    )
    .await?;
    let log_id = log["id"].as_str().unwrap();

    for uri in [
        format!("/api/v1/workouts/{workout_id}"),
        format!("/api/v1/exercises/{exercise_id}"),
        format!("/api/v1/exercises/by-workout/{workout_id}"),
        format!("/api/v1/exercise-logs/{log_id}"),
        format!("/api/v1/exercise-logs/by-exercise/{exercise_id}"),
    ] {
        let (status, _) = common::send(&app, Method::GET, &uri, Some(&bob), None).await?;
        assert_eq!(status, StatusCode::NOT_FOUND, "bob could read {uri}");
    }

    let (status, _) = common::send(
        &app,
        Method::DELETE,
        &format!("/api/v1/workouts/{workout_id}"),
        Some(&bob),
        None,
    )
    .await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Bob cannot attach an exercise or a log to Alice's data
    let (status, _) = common::send(
        &app,
        Method::POST,
        "/api/v1/exercises",
        Some(&bob),
        Some(json!({ "name": "Sneaky", "workout_id": workout_id })),
    )
    .await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = common::send(
        &app,
        Method::POST,
        "/api/v1/exercise-logs",
        Some(&bob),
        Some(json!({ "exercise_id": exercise_id, "weight": 10.0 })),
    )
    .await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = common::send(
        &app,
        Method::GET,
        &format!("/api/v1/workouts/{workout_id}"),
        Some(&alice),
        None,
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn test_exercise_routes() -> Result<()> {
    let (app, resources) = common::create_test_app().await?;
    let (_user, token) = common::create_test_user(&resources, "exercise@example.com").await?;
    let workout_id = common::create_workout(&app, &token, "Push").await?;

    let first = common::create_exercise(&app, &token, &workout_id, "Bench Press").await?;
    common::create_exercise(&app, &token, &workout_id, "Overhead Press").await?;

    let (status, list) = common::send(
        &app,
        Method::GET,
        &format!("/api/v1/exercises/by-workout/{workout_id}"),
        Some(&token),
        None,
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = list
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|e| e["name"].as_str())
        .collect();
    assert_eq!(names, vec!["Bench Press", "Overhead Press"]);

    let (status, updated) = common::send(
        &app,
        Method::PUT,
        &format!("/api/v1/exercises/{first}"),
        Some(&token),
        Some(json!({ "name": "Incline Bench" })),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["slug"], "incline-bench");
    assert_eq!(updated["workout_id"], workout_id);

    let (status, _) = common::send(
        &app,
        Method::POST,
        "/api/v1/exercises",
        Some(&token),
        Some(json!({ "name": "Dip", "workout_id": Uuid::new_v4() })),
    )
    .await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = common::send(
        &app,
        Method::DELETE,
        &format!("/api/v1/exercises/{first}"),
        Some(&token),
        None,
    )
    .await?;
    assert_eq!(status, StatusCode::NO_CONTENT);
    Ok(())
}

#[tokio::test]
async fn test_log_defaults_and_partial_update() -> Result<()> {
    let (app, resources) = common::create_test_app().await?;
    let (_user, token) =
        common::create_test_user_with_unit(&resources, "imperial@example.com", WeightUnit::Lbs)
            .await?;
    let workout_id = common::create_workout(&app, &token, "Pull").await?;
    let exercise_id = common::create_exercise(&app, &token, &workout_id, "Row").await?;

    let log = common::create_log(
        &app,
        &token,
        json!({ "exercise_id": exercise_id, "weight": 135.0, "reps": 8, "sets": 3 }),
    )
    .await?;
    assert_eq!(log["weight_unit"], "lbs");
    assert_eq!(
        log["date"],
        chrono::Utc::now().date_naive().format("%Y-%m-%d").to_string()
    );
    let log_id = log["id"].as_str().unwrap().to_owned();

    let (status, updated) = common::send(
        &app,
        Method::PUT,
        &format!("/api/v1/exercise-logs/{log_id}"),
        Some(&token),
        Some(json!({ "reps": 10 })),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["reps"], 10);
    assert_eq!(updated["sets"], 3);
    assert_eq!(updated["weight"], 135.0);

    let (status, _) = common::send(
        &app,
        Method::PUT,
        &format!("/api/v1/exercise-logs/{log_id}"),
        Some(&token),
        Some(json!({ "weight_unit": "stone" })),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = common::send(
        &app,
        Method::DELETE,
        &format!("/api/v1/exercise-logs/{log_id}"),
        Some(&token),
        None,
    )
    .await?;
    assert_eq!(status, StatusCode::NO_CONTENT);
    Ok(())
}

#[tokio::test]
async fn test_log_validation() -> Result<()> {
    let (app, resources) = common::create_test_app().await?;
    let (_user, token) = common::create_test_user(&resources, "checks@example.com").await?;
    let workout_id = common::create_workout(&app, &token, "Legs").await?;
    let exercise_id = common::create_exercise(&app, &token, &workout_id, "Squat").await?;

    for invalid in [
        json!({ "exercise_id": exercise_id, "weight": 0.0 }),
        json!({ "exercise_id": exercise_id, "weight": -20.0 }),
        json!({ "exercise_id": exercise_id, "reps": 0 }),
        json!({ "exercise_id": exercise_id, "sets": -1 }),
        json!({ "exercise_id": exercise_id, "weight_unit": "stone" }),
        json!({ "exercise_id": "nope" }),
    ] {
        let (status, body) = common::send(
            &app,
            Method::POST,
            "/api/v1/exercise-logs",
            Some(&token),
            Some(invalid.clone()),
        )
        .await?;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{invalid} accepted: {body}");
    }

    // Bodyweight entries carry no weight at all
    let log = common::create_log(
        &app,
        &token,
        json!({ "exercise_id": exercise_id, "reps": 12 }),
    )
    .await?;
    assert!(log["weight"].is_null());
    Ok(())
}

#[tokio::test]
async fn test_logs_listed_newest_first_and_removed_with_workout() -> Result<()> {
    let (app, resources) = common::create_test_app().await?;
    let (_user, token) = common::create_test_user(&resources, "history@example.com").await?;
    let workout_id = common::create_workout(&app, &token, "Legs").await?;
    let exercise_id = common::create_exercise(&app, &token, &workout_id, "Squat").await?;

    for date in ["2024-03-01", "2024-03-15", "2024-03-08"] {
        common::create_log(
            &app,
            &token,
            json!({ "exercise_id": exercise_id, "date": date, "weight": 100.0 }),
        )
        .await?;
    }

    let uri = format!("/api/v1/exercise-logs/by-exercise/{exercise_id}");
    let (status, list) = common::send(&app, Method::GET, &uri, Some(&token), None).await?;
    assert_eq!(status, StatusCode::OK);
    let dates: Vec<&str> = list
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|log| log["date"].as_str())
        .collect();
    assert_eq!(dates, vec!["2024-03-15", "2024-03-08", "2024-03-01"]);

    let (status, _) = common::send(
        &app,
        Method::DELETE,
        &format!("/api/v1/workouts/{workout_id}"),
        Some(&token),
        None,
    )
    .await?;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = common::send(&app, Method::GET, &uri, Some(&token), None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}
