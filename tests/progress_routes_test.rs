// ABOUTME: Integration tests for exercise and workout progress analytics endpoints
// ABOUTME: Covers unit normalization, statistics, option flags, range handling and isolation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

//! Progress route integration tests

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]

mod common;

use anyhow::Result;
use axum::http::{Method, StatusCode};
use axum::Router;
use serde_json::{json, Value};

const RANGE: &str = "start_date=2024-01-01&end_date=2024-03-31";

fn approx(value: &Value, expected: f64) -> bool {
    value.as_f64().is_some_and(|v| (v - expected).abs() < 1e-3)
}

async fn log_weight(
    app: &Router,
    token: &str,
    exercise_id: &str,
    date: &str,
    weight: f64,
    unit: &str,
) -> Result<()> {
    common::create_log(
        app,
        token,
        json!({
            "exercise_id": exercise_id,
            "date": date,
            "weight": weight,
            "weight_unit": unit,
            "reps": 5,
            "sets": 3
        }),
    )
    .await?;
    Ok(())
}

/// Workout with one exercise holding a kg and a lbs entry of the same load
async fn mixed_unit_fixture(app: &Router, token: &str) -> Result<(String, String)> {
    let workout_id = common::create_workout(app, token, "Legs").await?;
    let exercise_id = common::create_exercise(app, token, &workout_id, "Squat").await?;
    log_weight(app, token, &exercise_id, "2024-01-01", 100.0, "kg").await?;
    log_weight(app, token, &exercise_id, "2024-01-08", 220.462, "lbs").await?;
    Ok((workout_id, exercise_id))
}

#[tokio::test]
async fn test_exercise_progress_normalizes_units() -> Result<()> {
    let (app, resources) = common::create_test_app().await?;
    let (_user, token) = common::create_test_user(&resources, "units@example.com").await?;
    let (_workout_id, exercise_id) = mixed_unit_fixture(&app, &token).await?;

    let uri = format!("/api/v1/progress/exercise/{exercise_id}?target_unit=kg&{RANGE}");
    let (status, body) = common::send(&app, Method::GET, &uri, Some(&token), None).await?;
    assert_eq!(status, StatusCode::OK, "{body}");

    assert_eq!(body["exercise_name"], "Squat");
    assert_eq!(body["target_unit"], "kg");
    let points = body["data_points"].as_array().unwrap();
    assert_eq!(points.len(), 2);
    assert_eq!(points[0]["date"], "2024-01-01");
    assert!(approx(&points[0]["weight"], 100.0));
    assert!(approx(&points[1]["weight"], 100.0));
    assert!(points.iter().all(|p| p["weight_unit"] == "kg"));
    assert_eq!(points[1]["reps"], 5);

    assert!(approx(&body["personal_best"], 100.0));
    assert!(body["trend"].as_f64().is_some_and(|t| t.abs() < 1e-3));

    let uri = format!("/api/v1/progress/exercise/{exercise_id}?target_unit=LBS&{RANGE}");
    let (status, body) = common::send(&app, Method::GET, &uri, Some(&token), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["target_unit"], "lbs");
    let points = body["data_points"].as_array().unwrap();
    assert!(approx(&points[0]["weight"], 220.462));
    assert!(approx(&points[1]["weight"], 220.462));
    Ok(())
}

#[tokio::test]
async fn test_weekly_progress_and_trend() -> Result<()> {
    let (app, resources) = common::create_test_app().await?;
    let (_user, token) = common::create_test_user(&resources, "weekly@example.com").await?;
    let workout_id = common::create_workout(&app, &token, "Press").await?;
    let exercise_id = common::create_exercise(&app, &token, &workout_id, "Bench").await?;

    log_weight(&app, &token, &exercise_id, "2024-02-01", 50.0, "kg").await?;
    log_weight(&app, &token, &exercise_id, "2024-02-08", 52.0, "kg").await?;
    log_weight(&app, &token, &exercise_id, "2024-02-15", 54.0, "kg").await?;
    // Bodyweight entry is charted but ignored by the statistics
    common::create_log(
        &app,
        &token,
        json!({ "exercise_id": exercise_id, "date": "2024-02-10", "reps": 20 }),
    )
    .await?;

    let uri = format!("/api/v1/progress/exercise/{exercise_id}?target_unit=kg&{RANGE}");
    let (status, body) = common::send(&app, Method::GET, &uri, Some(&token), None).await?;
    assert_eq!(status, StatusCode::OK, "{body}");

    let points = body["data_points"].as_array().unwrap();
    assert_eq!(points.len(), 4);
    assert!(points[2]["weight"].is_null());

    let weekly = &body["weekly_progress"];
    assert_eq!(weekly["number_of_weeks"], 3);
    assert!(approx(&weekly["start_weight"], 50.0));
    assert!(approx(&weekly["end_weight"], 54.0));
    assert!(approx(&weekly["average_change_per_week"], 2.0));
    assert_eq!(weekly["weight_unit"], "kg");

    assert!(approx(&body["trend"], 4.0 / 14.0));
    assert!(approx(&body["personal_best"], 54.0));
    assert_eq!(body["personal_best_date"], "2024-02-15");
    Ok(())
}

#[tokio::test]
async fn test_include_flags_disable_statistics() -> Result<()> {
    let (app, resources) = common::create_test_app().await?;
    let (_user, token) = common::create_test_user(&resources, "flags@example.com").await?;
    let (_workout_id, exercise_id) = mixed_unit_fixture(&app, &token).await?;

    let uri = format!(
        "/api/v1/progress/exercise/{exercise_id}?target_unit=kg&{RANGE}\
         &include_trend=false&include_personal_best=false&include_weekly_progress=false"
    );
    let (status, body) = common::send(&app, Method::GET, &uri, Some(&token), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert!(body["trend"].is_null());
    assert!(body["personal_best"].is_null());
    assert!(body["personal_best_date"].is_null());
    assert!(body["weekly_progress"].is_null());
    assert_eq!(body["data_points"].as_array().map(Vec::len), Some(2));
    Ok(())
}

#[tokio::test]
async fn test_query_validation() -> Result<()> {
    let (app, resources) = common::create_test_app().await?;
    let (_user, token) = common::create_test_user(&resources, "query@example.com").await?;
    let (_workout_id, exercise_id) = mixed_unit_fixture(&app, &token).await?;
    let base = format!("/api/v1/progress/exercise/{exercise_id}");

    let (status, body) =
        common::send(&app, Method::GET, &format!("{base}?{RANGE}"), Some(&token), None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "MISSING_REQUIRED_FIELD");

    for query in [
        format!("target_unit=stone&{RANGE}"),
        format!("target_unit=kg&date_range_preset=last_month&{RANGE}"),
        "target_unit=kg&date_range_preset=custom&start_date=2024-01-01".to_owned(),
        "target_unit=kg&date_range_preset=last_week".to_owned(),
        format!("target_unit=kg&include_trend=maybe&{RANGE}"),
        "target_unit=kg&start_date=01/01/2024".to_owned(),
    ] {
        let (status, body) = common::send(
            &app,
            Method::GET,
            &format!("{base}?{query}"),
            Some(&token),
            None,
        )
        .await?;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{query} accepted: {body}");
    }

    let (status, _) = common::send(
        &app,
        Method::GET,
        &format!("{base}?target_unit=kg&date_range_preset=custom&{RANGE}"),
        Some(&token),
        None,
    )
    .await?;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = common::send(
        &app,
        Method::GET,
        &format!("{base}?target_unit=kg&{RANGE}"),
        None,
        None,
    )
    .await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn test_preset_counts_back_from_today() -> Result<()> {
    let (app, resources) = common::create_test_app().await?;
    let (_user, token) = common::create_test_user(&resources, "preset@example.com").await?;
    let (_workout_id, exercise_id) = mixed_unit_fixture(&app, &token).await?;
    let today = chrono::Utc::now().date_naive().format("%Y-%m-%d").to_string();
    log_weight(&app, &token, &exercise_id, &today, 102.5, "kg").await?;

    let uri = format!(
        "/api/v1/progress/exercise/{exercise_id}?target_unit=kg&date_range_preset=last_month"
    );
    let (status, body) = common::send(&app, Method::GET, &uri, Some(&token), None).await?;
    assert_eq!(status, StatusCode::OK);
    let points = body["data_points"].as_array().unwrap();
    assert_eq!(points.len(), 1);
    assert_eq!(points[0]["date"], today);
    assert!(body["trend"].is_null());
    assert_eq!(body["weekly_progress"]["number_of_weeks"], 1);
    Ok(())
}

#[tokio::test]
async fn test_exercise_without_logs_in_range_is_not_found() -> Result<()> {
    let (app, resources) = common::create_test_app().await?;
    let (_user, token) = common::create_test_user(&resources, "empty@example.com").await?;
    let (_workout_id, exercise_id) = mixed_unit_fixture(&app, &token).await?;

    let uri = format!(
        "/api/v1/progress/exercise/{exercise_id}?target_unit=kg\
         &start_date=2023-01-01&end_date=2023-12-31"
    );
    let (status, body) = common::send(&app, Method::GET, &uri, Some(&token), None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "RESOURCE_NOT_FOUND");

    let uri = format!(
        "/api/v1/progress/exercise/{}?target_unit=kg&{RANGE}",
        uuid::Uuid::new_v4()
    );
    let (status, _) = common::send(&app, Method::GET, &uri, Some(&token), None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn test_workout_progress_skips_empty_exercises() -> Result<()> {
    let (app, resources) = common::create_test_app().await?;
    let (_user, token) = common::create_test_user(&resources, "workout@example.com").await?;
    let (workout_id, _squat) = mixed_unit_fixture(&app, &token).await?;
    let lunge = common::create_exercise(&app, &token, &workout_id, "Lunge").await?;
    let calf = common::create_exercise(&app, &token, &workout_id, "Calf Raise").await?;
    log_weight(&app, &token, &lunge, "2024-01-03", 40.0, "kg").await?;
    // Outside the requested range
    log_weight(&app, &token, &calf, "2023-06-01", 60.0, "kg").await?;

    let uri = format!("/api/v1/progress/workout/{workout_id}?target_unit=lbs&{RANGE}");
    let (status, body) = common::send(&app, Method::GET, &uri, Some(&token), None).await?;
    assert_eq!(status, StatusCode::OK, "{body}");

    let entries = body.as_array().unwrap();
    let names: Vec<&str> = entries
        .iter()
        .filter_map(|e| e["exercise_name"].as_str())
        .collect();
    assert_eq!(names, vec!["Squat", "Lunge"]);
    assert!(entries.iter().all(|e| e["target_unit"] == "lbs"));
    assert!(approx(&entries[1]["data_points"][0]["weight"], 88.184_9));

    // Presets do not apply to workout progress, only the explicit bounds do
    let uri = format!(
        "/api/v1/progress/workout/{workout_id}?target_unit=lbs&date_range_preset=custom&{RANGE}"
    );
    let (status, with_preset) = common::send(&app, Method::GET, &uri, Some(&token), None).await?;
    assert_eq!(status, StatusCode::OK, "{with_preset}");
    assert_eq!(with_preset, body);
    Ok(())
}

#[tokio::test]
async fn test_workout_progress_not_found_cases() -> Result<()> {
    let (app, resources) = common::create_test_app().await?;
    let (_user, token) = common::create_test_user(&resources, "nothing@example.com").await?;

    let bare = common::create_workout(&app, &token, "Empty").await?;
    let uri = format!("/api/v1/progress/workout/{bare}?target_unit=kg&{RANGE}");
    let (status, _) = common::send(&app, Method::GET, &uri, Some(&token), None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    common::create_exercise(&app, &token, &bare, "Plank").await?;
    let (status, _) = common::send(&app, Method::GET, &uri, Some(&token), None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let uri = format!(
        "/api/v1/progress/workout/{}?target_unit=kg&{RANGE}",
        uuid::Uuid::new_v4()
    );
    let (status, _) = common::send(&app, Method::GET, &uri, Some(&token), None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn test_progress_is_isolated_between_users() -> Result<()> {
    let (app, resources) = common::create_test_app().await?;
    let (_alice, alice) = common::create_test_user(&resources, "alice@example.com").await?;
    let (_bob, bob) = common::create_test_user(&resources, "bob@example.com").await?;
    let (workout_id, exercise_id) = mixed_unit_fixture(&app, &alice).await?;

    for uri in [
        format!("/api/v1/progress/exercise/{exercise_id}?target_unit=kg&{RANGE}"),
        format!("/api/v1/progress/workout/{workout_id}?target_unit=kg&{RANGE}"),
    ] {
        let (status, _) = common::send(&app, Method::GET, &uri, Some(&bob), None).await?;
        assert_eq!(status, StatusCode::NOT_FOUND, "bob could read {uri}");

        let (status, _) = common::send(&app, Method::GET, &uri, Some(&alice), None).await?;
        assert_eq!(status, StatusCode::OK);
    }
    Ok(())
}
