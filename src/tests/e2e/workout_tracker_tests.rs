use axum::{
    Router,
    body::Body,
    http::{HeaderValue, Request, StatusCode},
};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use crate::modules::workouts::application::tracker::WorkoutTracker;
use crate::shared::infrastructure::workout_store::WorkoutStore;
use crate::shared::infrastructure::workout_store::sqlite::SqliteWorkoutStore;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::state::make_test_state;
use crate::tests::fixtures::workouts::NEW_WORKOUT_JSON;

fn app(state: AppState) -> Router {
    router(state, HeaderValue::from_static("http://localhost:5173"))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::delete(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn logs_a_workout_and_serves_it_back() {
    let app = app(make_test_state());

    let (status, logged) = send(&app, post_json("/workout", NEW_WORKOUT_JSON)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(logged["entry"]["id"], 1);

    let (_, exercises) = send(&app, get("/exercises")).await;
    let bench_presses = exercises
        .as_array()
        .unwrap()
        .iter()
        .filter(|e| *e == "Bench Press")
        .count();
    assert_eq!(bench_presses, 1);

    let (_, preset) = send(&app, get("/preset/Bench%20Press")).await;
    assert_eq!(preset, serde_json::json!({"sets": 5, "reps": 5, "weight": 100.0}));

    let (_, workouts) = send(&app, get("/workouts")).await;
    assert_eq!(workouts[0]["id"], 1);
    assert_eq!(workouts[0]["exercise"], "Bench Press");
    assert_eq!(workouts[0]["date"], "2024-01-15T10:00:00");
}

#[tokio::test]
async fn keeps_ids_increasing_across_deletions() {
    let app = app(make_test_state());
    for _ in 0..3 {
        send(&app, post_json("/workout", NEW_WORKOUT_JSON)).await;
    }

    let (status, _) = send(&app, delete("/workout/3")).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, delete("/workout/3")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, logged) = send(&app, post_json("/workout", NEW_WORKOUT_JSON)).await;
    assert_eq!(logged["entry"]["id"], 4);

    let (_, workouts) = send(&app, get("/workouts")).await;
    let ids: Vec<i64> = workouts
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 4]);
}

#[tokio::test]
async fn keeps_the_preset_after_its_workouts_are_deleted_by_date() {
    let app = app(make_test_state());
    send(
        &app,
        post_json(
            "/workout",
            r#"{"exercise":"overhead press","sets":4,"reps":6,"weight":45.0,"date":"2024-01-15T09:00:00"}"#,
        ),
    )
    .await;

    let (status, deleted) = send(&app, delete("/workouts/by_date/2024-01-15")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["deleted"], 1);

    let (_, workouts) = send(&app, get("/workouts")).await;
    assert_eq!(workouts, serde_json::json!([]));
    let (_, preset) = send(&app, get("/preset/Overhead%20Press")).await;
    assert_eq!(preset, serde_json::json!({"sets": 4, "reps": 6, "weight": 45.0}));

    let (status, _) = send(&app, delete("/workouts/by_date/not-a-date")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn restores_workouts_and_deletions_from_sqlite() {
    let store: Arc<dyn WorkoutStore> = Arc::new(
        SqliteWorkoutStore::connect("sqlite::memory:")
            .await
            .expect("connect failed"),
    );

    let first = app(AppState {
        tracker: Arc::new(WorkoutTracker::open(store.clone()).await.unwrap()),
    });
    send(&first, post_json("/workout", NEW_WORKOUT_JSON)).await;
    send(
        &first,
        post_json(
            "/workout",
            r#"{"exercise":"squat","sets":5,"reps":3,"weight":140.0,"date":"2024-01-16T10:00:00"}"#,
        ),
    )
    .await;
    send(&first, delete("/workout/1")).await;

    let second = app(AppState {
        tracker: Arc::new(WorkoutTracker::open(store).await.unwrap()),
    });
    let (_, workouts) = send(&second, get("/workouts")).await;
    assert_eq!(workouts.as_array().unwrap().len(), 1);
    assert_eq!(workouts[0]["id"], 2);
    assert_eq!(workouts[0]["exercise"], "Squat");

    let (_, preset) = send(&second, get("/preset/Squat")).await;
    assert_eq!(preset, serde_json::json!({"sets": 5, "reps": 3, "weight": 140.0}));

    let (_, logged) = send(&second, post_json("/workout", NEW_WORKOUT_JSON)).await;
    assert_eq!(logged["entry"]["id"], 3);
}
