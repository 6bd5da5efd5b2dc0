use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::workouts::core::workout::{NewWorkout, WorkoutEntry};
use crate::shell::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct LogWorkoutResponse {
    pub message: String,
    pub entry: WorkoutEntry,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<NewWorkout>, JsonRejection>,
) -> impl IntoResponse {
    let Json(workout) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.tracker.log_workout(workout).await {
        Ok(entry) => Json(LogWorkoutResponse {
            message: "Workout saved!".into(),
            entry,
        })
        .into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
