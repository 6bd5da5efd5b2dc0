use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::workouts::application::errors::ApplicationError;
use crate::modules::workouts::use_cases::responses::{DetailResponse, MessageResponse};
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(workout_id): Path<i64>,
) -> impl IntoResponse {
    match state.tracker.delete_workout(workout_id).await {
        Ok(()) => Json(MessageResponse::new(format!("Workout {workout_id} deleted")))
            .into_response(),
        Err(ApplicationError::NotFound(_)) => (
            StatusCode::NOT_FOUND,
            Json(DetailResponse::new("Workout not found")),
        )
            .into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
