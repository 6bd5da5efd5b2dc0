use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::workouts::use_cases::responses::MessageResponse;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct AddExerciseBody {
    pub exercise: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<AddExerciseBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let message = format!("Exercise '{}' added successfully!", body.exercise);
    state.tracker.add_exercise(body.exercise).await;
    Json(MessageResponse::new(message)).into_response()
}
