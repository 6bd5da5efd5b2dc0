use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::workouts::application::errors::ApplicationError;
use crate::modules::workouts::use_cases::responses::DetailResponse;
use crate::shell::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteWorkoutsByDateResponse {
    pub message: String,
    pub deleted: usize,
}

pub async fn handle(State(state): State<AppState>, Path(date): Path<String>) -> impl IntoResponse {
    match state.tracker.delete_workouts_by_date(&date).await {
        Ok(deleted) => {
            let noun = if deleted == 1 { "workout" } else { "workouts" };
            Json(DeleteWorkoutsByDateResponse {
                message: format!("Deleted {deleted} {noun} from {date}"),
                deleted,
            })
            .into_response()
        }
        Err(ApplicationError::InvalidDate(_)) => (
            StatusCode::BAD_REQUEST,
            Json(DetailResponse::new("Invalid date format. Use YYYY-MM-DD.")),
        )
            .into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
