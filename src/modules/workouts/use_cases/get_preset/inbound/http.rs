use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(exercise): Path<String>,
) -> impl IntoResponse {
    Json(state.tracker.preset(&exercise).await)
}
