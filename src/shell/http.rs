use axum::{
    Json, Router,
    http::HeaderValue,
    response::IntoResponse,
    routing::{delete, get, post},
};
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::modules::workouts::use_cases::add_exercise::inbound::http as add_exercise_http;
use crate::modules::workouts::use_cases::delete_workout::inbound::http as delete_workout_http;
use crate::modules::workouts::use_cases::delete_workouts_by_date::inbound::http as delete_by_date_http;
use crate::modules::workouts::use_cases::get_preset::inbound::http as get_preset_http;
use crate::modules::workouts::use_cases::list_exercises::inbound::http as list_exercises_http;
use crate::modules::workouts::use_cases::list_workouts::inbound::http as list_workouts_http;
use crate::modules::workouts::use_cases::log_workout::inbound::http as log_workout_http;
use crate::modules::workouts::use_cases::responses::MessageResponse;
use crate::shell::state::AppState;

pub fn router(state: AppState, allowed_origin: HeaderValue) -> Router {
    Router::new()
        .route("/", get(welcome))
        .route("/workout", post(log_workout_http::handle))
        .route("/workout/{workout_id}", delete(delete_workout_http::handle))
        .route("/workouts", get(list_workouts_http::handle))
        .route(
            "/workouts/by_date/{date}",
            delete(delete_by_date_http::handle),
        )
        .route(
            "/exercises",
            get(list_exercises_http::handle).post(add_exercise_http::handle),
        )
        .route("/preset/{exercise}", get(get_preset_http::handle))
        .with_state(state)
        .layer(cors(allowed_origin))
        .layer(TraceLayer::new_for_http())
}

/// One trusted origin, any method or header, cookies allowed.
fn cors(allowed_origin: HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allowed_origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

async fn welcome() -> impl IntoResponse {
    Json(MessageResponse::new("Welcome to the Workout Tracker API 💪"))
}
