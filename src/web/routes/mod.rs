//! Contains all the routes that this application can handle.

mod activities;
mod home;

use crate::AppState;
use home::home;

use axum::{
    http::StatusCode,
    routing::{delete, get, post},
    Router,
};
use tower_http::services::ServeDir;

async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// All the routes of the server
pub fn routes(app_state: AppState) -> Router {
    let static_files = ServeDir::new(&app_state.static_dir);

    Router::new()
        .route("/", get(home))
        .merge(activity_routes(app_state))
        .nest_service("/static", static_files)
        .route("/health-check", get(health_check))
}

/// ACTIVITIES - listing and participant management
fn activity_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/activities", get(activities::list_activities))
        .route("/activities/{activity_name}/signup", post(activities::signup))
        .route(
            "/activities/{activity_name}/participants",
            delete(activities::remove_participant),
        )
        .with_state(app_state)
}
