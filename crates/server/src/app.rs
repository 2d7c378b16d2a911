use crate::{api, state::AppState};
use axum::{
    Router,
    routing::{delete, get, post, put},
};
use std::sync::Arc;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/locations", get(api::locations))
        .route("/api/locations/suggest", get(api::suggest))
        .route("/api/locations/{id}", get(api::location))
        .route("/api/markers", get(api::markers))
        .route("/api/markers/{id}/click", post(api::click_marker))
        .route("/api/selection", get(api::selection))
        .route("/api/selection/selected", delete(api::deselect))
        .route("/api/selection/selected/{id}", put(api::select))
        .route("/api/selection/start", delete(api::clear_start))
        .route("/api/selection/start/{id}", put(api::set_start))
        .route("/api/selection/destination", delete(api::clear_destination))
        .route("/api/selection/destination/{id}", put(api::set_destination))
        .route("/api/selection/swap", post(api::swap))
        .route("/api/selection/pick-mode/{mode}", put(api::set_pick_mode))
        .route("/api/selection/pick/{id}", post(api::pick))
        .route("/api/selection/use-current", post(api::use_current))
        .route("/api/selection/navigate/{id}", post(api::navigate))
        .route("/api/route", get(api::route).delete(api::clear_route))
        .route("/api/route/plan", post(api::plan_route))
        .route("/api/geolocation", post(api::report_position))
        .route("/api/narration", get(api::narration))
        .route("/api/narration/toggle", post(api::toggle_narration))
        .route("/api/narration/stop", post(api::stop_narration))
        .route("/api/narration/finished", post(api::narration_finished))
        .route("/api/narration/settings", put(api::voice_settings))
        .route("/api/narration/speak", post(api::speak))
        .route("/api/narration/locations/{id}", post(api::describe_location))
        .route("/api/narration/route", post(api::speak_route))
        .fallback(api::page)
        .with_state(state)
}
