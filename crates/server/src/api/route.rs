use crate::{
    api::{rejected, replan_map, sync_map},
    dto::RouteDto,
    state::AppState,
};
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use campus_map::planner;
use std::sync::Arc;

/// The last route the engine found for the current endpoints.
pub async fn route(State(state): State<Arc<AppState>>) -> Result<Response, StatusCode> {
    let session = state.session.lock().await;
    let route = session.selection.route().ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(RouteDto::from(route)).into_response())
}

pub async fn plan_route(State(state): State<Arc<AppState>>) -> Result<Response, StatusCode> {
    let mut guard = state.session.lock().await;
    let session = &mut *guard;
    match planner::plan_route(&session.selection) {
        Ok(notice) => {
            replan_map(&state, session);
            Ok(Json(notice).into_response())
        }
        Err(err) => Ok(rejected(err.notice())),
    }
}

/// Drops the route together with both endpoints.
pub async fn clear_route(State(state): State<Arc<AppState>>) -> Result<Response, StatusCode> {
    let mut guard = state.session.lock().await;
    let session = &mut *guard;
    session.selection.clear_route();
    sync_map(&state, session);
    Ok(StatusCode::NO_CONTENT.into_response())
}
