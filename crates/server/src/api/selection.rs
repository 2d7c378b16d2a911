use crate::{
    api::{rejected, sync_map},
    dto::SelectionDto,
    state::{AppState, Session},
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use campus_map::{catalog::Location, narration::SelectionKind, planner, planner::PickMode};
use std::sync::Arc;
use tracing::error;

pub async fn selection(State(state): State<Arc<AppState>>) -> Result<Response, StatusCode> {
    let session = state.session.lock().await;
    Ok(Json(SelectionDto::from(&*session)).into_response())
}

pub async fn select(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let mut guard = state.session.lock().await;
    let session = &mut *guard;
    let location = session
        .resolve(&state.catalog, &id)
        .ok_or(StatusCode::NOT_FOUND)?;
    session.selection.set_selected(Some(location.clone()));
    speak_selection(session, &location, SelectionKind::Selected);
    sync_map(&state, session);
    Ok(Json(SelectionDto::from(&*session)).into_response())
}

pub async fn deselect(State(state): State<Arc<AppState>>) -> Result<Response, StatusCode> {
    let mut guard = state.session.lock().await;
    let session = &mut *guard;
    session.selection.set_selected(None);
    Ok(Json(SelectionDto::from(&*session)).into_response())
}

pub async fn set_start(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let mut guard = state.session.lock().await;
    let session = &mut *guard;
    let location = session
        .resolve(&state.catalog, &id)
        .ok_or(StatusCode::NOT_FOUND)?;
    session.selection.set_start(Some(location.clone()));
    speak_selection(session, &location, SelectionKind::Start);
    sync_map(&state, session);
    Ok(Json(SelectionDto::from(&*session)).into_response())
}

pub async fn clear_start(State(state): State<Arc<AppState>>) -> Result<Response, StatusCode> {
    let mut guard = state.session.lock().await;
    let session = &mut *guard;
    session.selection.set_start(None);
    sync_map(&state, session);
    Ok(Json(SelectionDto::from(&*session)).into_response())
}

pub async fn set_destination(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let mut guard = state.session.lock().await;
    let session = &mut *guard;
    let location = session
        .resolve(&state.catalog, &id)
        .ok_or(StatusCode::NOT_FOUND)?;
    session.selection.set_destination(Some(location.clone()));
    speak_selection(session, &location, SelectionKind::Destination);
    sync_map(&state, session);
    Ok(Json(SelectionDto::from(&*session)).into_response())
}

pub async fn clear_destination(
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let mut guard = state.session.lock().await;
    let session = &mut *guard;
    session.selection.set_destination(None);
    sync_map(&state, session);
    Ok(Json(SelectionDto::from(&*session)).into_response())
}

pub async fn swap(State(state): State<Arc<AppState>>) -> Result<Response, StatusCode> {
    let mut guard = state.session.lock().await;
    let session = &mut *guard;
    let notice = planner::swap_points(&mut session.selection);
    sync_map(&state, session);
    Ok(Json(notice).into_response())
}

pub async fn set_pick_mode(
    Path(mode): Path<PickMode>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let mut session = state.session.lock().await;
    session.panel.set_mode(mode);
    Ok(Json(session.panel.mode()).into_response())
}

/// A click in the search panel result list.
pub async fn pick(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let mut guard = state.session.lock().await;
    let session = &mut *guard;
    let location = session
        .resolve(&state.catalog, &id)
        .ok_or(StatusCode::NOT_FOUND)?;
    let notice = session.panel.pick(location, &mut session.selection);
    sync_map(&state, session);
    Ok(Json(notice).into_response())
}

pub async fn use_current(State(state): State<Arc<AppState>>) -> Result<Response, StatusCode> {
    let mut guard = state.session.lock().await;
    let session = &mut *guard;
    match planner::use_current_location(&mut session.selection, session.current.as_ref()) {
        Ok(notice) => {
            sync_map(&state, session);
            Ok(Json(notice).into_response())
        }
        Err(err) => Ok(rejected(err.notice())),
    }
}

/// "Navigate here" from a location's detail card.
pub async fn navigate(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let mut guard = state.session.lock().await;
    let session = &mut *guard;
    let location = session
        .resolve(&state.catalog, &id)
        .ok_or(StatusCode::NOT_FOUND)?;
    let start = session.start_or_fallback();
    let notice = planner::navigate_here(&mut session.selection, location.clone(), start);
    speak_selection(session, &location, SelectionKind::Destination);
    sync_map(&state, session);
    Ok(Json(notice).into_response())
}

fn speak_selection(session: &mut Session, location: &Location, kind: SelectionKind) {
    if let Err(err) = session.narrator.speak_location_selection(location, kind) {
        error!("Failed to announce selection: {err}");
    }
}
