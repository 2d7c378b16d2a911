use crate::{
    api::rejected,
    dto::{NarrationDto, SpeechDto},
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use campus_map::{narration::SpeechOptions, planner};
use serde::Deserialize;
use std::sync::Arc;
use tracing::error;

#[derive(Debug, Deserialize)]
pub struct SpeakBody {
    pub text: String,
    #[serde(default)]
    pub options: SpeechOptions,
}

pub async fn narration(State(state): State<Arc<AppState>>) -> Result<Response, StatusCode> {
    let session = state.session.lock().await;
    Ok(Json(NarrationDto::from(&*session)).into_response())
}

pub async fn toggle_narration(State(state): State<Arc<AppState>>) -> Result<Response, StatusCode> {
    let mut session = state.session.lock().await;
    session.narrator.toggle();
    Ok(Json(NarrationDto::from(&*session)).into_response())
}

pub async fn stop_narration(State(state): State<Arc<AppState>>) -> Result<Response, StatusCode> {
    let mut session = state.session.lock().await;
    session.narrator.stop();
    Ok(Json(NarrationDto::from(&*session)).into_response())
}

/// The client finished playing the active utterance.
pub async fn narration_finished(
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let mut session = state.session.lock().await;
    session.narrator.backend_mut().finish();
    Ok(Json(NarrationDto::from(&*session)).into_response())
}

pub async fn voice_settings(
    State(state): State<Arc<AppState>>,
    Json(options): Json<SpeechOptions>,
) -> Result<Response, StatusCode> {
    let mut session = state.session.lock().await;
    session.narrator.set_voice_settings(&options);
    Ok(Json(NarrationDto::from(&*session)).into_response())
}

pub async fn speak(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SpeakBody>,
) -> Result<Response, StatusCode> {
    let mut session = state.session.lock().await;
    let outcome = session
        .narrator
        .speak(&body.text, &body.options)
        .map_err(|err| {
            error!("Narration failed: {err}");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;
    Ok(Json(SpeechDto::new(outcome, &session)).into_response())
}

pub async fn describe_location(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let mut guard = state.session.lock().await;
    let session = &mut *guard;
    let location = session
        .resolve(&state.catalog, &id)
        .ok_or(StatusCode::NOT_FOUND)?;
    let outcome = session
        .narrator
        .speak_building_description(&location)
        .map_err(|err| {
            error!("Narration failed: {err}");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;
    Ok(Json(SpeechDto::new(outcome, session)).into_response())
}

/// Reads the route between the current endpoints out loud.
pub async fn speak_route(State(state): State<Arc<AppState>>) -> Result<Response, StatusCode> {
    let mut guard = state.session.lock().await;
    let session = &mut *guard;
    let (Some(start), Some(destination)) = (
        session.selection.start().cloned(),
        session.selection.destination().cloned(),
    ) else {
        return Ok(rejected(planner::Error::IncompleteSelection.notice()));
    };
    let outcome = session
        .narrator
        .speak_route_directions(&start, &destination, session.selection.route())
        .map_err(|err| {
            error!("Narration failed: {err}");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;
    Ok(Json(SpeechDto::new(outcome, session)).into_response())
}
