use crate::{
    dto::{LocationDto, MarkerDto},
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use campus_map::catalog::{self, Category};
use std::{collections::HashMap, sync::Arc};
use tracing::error;

/// Search panel listing: `q` filters by name or description, `category` by
/// category ("All" or absent for every one).
pub async fn locations(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let category: Option<Category> = match params.get("category").map(String::as_str) {
        None | Some("All") => None,
        Some(value) => Some(value.parse().map_err(|err| {
            error!("Bad category filter: {err}");
            StatusCode::BAD_REQUEST
        })?),
    };
    let term = params.get("q").map(String::as_str).unwrap_or_default();

    let session = state.session.lock().await;
    let query = catalog::Query::new()
        .term(term)
        .category(category)
        .including(session.current.as_ref());
    let result: Vec<_> = state
        .catalog
        .search(&query)
        .into_iter()
        .map(LocationDto::from)
        .collect();
    Ok(Json(result).into_response())
}

pub async fn suggest(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    if let Some(query) = params.get("q") {
        let count: usize = match params.get("count") {
            Some(value) => match value.parse() {
                Ok(value) => value,
                Err(_) => return Err(StatusCode::BAD_REQUEST),
            },
            None => 5,
        };
        let result: Vec<_> = state
            .catalog
            .suggest(query)
            .into_iter()
            .take(count)
            .map(LocationDto::from)
            .collect();
        Ok(Json(result).into_response())
    } else {
        Err(StatusCode::BAD_REQUEST)
    }
}

pub async fn location(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let session = state.session.lock().await;
    let location = session
        .resolve(&state.catalog, &id)
        .ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(LocationDto::from(&location)).into_response())
}

pub async fn markers(State(state): State<Arc<AppState>>) -> Result<Response, StatusCode> {
    let session = state.session.lock().await;
    let markers: Vec<_> = session
        .surface
        .markers(&state.catalog, session.current.as_ref())
        .into_iter()
        .map(MarkerDto::from)
        .collect();
    Ok(Json(markers).into_response())
}

pub async fn click_marker(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let mut guard = state.session.lock().await;
    let session = &mut *guard;
    let location = session
        .surface
        .click_marker(&id, &state.catalog, &mut session.selection)
        .map_err(|err| {
            error!("Marker click failed: {err}");
            StatusCode::NOT_FOUND
        })?;
    Ok(Json(LocationDto::from(&location)).into_response())
}
