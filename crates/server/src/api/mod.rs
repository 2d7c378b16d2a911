mod geolocation;
mod locations;
mod narration;
mod pages;
mod route;
mod selection;

pub use geolocation::*;
pub use locations::*;
pub use narration::*;
pub use pages::*;
pub use route::*;
pub use selection::*;

use crate::state::{AppState, Session};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use campus_map::{notice::Notice, route::RouteRequest};
use std::sync::Arc;
use tracing::{debug, error};

/// Lets the map catch up with the selection: fly to the selected location
/// and, when both endpoints are new, ask the routing engine in the background.
pub(crate) fn sync_map(state: &Arc<AppState>, session: &mut Session) {
    session.surface.follow_selection(&session.selection);
    if let Some(request) = session.surface.sync_route(&mut session.selection) {
        request_route(state, request);
    }
}

/// Like [`sync_map`], but also retries a request that failed or found nothing.
pub(crate) fn replan_map(state: &Arc<AppState>, session: &mut Session) {
    session.surface.follow_selection(&session.selection);
    if let Some(request) = session.surface.replan(&mut session.selection) {
        request_route(state, request);
    }
}

fn request_route(state: &Arc<AppState>, request: RouteRequest) {
    let state = state.clone();
    tokio::spawn(async move {
        let result = state.osrm.route(&request).await;
        let mut guard = state.session.lock().await;
        let session = &mut *guard;
        match result {
            Ok(routes) => {
                if session
                    .surface
                    .routes_found(request.id, routes, &mut session.selection)
                {
                    debug!("Stored route for request {}", request.id);
                }
            }
            Err(err) => {
                error!("Routing request {} failed: {err}", request.id);
                session.surface.route_failed(request.id);
            }
        }
    });
}

/// A rejected user action, answered with the notice to show.
pub(crate) fn rejected(notice: Notice) -> Response {
    (StatusCode::UNPROCESSABLE_ENTITY, Json(notice)).into_response()
}
