use crate::{dto::ProbeDto, state::AppState};
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use campus_map::{geolocation::PositionError, shared::Coordinate};
use std::{collections::HashMap, sync::Arc};

/// The client reports what its geolocation API returned: `lat` and `lon`, or
/// `error` (`denied`, `unavailable`, `timeout`). A report with neither means
/// the client has no geolocation. Reporting again is the retry.
pub async fn report_position(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let report = position_from_params(&params)?;

    let mut session = state.session.lock().await;
    let probe = session.probe.probe(&mut || report);
    session.current = Some(probe.location.clone());
    Ok(Json(ProbeDto::from(&probe)).into_response())
}

fn position_from_params(
    params: &HashMap<String, String>,
) -> Result<Result<Coordinate, PositionError>, StatusCode> {
    if let Some(error) = params.get("error") {
        let error = match error.as_str() {
            "denied" => PositionError::PermissionDenied,
            "unavailable" => PositionError::Unavailable,
            "timeout" => PositionError::Timeout,
            "unsupported" => PositionError::Unsupported,
            _ => return Err(StatusCode::BAD_REQUEST),
        };
        return Ok(Err(error));
    }

    match (params.get("lat"), params.get("lon")) {
        (Some(latitude), Some(longitude)) => {
            let latitude: f64 = latitude.parse().map_err(|_| StatusCode::BAD_REQUEST)?;
            let longitude: f64 = longitude.parse().map_err(|_| StatusCode::BAD_REQUEST)?;
            let coordinate = Coordinate::new(latitude, longitude);
            if coordinate.is_valid() {
                Ok(Ok(coordinate))
            } else {
                Err(StatusCode::BAD_REQUEST)
            }
        }
        (None, None) => Ok(Err(PositionError::Unsupported)),
        _ => Err(StatusCode::BAD_REQUEST),
    }
}
