use campus_map::{map::RouteStatus, planner::PickMode, route::RequestId};
use serde::Serialize;

use crate::{
    dto::{LocationDto, RouteDto},
    state::Session,
};

#[derive(Clone, Debug, Serialize)]
pub struct SelectionDto {
    pub selected: Option<LocationDto>,
    pub start: Option<LocationDto>,
    pub destination: Option<LocationDto>,
    pub route: Option<RouteDto>,
    pub pick_mode: PickMode,
    /// Request behind the routing overlay and where it stands.
    pub route_request: Option<RequestId>,
    pub route_status: Option<RouteStatus>,
    pub current: Option<LocationDto>,
}

impl From<&Session> for SelectionDto {
    fn from(session: &Session) -> Self {
        let selection = &session.selection;
        Self {
            selected: selection.selected().map(LocationDto::from),
            start: selection.start().map(LocationDto::from),
            destination: selection.destination().map(LocationDto::from),
            route: selection.route().map(RouteDto::from),
            pick_mode: session.panel.mode(),
            route_request: session.surface.active_request().map(|request| request.id),
            route_status: session.surface.route_status(),
            current: session.current.as_ref().map(LocationDto::from),
        }
    }
}
