use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    catalog::{Catalog, Location},
    config::Config,
    route::{RequestId, RouteRequest, RouteResult},
    selection::Selection,
    shared::geo::Coordinate,
};

#[derive(Error, Debug)]
pub enum Error {
    #[error("No marker for location id {0}")]
    UnknownMarker(String),
}

/// Where basemap tiles come from and whom to credit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TileLayer {
    pub url_template: String,
    pub attribution: String,
}

impl Default for TileLayer {
    fn default() -> Self {
        Self {
            url_template: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".into(),
            attribution: "© <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors".into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    pub center: Coordinate,
    pub zoom: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerKind {
    Location,
    CurrentLocation,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub location_id: Arc<str>,
    pub coordinate: Coordinate,
    /// Popup heading.
    pub title: Arc<str>,
    /// Popup body, empty for the user's own marker.
    pub subtitle: String,
    pub kind: MarkerKind,
}

/// Where the routing overlay's request stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteStatus {
    /// Waiting on the engine.
    Pending,
    Found,
    /// The engine answered without a route.
    NoRoute,
    /// The engine couldn't be reached or reported an error.
    Failed,
}

/// The routing overlay currently on the map, tied to the endpoints it was
/// created for.
#[derive(Debug, Clone)]
struct RoutingControl {
    request: RouteRequest,
    start_id: Arc<str>,
    destination_id: Arc<str>,
    status: RouteStatus,
}

impl RoutingControl {
    fn serves(&self, start: &Location, destination: &Location) -> bool {
        self.start_id == start.id
            && self.destination_id == destination.id
            && self.request.from == start.coordinate
            && self.request.to == destination.coordinate
    }
}

/// Model of the rendered map: basemap, markers, viewport and routing overlay.
///
/// Path computation is external. [`MapSurface::sync_route`] hands out a
/// [`RouteRequest`] and the engine's answer comes back through
/// [`MapSurface::routes_found`]; answers for a control that has since been
/// removed are dropped.
#[derive(Debug, Clone)]
pub struct MapSurface {
    tile_layer: TileLayer,
    viewport: Viewport,
    selection_zoom: u8,
    control: Option<RoutingControl>,
    next_request: RequestId,
}

impl MapSurface {
    pub fn new(config: &Config) -> Self {
        Self {
            tile_layer: config.tile_layer.clone(),
            viewport: Viewport {
                center: config.campus_center,
                zoom: config.default_zoom,
            },
            selection_zoom: config.selection_zoom,
            control: None,
            next_request: 0,
        }
    }

    pub fn tile_layer(&self) -> &TileLayer {
        &self.tile_layer
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The request behind the routing overlay, answered or not.
    pub fn active_request(&self) -> Option<&RouteRequest> {
        self.control.as_ref().map(|control| &control.request)
    }

    pub fn route_status(&self) -> Option<RouteStatus> {
        self.control.as_ref().map(|control| control.status)
    }

    /// One marker per catalog location, plus the user's own position when known.
    pub fn markers(&self, catalog: &Catalog, current: Option<&Location>) -> Vec<Marker> {
        let mut markers: Vec<Marker> = catalog
            .locations()
            .iter()
            .map(|location| Marker {
                location_id: location.id.clone(),
                coordinate: location.coordinate,
                title: location.name.clone(),
                subtitle: location.category.to_string(),
                kind: MarkerKind::Location,
            })
            .collect();
        if let Some(current) = current {
            markers.push(Marker {
                location_id: current.id.clone(),
                coordinate: current.coordinate,
                title: "Your Location".into(),
                subtitle: String::new(),
                kind: MarkerKind::CurrentLocation,
            });
        }
        markers
    }

    /// A click on a location marker selects that location.
    pub fn click_marker(
        &mut self,
        id: &str,
        catalog: &Catalog,
        selection: &mut Selection,
    ) -> Result<Location, Error> {
        let location = catalog
            .get(id)
            .ok_or_else(|| Error::UnknownMarker(id.to_string()))?
            .clone();
        selection.set_selected(Some(location.clone()));
        self.follow_selection(selection);
        Ok(location)
    }

    /// Flies the viewport to the selected location. Returns whether it moved.
    pub fn follow_selection(&mut self, selection: &Selection) -> bool {
        let Some(selected) = selection.selected() else {
            return false;
        };
        let target = Viewport {
            center: selected.coordinate,
            zoom: self.selection_zoom,
        };
        if self.viewport == target {
            return false;
        }
        debug!("Flying to {} ({})", selected.name, selected.coordinate);
        self.viewport = target;
        true
    }

    /// Brings the routing overlay in line with the selected endpoints.
    ///
    /// With both endpoints set and no overlay serving them, the old overlay is
    /// replaced and the request for the new one is returned. Identical start
    /// and destination go through unchanged. With an endpoint missing, the
    /// overlay is removed and the stored route cleared.
    ///
    /// An overlay whose request failed or found nothing stays quiet until an
    /// endpoint changes or [`MapSurface::replan`] is called.
    pub fn sync_route(&mut self, selection: &mut Selection) -> Option<RouteRequest> {
        if !selection.is_complete() {
            if let Some(control) = self.control.take() {
                debug!("Removing routing control {}", control.request.id);
            }
            selection.set_route(None);
            return None;
        }
        let (Some(start), Some(destination)) = (selection.start(), selection.destination()) else {
            return None;
        };
        if self.control.as_ref().is_some_and(|control| {
            control.serves(start, destination)
                && (control.status != RouteStatus::Found || selection.route().is_some())
        }) {
            return None;
        }

        let request = RouteRequest {
            id: self.next_request,
            from: start.coordinate,
            to: destination.coordinate,
        };
        self.next_request += 1;
        if start.same_as(destination) {
            warn!("Routing from {} to itself", start.name);
        }
        debug!(
            "Requesting route {} from {} to {}",
            request.id, start.name, destination.name
        );
        self.control = Some(RoutingControl {
            request,
            start_id: start.id.clone(),
            destination_id: destination.id.clone(),
            status: RouteStatus::Pending,
        });
        Some(request)
    }

    /// An explicit request to route again: an overlay that failed or found
    /// nothing is replaced, anything else behaves like [`MapSurface::sync_route`].
    pub fn replan(&mut self, selection: &mut Selection) -> Option<RouteRequest> {
        if self.control.as_ref().is_some_and(|control| {
            matches!(control.status, RouteStatus::Failed | RouteStatus::NoRoute)
        }) {
            self.control = None;
        }
        self.sync_route(selection)
    }

    /// The engine answered `id`. Stores the first candidate route if the
    /// overlay that asked is still on the map. Returns whether it was stored.
    pub fn routes_found(
        &mut self,
        id: RequestId,
        routes: Vec<RouteResult>,
        selection: &mut Selection,
    ) -> bool {
        match self.control.as_mut() {
            Some(control) if control.request.id == id => {
                let Some(route) = routes.into_iter().next() else {
                    warn!("Routing engine answered request {id} without routes");
                    control.status = RouteStatus::NoRoute;
                    return false;
                };
                control.status = RouteStatus::Found;
                selection.set_route(Some(route));
                true
            }
            _ => {
                debug!("Discarding routes for stale request {id}");
                false
            }
        }
    }

    /// The engine couldn't answer `id`. Returns whether the overlay that asked
    /// is still on the map.
    pub fn route_failed(&mut self, id: RequestId) -> bool {
        match self.control.as_mut() {
            Some(control) if control.request.id == id => {
                control.status = RouteStatus::Failed;
                true
            }
            _ => {
                debug!("Ignoring failure of stale request {id}");
                false
            }
        }
    }
}
