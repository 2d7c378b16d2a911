use campus_map::{
    catalog::{CURRENT_LOCATION_ID, FALLBACK_LOCATION_ID},
    narration::Capture,
    prelude::*,
};
use tokio::sync::Mutex;
use tracing::debug;

use crate::osrm::OsrmClient;

pub struct AppState {
    pub config: Config,
    pub catalog: Catalog,
    pub osrm: OsrmClient,
    pub session: Mutex<Session>,
}

impl AppState {
    pub fn new(config: Config, catalog: Catalog, osrm: OsrmClient) -> Self {
        let session = Session::new(&config);
        Self {
            config,
            catalog,
            osrm,
            session: Mutex::new(session),
        }
    }
}

/// Everything one user has in flight. The server hosts exactly one.
pub struct Session {
    pub selection: Selection,
    pub surface: MapSurface,
    pub narrator: Narrator<Capture>,
    pub probe: GeolocationProbe,
    pub panel: SearchPanel,
    /// Set by the last geolocation report.
    pub current: Option<Location>,
}

impl Session {
    pub fn new(config: &Config) -> Self {
        let mut selection = Selection::new();
        selection.subscribe(|event, selection| {
            debug!(
                ?event,
                start = selection.start().map(|l| l.name.as_ref()),
                destination = selection.destination().map(|l| l.name.as_ref()),
                "Selection changed"
            );
        });
        Self {
            selection,
            surface: MapSurface::new(config),
            narrator: Narrator::new(Capture::new()).with_settings(config.voice),
            probe: GeolocationProbe::new(config),
            panel: SearchPanel::new(),
            current: None,
        }
    }

    /// Looks up a catalog location, or one of the synthetic ones.
    pub fn resolve(&self, catalog: &Catalog, id: &str) -> Option<Location> {
        match id {
            CURRENT_LOCATION_ID | FALLBACK_LOCATION_ID => self
                .current
                .clone()
                .filter(|current| current.id.as_ref() == id)
                .or_else(|| (id == FALLBACK_LOCATION_ID).then(|| self.probe.fallback())),
            _ => catalog.get(id).cloned(),
        }
    }

    /// Start point for "navigate here": the user's location, else the campus center.
    pub fn start_or_fallback(&self) -> Location {
        self.current
            .clone()
            .unwrap_or_else(|| self.probe.fallback())
    }
}
