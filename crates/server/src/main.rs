mod api;
mod app;
mod dto;
mod osrm;
mod state;

use crate::{osrm::OsrmClient, state::AppState};
use campus_map::prelude::*;
use std::{sync::Arc, time::Instant};
use tracing::{error, info};

const PORT: u32 = 3000;
const OSRM_URL: &str = "https://router.project-osrm.org";
const OSRM_PROFILE: &str = "driving";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();

    info!("Starting server...");
    let now = Instant::now();
    // Optional path to a locations csv, the bundled campus data otherwise
    let catalog = match std::env::args().nth(1) {
        Some(path) => {
            info!("Loading locations from {path}");
            Catalog::from_path(&path)
        }
        None => Catalog::campus(),
    };
    let catalog = match catalog {
        Ok(catalog) => catalog,
        Err(err) => {
            error!("Failed to load locations: {err}");
            std::process::exit(1);
        }
    };
    info!(
        "Loading {} locations took {:?}",
        catalog.len(),
        now.elapsed()
    );

    let state = Arc::new(AppState::new(
        Config::default(),
        catalog,
        OsrmClient::new(OSRM_URL, OSRM_PROFILE),
    ));
    let app = app::router(state);

    let listener = match tokio::net::TcpListener::bind(format!("0.0.0.0:{}", PORT)).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("Failed to bind port {PORT}: {err}");
            std::process::exit(1);
        }
    };
    info!("Listening to port {PORT}");
    if let Err(err) = axum::serve(listener, app).await {
        error!("Server stopped: {err}");
    }
}
