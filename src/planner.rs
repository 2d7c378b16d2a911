use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::{catalog::Location, notice::Notice, selection::Selection};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Both a start point and a destination are needed")]
    IncompleteSelection,
    #[error("The current location is not known yet")]
    LocationUnavailable,
}

impl Error {
    pub fn notice(&self) -> Notice {
        match self {
            Error::IncompleteSelection => Notice::warning(
                "Incomplete Selection",
                "Please select both start and end points.",
            ),
            Error::LocationUnavailable => Notice::warning(
                "Location Unavailable",
                "Please retry location or select a start point.",
            )
            .with_retry(),
        }
    }
}

/// Which endpoint the search panel fills next.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PickMode {
    #[default]
    Start,
    End,
}

/// The search panel's two step pick: a start point, then a destination.
#[derive(Debug, Clone, Default)]
pub struct SearchPanel {
    mode: PickMode,
}

impl SearchPanel {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn mode(&self) -> PickMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: PickMode) {
        self.mode = mode;
    }

    /// Fills the endpoint the panel is on. Picking a start moves the panel
    /// on to the destination; picking the destination also selects it.
    pub fn pick(&mut self, location: Location, selection: &mut Selection) -> Notice {
        match self.mode {
            PickMode::Start => {
                let notice = Notice::info(
                    "Start Point Set",
                    format!("{} set as starting point.", location.name),
                );
                selection.set_start(Some(location));
                self.mode = PickMode::End;
                notice
            }
            PickMode::End => {
                let from = selection
                    .start()
                    .map(|start| start.name.to_string())
                    .unwrap_or_else(|| "Unknown".to_string());
                let notice = Notice::info(
                    "Route Planned",
                    format!("Navigating from {} to {}", from, location.name),
                );
                selection.set_destination(Some(location.clone()));
                selection.set_selected(Some(location));
                notice
            }
        }
    }
}

/// Confirms a route can be drawn with the current endpoints.
pub fn plan_route(selection: &Selection) -> Result<Notice, Error> {
    match (selection.start(), selection.destination()) {
        (Some(start), Some(destination)) => Ok(Notice::info(
            "Route Planned",
            format!("Navigating from {} to {}", start.name, destination.name),
        )),
        _ => Err(Error::IncompleteSelection),
    }
}

/// Uses the probed current location as the start point.
pub fn use_current_location(
    selection: &mut Selection,
    current: Option<&Location>,
) -> Result<Notice, Error> {
    let current = current.ok_or(Error::LocationUnavailable)?;
    selection.set_start(Some(current.clone()));
    Ok(Notice::info(
        "Start Point Set",
        format!("Using {} as start point.", current.name),
    ))
}

/// Routes from `start` (the current location, or the fallback when unknown)
/// to `location`.
pub fn navigate_here(selection: &mut Selection, location: Location, start: Location) -> Notice {
    debug!("Navigating from {} to {}", start.name, location.name);
    let notice = Notice::info(
        "Route Planned",
        format!("Navigating from {} to {}", start.name, location.name),
    );
    selection.set_start(Some(start));
    selection.set_destination(Some(location));
    notice
}

pub fn swap_points(selection: &mut Selection) -> Notice {
    selection.swap();
    let name = |location: Option<&Location>| {
        location
            .map(|location| location.name.to_string())
            .unwrap_or_else(|| "Unknown".to_string())
    };
    Notice::info(
        "Points Swapped",
        format!(
            "Now navigating from {} to {}.",
            name(selection.start()),
            name(selection.destination())
        ),
    )
}
