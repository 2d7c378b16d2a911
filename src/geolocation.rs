use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    catalog::Location,
    config::Config,
    notice::Notice,
    shared::geo::{Coordinate, Distance},
};

/// Why the device couldn't report a position.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PositionError {
    #[error("Geolocation is not supported")]
    Unsupported,
    #[error("Permission to read the location was denied")]
    PermissionDenied,
    #[error("Position unavailable")]
    Unavailable,
    #[error("Timed out waiting for a position")]
    Timeout,
}

/// A device positioning capability. One request at a time, no cancellation.
pub trait PositionSource {
    fn current_position(&mut self) -> Result<Coordinate, PositionError>;
}

impl<F> PositionSource for F
where
    F: FnMut() -> Result<Coordinate, PositionError>,
{
    fn current_position(&mut self) -> Result<Coordinate, PositionError> {
        self()
    }
}

/// How a probe arrived at its location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Resolution {
    /// The device position was within the campus radius.
    Device,
    /// The device position was too far away.
    OutsideCampus { distance: Distance },
    Failed { error: PositionError },
}

/// The result of one geolocation attempt. `location` is always usable.
#[derive(Debug, Clone, PartialEq)]
pub struct Probe {
    pub location: Location,
    pub resolution: Resolution,
    pub located_at: DateTime<Utc>,
}

impl Probe {
    pub fn is_fallback(&self) -> bool {
        !matches!(self.resolution, Resolution::Device)
    }

    /// The transient message to show for this attempt.
    pub fn notice(&self) -> Notice {
        match self.resolution {
            Resolution::Device => {
                Notice::info("Location Found", "Your current location is set.")
            }
            Resolution::OutsideCampus { .. } => Notice::warning(
                "Location Outside Campus",
                "Using campus center as fallback.",
            ),
            Resolution::Failed {
                error: PositionError::Unsupported,
            } => Notice::warning(
                "Geolocation Not Supported",
                "Using campus center as fallback.",
            ),
            Resolution::Failed { .. } => Notice::warning(
                "Location Error",
                "Unable to fetch location. Using fallback.",
            )
            .with_retry(),
        }
    }
}

/// Decides what counts as the user's current location.
///
/// A device position strictly closer than the campus radius is adopted as
/// is; anything else, including errors, yields the campus center. Probing
/// again is the retry.
#[derive(Debug, Clone)]
pub struct GeolocationProbe {
    center: Coordinate,
    radius: Distance,
    degree_distance: Distance,
}

impl GeolocationProbe {
    pub fn new(config: &Config) -> Self {
        Self {
            center: config.campus_center,
            radius: config.campus_radius,
            degree_distance: config.degree_distance,
        }
    }

    pub fn center(&self) -> Coordinate {
        self.center
    }

    pub fn fallback(&self) -> Location {
        Location::fallback(self.center)
    }

    pub fn probe<S: PositionSource + ?Sized>(&self, source: &mut S) -> Probe {
        let (location, resolution) = match source.current_position() {
            Ok(coordinate) => {
                let distance = self
                    .center
                    .equirectangular_distance(&coordinate, self.degree_distance);
                if distance < self.radius {
                    debug!("Device position {coordinate} adopted");
                    (Location::current(coordinate), Resolution::Device)
                } else {
                    warn!(
                        "Device position {coordinate} is {} km from campus, using fallback",
                        distance
                    );
                    (self.fallback(), Resolution::OutsideCampus { distance })
                }
            }
            Err(error) => {
                warn!("Geolocation failed: {error}, using fallback");
                (self.fallback(), Resolution::Failed { error })
            }
        };
        Probe {
            location,
            resolution,
            located_at: Utc::now(),
        }
    }
}
