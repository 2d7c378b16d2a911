use crate::{
    map::TileLayer,
    narration::VoiceSettings,
    shared::geo::{Coordinate, DEGREE_DISTANCE, Distance},
};

/// Campus center, also the fallback coordinate.
pub const CAMPUS_CENTER: Coordinate = Coordinate::new(6.6717, 3.1583);

#[derive(Debug, Clone)]
pub struct Config {
    pub campus_center: Coordinate,
    /// Device positions at or beyond this distance from the center are
    /// replaced by the center.
    pub campus_radius: Distance,
    /// Length of one degree for the probe's equirectangular distance.
    pub degree_distance: Distance,
    pub tile_layer: TileLayer,
    pub default_zoom: u8,
    /// Zoom used when flying to a selected location.
    pub selection_zoom: u8,
    pub voice: VoiceSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            campus_center: CAMPUS_CENTER,
            campus_radius: Distance::from_kilometers(10.0),
            degree_distance: DEGREE_DISTANCE,
            tile_layer: TileLayer::default(),
            default_zoom: 16,
            selection_zoom: 18,
            voice: VoiceSettings::default(),
        }
    }
}
