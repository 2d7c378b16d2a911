use campus_map::{
    catalog::{Category, Location},
    geolocation::{Probe, Resolution},
    map::{Marker, MarkerKind},
    notice::Notice,
    shared::Coordinate,
};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct LocationDto {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub coordinate: Coordinate,
    pub description: String,
    pub opening_hours: Option<String>,
    pub capacity: Option<String>,
    pub facilities: Vec<String>,
    pub image: Option<String>,
}

impl From<&Location> for LocationDto {
    fn from(location: &Location) -> Self {
        Self {
            id: location.id.to_string(),
            name: location.name.to_string(),
            category: location.category,
            coordinate: location.coordinate,
            description: location.description.to_string(),
            opening_hours: location.opening_hours.as_deref().map(str::to_string),
            capacity: location.capacity.as_deref().map(str::to_string),
            facilities: location.facilities.iter().map(|f| f.to_string()).collect(),
            image: location.image.as_deref().map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MarkerDto {
    pub location_id: String,
    pub coordinate: Coordinate,
    pub title: String,
    pub subtitle: String,
    pub kind: MarkerKind,
}

impl From<Marker> for MarkerDto {
    fn from(marker: Marker) -> Self {
        Self {
            location_id: marker.location_id.to_string(),
            coordinate: marker.coordinate,
            title: marker.title.to_string(),
            subtitle: marker.subtitle,
            kind: marker.kind,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProbeDto {
    pub location: LocationDto,
    pub resolution: Resolution,
    pub located_at: String,
    pub notice: Notice,
}

impl From<&Probe> for ProbeDto {
    fn from(probe: &Probe) -> Self {
        Self {
            location: LocationDto::from(&probe.location),
            resolution: probe.resolution,
            located_at: probe.located_at.to_rfc3339(),
            notice: probe.notice(),
        }
    }
}
