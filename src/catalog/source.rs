use std::{io, sync::Arc};

use serde::Deserialize;
use tracing::debug;

use crate::{
    catalog::{Error, Location},
    shared::geo::Coordinate,
};

/// Separator between facility names inside the single `facilities` column.
pub const FACILITY_SEPARATOR: char = ';';

/// Seed data bundled with the crate.
pub(crate) const CAMPUS_CSV: &str = include_str!("../../data/locations.csv");

/// One row of a locations CSV file.
#[derive(Debug, Deserialize)]
pub(crate) struct LocationRecord {
    pub id: String,
    pub name: String,
    pub category: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub opening_hours: Option<String>,
    #[serde(default)]
    pub capacity: Option<String>,
    #[serde(default)]
    pub facilities: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl TryFrom<LocationRecord> for Location {
    type Error = Error;

    fn try_from(value: LocationRecord) -> Result<Self, Self::Error> {
        let id = value.id.trim();
        if id.is_empty() {
            return Err(Error::EmptyField {
                line: None,
                field: "id",
            });
        }
        if value.name.trim().is_empty() {
            return Err(Error::EmptyField {
                line: None,
                field: "name",
            });
        }

        let category = value.category.parse()?;
        let coordinate = Coordinate::new(value.latitude, value.longitude);
        let mut location = Location::new(id, value.name.trim(), category, coordinate);
        location.description = value.description.unwrap_or_default().trim().into();
        location.opening_hours = non_empty(value.opening_hours);
        location.capacity = non_empty(value.capacity);
        location.image = non_empty(value.image);
        location.facilities = value
            .facilities
            .as_deref()
            .unwrap_or_default()
            .split(FACILITY_SEPARATOR)
            .map(str::trim)
            .filter(|facility| !facility.is_empty())
            .map(Arc::from)
            .collect();
        Ok(location)
    }
}

fn non_empty(value: Option<String>) -> Option<Arc<str>> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .map(Arc::from)
}

/// Reads every record of a locations CSV, in file order.
pub(crate) fn read_locations<R: io::Read>(reader: R) -> Result<Vec<Location>, Error> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::Headers).from_reader(reader);
    let mut locations = Vec::new();
    for (i, record) in reader.deserialize::<LocationRecord>().enumerate() {
        // header is line 1
        let line = i + 2;
        let location = Location::try_from(record?).map_err(|err| match err {
            Error::EmptyField { field, .. } => Error::EmptyField {
                line: Some(line),
                field,
            },
            err => err,
        })?;
        locations.push(location);
    }
    debug!("Read {} locations", locations.len());
    Ok(locations)
}
