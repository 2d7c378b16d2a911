use std::{fmt::Display, str::FromStr, sync::Arc};

use serde::{Deserialize, Serialize};

use crate::{catalog::Error, shared::Identifiable, shared::geo::Coordinate};

/// Id of the synthetic location produced from a device position.
pub const CURRENT_LOCATION_ID: &str = "current";
/// Id of the synthetic location standing in for the campus center.
pub const FALLBACK_LOCATION_ID: &str = "fallback";

/// Kind of place. The last two never appear in the seed data, they tag
/// locations produced by the geolocation probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Academic,
    Administrative,
    Cafeteria,
    Hostel,
    Recreational,
    #[serde(rename = "Current Location")]
    CurrentLocation,
    Fallback,
}

impl Category {
    /// Categories a user can filter the campus list by.
    pub const CAMPUS: [Category; 5] = [
        Category::Academic,
        Category::Administrative,
        Category::Cafeteria,
        Category::Hostel,
        Category::Recreational,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::Academic => "Academic",
            Category::Administrative => "Administrative",
            Category::Cafeteria => "Cafeteria",
            Category::Hostel => "Hostel",
            Category::Recreational => "Recreational",
            Category::CurrentLocation => "Current Location",
            Category::Fallback => "Fallback",
        }
    }

    pub const fn is_synthetic(&self) -> bool {
        matches!(self, Category::CurrentLocation | Category::Fallback)
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        [
            Category::Academic,
            Category::Administrative,
            Category::Cafeteria,
            Category::Hostel,
            Category::Recreational,
            Category::CurrentLocation,
            Category::Fallback,
        ]
        .into_iter()
        .find(|category| category.as_str().eq_ignore_ascii_case(trimmed))
        .ok_or_else(|| Error::UnknownCategory(trimmed.to_string()))
    }
}

/// A point of interest on the campus map.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    /// Unique, stable identifier.
    pub id: Arc<str>,
    /// Display name.
    pub name: Arc<str>,
    /// Lowercased name used by fuzzy search.
    pub normalized_name: Arc<str>,
    pub category: Category,
    pub coordinate: Coordinate,
    /// Free text, may be empty.
    pub description: Arc<str>,
    pub opening_hours: Option<Arc<str>>,
    pub capacity: Option<Arc<str>>,
    /// Ordered facility names, empty when none are listed.
    pub facilities: Arc<[Arc<str>]>,
    /// Image reference, a URL or a relative asset path.
    pub image: Option<Arc<str>>,
}

impl Identifiable for Location {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn normalized_name(&self) -> &str {
        &self.normalized_name
    }
}

impl Location {
    pub fn new(id: &str, name: &str, category: Category, coordinate: Coordinate) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            normalized_name: name.to_lowercase().into(),
            category,
            coordinate,
            description: "".into(),
            opening_hours: None,
            capacity: None,
            facilities: Arc::new([]),
            image: None,
        }
    }

    /// The device position, adopted as the user's location.
    pub fn current(coordinate: Coordinate) -> Self {
        Self::new(
            CURRENT_LOCATION_ID,
            "Your Location",
            Category::CurrentLocation,
            coordinate,
        )
    }

    /// The campus center, used whenever the device position can't be trusted.
    pub fn fallback(center: Coordinate) -> Self {
        Self::new(
            FALLBACK_LOCATION_ID,
            "Campus Center",
            Category::Fallback,
            center,
        )
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_opening_hours(mut self, opening_hours: &str) -> Self {
        self.opening_hours = Some(opening_hours.into());
        self
    }

    pub fn with_capacity(mut self, capacity: &str) -> Self {
        self.capacity = Some(capacity.into());
        self
    }

    pub fn with_facilities<I, S>(mut self, facilities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.facilities = facilities
            .into_iter()
            .map(|facility| Arc::from(facility.as_ref()))
            .collect();
        self
    }

    pub fn with_image(mut self, image: &str) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn is_synthetic(&self) -> bool {
        self.category.is_synthetic()
    }

    /// Same place, regardless of how the value was produced.
    pub fn same_as(&self, other: &Location) -> bool {
        self.id == other.id && self.coordinate == other.coordinate
    }

    /// Case-insensitive substring match on name or description.
    pub(crate) fn matches_term(&self, lowercase_term: &str) -> bool {
        self.normalized_name.contains(lowercase_term)
            || self.description.to_lowercase().contains(lowercase_term)
    }
}

#[test]
fn category_round_trip_names() {
    for category in Category::CAMPUS {
        assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
    }
    assert_eq!(
        "current location".parse::<Category>().unwrap(),
        Category::CurrentLocation
    );
}

#[test]
fn category_unknown() {
    assert!("Library".parse::<Category>().is_err());
}
