use std::{collections::HashMap, fs, io, path::Path, sync::Arc};

use thiserror::Error;
use tracing::debug;

mod models;
mod source;
pub use models::*;
pub use source::FACILITY_SEPARATOR;

use crate::shared;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
    #[error("Location id {0} is used more than once")]
    DuplicateId(String),
    #[error("Location {id} has an invalid coordinate")]
    InvalidCoordinate { id: String },
    #[error("Empty {field} field (line {line:?})")]
    EmptyField {
        line: Option<usize>,
        field: &'static str,
    },
    #[error("Location id {0} is reserved")]
    ReservedId(String),
}

/// The read-only set of campus locations.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    locations: Arc<[Location]>,
    lookup: Arc<HashMap<Arc<str>, usize>>,
}

impl Catalog {
    pub fn new() -> Self {
        Default::default()
    }

    /// The bundled campus seed data.
    pub fn campus() -> Result<Self, Error> {
        Self::from_reader(source::CAMPUS_CSV.as_bytes())
    }

    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self, Error> {
        Self::with_locations(source::read_locations(reader)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let file = fs::File::open(path)?;
        Self::from_reader(io::BufReader::new(file))
    }

    /// Builds the catalog, rejecting duplicate ids, ids reserved for
    /// synthetic locations and coordinates that are off the globe.
    pub fn with_locations(locations: Vec<Location>) -> Result<Self, Error> {
        let mut lookup: HashMap<Arc<str>, usize> = HashMap::with_capacity(locations.len());
        for (i, location) in locations.iter().enumerate() {
            if location.id.as_ref() == CURRENT_LOCATION_ID
                || location.id.as_ref() == FALLBACK_LOCATION_ID
            {
                return Err(Error::ReservedId(location.id.to_string()));
            }
            if !location.coordinate.is_valid() {
                return Err(Error::InvalidCoordinate {
                    id: location.id.to_string(),
                });
            }
            if lookup.insert(location.id.clone(), i).is_some() {
                return Err(Error::DuplicateId(location.id.to_string()));
            }
        }
        debug!("Catalog holds {} locations", locations.len());
        Ok(Self {
            locations: locations.into(),
            lookup: lookup.into(),
        })
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn get(&self, id: &str) -> Option<&Location> {
        let index = self.lookup.get(id)?;
        Some(&self.locations[*index])
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &Location> {
        self.locations
            .iter()
            .filter(move |location| location.category == category)
    }

    /// Search panel listing: substring match on name or description, then the
    /// category filter. The current location, if given, is listed first and is
    /// subject to the same filters.
    pub fn search<'a>(&'a self, query: &Query<'a>) -> Vec<&'a Location> {
        let term = query.term.trim().to_lowercase();
        query
            .current
            .into_iter()
            .chain(self.locations.iter())
            .filter(|location| term.is_empty() || location.matches_term(&term))
            .filter(|location| {
                query
                    .category
                    .is_none_or(|category| location.category == category)
            })
            .collect()
    }

    /// Type-ahead: fuzzy ranked by name, best first.
    pub fn suggest<'a>(&'a self, needle: &str) -> Vec<&'a Location> {
        shared::search(needle, &self.locations)
    }
}

/// Filters for [`Catalog::search`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Query<'a> {
    pub term: &'a str,
    /// `None` lists every category.
    pub category: Option<Category>,
    pub current: Option<&'a Location>,
}

impl<'a> Query<'a> {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn term(mut self, term: &'a str) -> Self {
        self.term = term;
        self
    }

    pub fn category(mut self, category: Option<Category>) -> Self {
        self.category = category;
        self
    }

    pub fn including(mut self, current: Option<&'a Location>) -> Self {
        self.current = current;
        self
    }
}
