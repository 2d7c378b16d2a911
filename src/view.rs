use std::fmt::Display;

use serde::Serialize;

/// The pages a user can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    Home,
    Map,
    Locations,
    About,
    NotFound,
}

impl View {
    pub const ALL: [View; 4] = [View::Home, View::Map, View::Locations, View::About];

    /// Maps a request path to its view. Unknown paths are `NotFound`, no
    /// matter what state the app is in.
    pub fn resolve(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => View::Home,
            "/map" => View::Map,
            "/locations" => View::Locations,
            "/about" => View::About,
            _ => View::NotFound,
        }
    }

    pub const fn path(&self) -> Option<&'static str> {
        match self {
            View::Home => Some("/"),
            View::Map => Some("/map"),
            View::Locations => Some("/locations"),
            View::About => Some("/about"),
            View::NotFound => None,
        }
    }

    pub const fn title(&self) -> &'static str {
        match self {
            View::Home => "Campus Map",
            View::Map => "Map",
            View::Locations => "All Campus Locations",
            View::About => "About the Campus Map",
            View::NotFound => "404 - Page Not Found",
        }
    }
}

impl Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

#[test]
fn resolve_known_paths() {
    for view in View::ALL {
        let path = view.path().unwrap();
        assert_eq!(View::resolve(path), view);
    }
}

#[test]
fn resolve_trailing_slash_and_query() {
    assert_eq!(View::resolve("/map/"), View::Map);
    assert_eq!(View::resolve("/locations?category=Hostel"), View::Locations);
}
