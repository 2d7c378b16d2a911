use std::collections::HashSet;

use campus_map::catalog::{self, Catalog, Category, Location, Query};
use campus_map::shared::Coordinate;

const CSV: &str = "\
id,name,category,latitude,longitude,description,opening_hours,capacity,facilities,image
a,North Gate,Administrative,6.67,3.15,Main entrance.,24/7,,Security post; Parking,
b,Hall B,Hostel,6.68,3.16,,,400 students,,hall-b.jpg
";

#[test]
fn campus_ids_are_unique() {
    let catalog = Catalog::campus().unwrap();
    let ids: HashSet<&str> = catalog.locations().iter().map(|l| l.id.as_ref()).collect();
    assert_eq!(ids.len(), catalog.len());
    assert!(!catalog.is_empty());
}

#[test]
fn campus_locations_are_not_synthetic() {
    let catalog = Catalog::campus().unwrap();
    for location in catalog.locations() {
        assert!(!location.is_synthetic(), "{} is synthetic", location.name);
        assert!(location.coordinate.is_valid());
    }
}

#[test]
fn reads_optional_columns() {
    let catalog = Catalog::from_reader(CSV.as_bytes()).unwrap();
    assert_eq!(catalog.len(), 2);

    let gate = catalog.get("a").unwrap();
    assert_eq!(gate.name.as_ref(), "North Gate");
    assert_eq!(gate.category, Category::Administrative);
    assert_eq!(gate.opening_hours.as_deref(), Some("24/7"));
    assert_eq!(gate.capacity, None);
    let facilities: Vec<&str> = gate.facilities.iter().map(|f| f.as_ref()).collect();
    assert_eq!(facilities, vec!["Security post", "Parking"]);

    let hall = catalog.get("b").unwrap();
    assert!(hall.description.is_empty());
    assert!(hall.facilities.is_empty());
    assert_eq!(hall.capacity.as_deref(), Some("400 students"));
    assert_eq!(hall.image.as_deref(), Some("hall-b.jpg"));
}

#[test]
fn duplicate_ids_are_rejected() {
    let center = Coordinate::new(6.67, 3.15);
    let result = Catalog::with_locations(vec![
        Location::new("1", "One", Category::Academic, center),
        Location::new("1", "Other", Category::Hostel, center),
    ]);
    assert!(matches!(result, Err(catalog::Error::DuplicateId(id)) if id == "1"));
}

#[test]
fn reserved_ids_are_rejected() {
    let result = Catalog::with_locations(vec![Location::new(
        catalog::CURRENT_LOCATION_ID,
        "Impostor",
        Category::Academic,
        Coordinate::new(6.67, 3.15),
    )]);
    assert!(matches!(result, Err(catalog::Error::ReservedId(_))));
}

#[test]
fn invalid_coordinates_are_rejected() {
    let result = Catalog::with_locations(vec![Location::new(
        "x",
        "Nowhere",
        Category::Academic,
        Coordinate::new(123.0, 3.15),
    )]);
    assert!(matches!(result, Err(catalog::Error::InvalidCoordinate { .. })));
}

#[test]
fn unknown_category_is_an_error() {
    let csv = "id,name,category,latitude,longitude\n1,Pool,Aquatic,6.67,3.15\n";
    let result = Catalog::from_reader(csv.as_bytes());
    assert!(matches!(result, Err(catalog::Error::UnknownCategory(c)) if c == "Aquatic"));
}

#[test]
fn search_filters_term_and_category() {
    let catalog = Catalog::campus().unwrap();

    let hostels = catalog.search(&Query::new().category(Some(Category::Hostel)));
    assert!(!hostels.is_empty());
    assert!(hostels.iter().all(|l| l.category == Category::Hostel));

    let library = catalog.search(&Query::new().term("LIBRARY"));
    assert!(library.iter().any(|l| l.name.as_ref() == "University Library"));

    let none = catalog.search(&Query::new().term("library").category(Some(Category::Hostel)));
    assert!(none.is_empty());
}

#[test]
fn search_lists_current_location_first() {
    let catalog = Catalog::campus().unwrap();
    let current = Location::current(Coordinate::new(6.6717, 3.1583));

    let all = catalog.search(&Query::new().including(Some(&current)));
    assert_eq!(all.len(), catalog.len() + 1);
    assert_eq!(all[0].id.as_ref(), catalog::CURRENT_LOCATION_ID);

    // The current location has its own category, so a campus filter drops it
    let academic = catalog.search(
        &Query::new()
            .category(Some(Category::Academic))
            .including(Some(&current)),
    );
    assert!(academic.iter().all(|l| !l.is_synthetic()));
}

#[test]
fn suggest_ranks_by_name() {
    let catalog = Catalog::campus().unwrap();
    let result = catalog.suggest("libary");
    assert_eq!(result[0].name.as_ref(), "University Library");

    let result = catalog.suggest("dan");
    assert_eq!(result[0].name.as_ref(), "Daniel Hall");

    assert!(catalog.suggest("   ").is_empty());
}
