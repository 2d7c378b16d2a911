use campus_map::view::View;

#[test]
fn known_paths_resolve() {
    assert_eq!(View::resolve("/"), View::Home);
    assert_eq!(View::resolve("/map"), View::Map);
    assert_eq!(View::resolve("/locations"), View::Locations);
    assert_eq!(View::resolve("/about"), View::About);
}

#[test]
fn unknown_path_is_not_found() {
    assert_eq!(View::resolve("/nonexistent"), View::NotFound);
    assert_eq!(View::resolve("/map/extra"), View::NotFound);
    assert_eq!(View::resolve("/MAP"), View::NotFound);
}

#[test]
fn not_found_has_no_path() {
    assert_eq!(View::NotFound.path(), None);
    assert!(!View::ALL.contains(&View::NotFound));
    assert_eq!(View::NotFound.to_string(), "404 - Page Not Found");
}

#[test]
fn empty_path_is_home() {
    assert_eq!(View::resolve(""), View::Home);
    assert_eq!(View::resolve("/?utm=1"), View::Home);
}
