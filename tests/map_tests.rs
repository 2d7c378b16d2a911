use campus_map::map::{MarkerKind, RouteStatus};
use campus_map::prelude::*;

fn setup() -> (Catalog, MapSurface, Selection) {
    let config = Config::default();
    (
        Catalog::campus().unwrap(),
        MapSurface::new(&config),
        Selection::new(),
    )
}

fn route(meters: f64) -> RouteResult {
    RouteResult::new(Distance::from_meters(meters), Duration::from_seconds(meters))
}

#[test]
fn starts_on_campus_center() {
    let (_, surface, _) = setup();
    let viewport = surface.viewport();
    assert_eq!(viewport.center, CAMPUS_CENTER);
    assert_eq!(viewport.zoom, 16);
    assert!(surface.active_request().is_none());
}

#[test]
fn one_marker_per_location() {
    let (catalog, surface, _) = setup();
    let markers = surface.markers(&catalog, None);
    assert_eq!(markers.len(), catalog.len());
    assert!(markers.iter().all(|m| m.kind == MarkerKind::Location));

    let current = Location::current(CAMPUS_CENTER);
    let markers = surface.markers(&catalog, Some(&current));
    assert_eq!(markers.len(), catalog.len() + 1);
    let own = markers.last().unwrap();
    assert_eq!(own.kind, MarkerKind::CurrentLocation);
    assert_eq!(own.title.as_ref(), "Your Location");
}

#[test]
fn list_selection_flies_to_location() {
    let (catalog, mut surface, mut selection) = setup();
    let library = catalog.get("3").unwrap().clone();
    selection.set_selected(Some(library.clone()));

    assert!(surface.follow_selection(&selection));
    assert_eq!(surface.viewport().center, library.coordinate);
    assert_eq!(surface.viewport().zoom, 18);
    // Already there
    assert!(!surface.follow_selection(&selection));
}

#[test]
fn marker_click_selects_location() {
    let (catalog, mut surface, mut selection) = setup();
    let clicked = surface.click_marker("5", &catalog, &mut selection).unwrap();
    assert_eq!(clicked.name.as_ref(), "Cafeteria 1");
    assert_eq!(selection.selected().unwrap().id.as_ref(), "5");
    assert_eq!(surface.viewport().center, clicked.coordinate);

    assert!(surface.click_marker("nope", &catalog, &mut selection).is_err());
    assert_eq!(selection.selected().unwrap().id.as_ref(), "5");
}

#[test]
fn complete_selection_requests_a_route() {
    let (catalog, mut surface, mut selection) = setup();
    let start = catalog.get("1").unwrap().clone();
    let destination = catalog.get("3").unwrap().clone();

    selection.set_start(Some(start.clone()));
    assert!(surface.sync_route(&mut selection).is_none());

    selection.set_destination(Some(destination.clone()));
    let request = surface.sync_route(&mut selection).unwrap();
    assert_eq!(request.from, start.coordinate);
    assert_eq!(request.to, destination.coordinate);
    assert_eq!(surface.active_request(), Some(&request));

    // Nothing changed, no second request
    assert!(surface.sync_route(&mut selection).is_none());

    assert!(surface.routes_found(request.id, vec![route(900.0), route(1200.0)], &mut selection));
    assert_eq!(selection.route(), Some(&route(900.0)));
}

#[test]
fn stale_route_is_discarded() {
    let (catalog, mut surface, mut selection) = setup();
    selection.set_start(catalog.get("1").cloned());
    selection.set_destination(catalog.get("3").cloned());
    let first = surface.sync_route(&mut selection).unwrap();

    selection.set_destination(catalog.get("4").cloned());
    let second = surface.sync_route(&mut selection).unwrap();
    assert_ne!(first.id, second.id);

    assert!(!surface.routes_found(first.id, vec![route(900.0)], &mut selection));
    assert!(selection.route().is_none());

    assert!(surface.routes_found(second.id, vec![route(700.0)], &mut selection));
    assert_eq!(selection.route(), Some(&route(700.0)));
}

#[test]
fn answer_after_clear_is_discarded() {
    let (catalog, mut surface, mut selection) = setup();
    selection.set_start(catalog.get("1").cloned());
    selection.set_destination(catalog.get("3").cloned());
    let request = surface.sync_route(&mut selection).unwrap();

    selection.set_start(None);
    assert!(surface.sync_route(&mut selection).is_none());
    assert!(surface.active_request().is_none());

    assert!(!surface.routes_found(request.id, vec![route(900.0)], &mut selection));
    assert!(selection.route().is_none());
}

#[test]
fn same_start_and_destination_is_passed_through() {
    let (catalog, mut surface, mut selection) = setup();
    let chapel = catalog.get("1").cloned();
    selection.set_start(chapel.clone());
    selection.set_destination(chapel);

    let request = surface.sync_route(&mut selection).unwrap();
    assert_eq!(request.from, request.to);
}

#[test]
fn route_is_requested_again_after_swap() {
    let (catalog, mut surface, mut selection) = setup();
    selection.set_start(catalog.get("1").cloned());
    selection.set_destination(catalog.get("3").cloned());
    let first = surface.sync_route(&mut selection).unwrap();
    surface.routes_found(first.id, vec![route(900.0)], &mut selection);

    selection.swap();
    assert!(selection.route().is_none());
    let second = surface.sync_route(&mut selection).unwrap();
    assert_eq!(second.from, first.to);
    assert_eq!(second.to, first.from);
}

#[test]
fn route_is_requested_again_when_answer_was_cleared() {
    let (catalog, mut surface, mut selection) = setup();
    selection.set_start(catalog.get("1").cloned());
    selection.set_destination(catalog.get("3").cloned());
    let first = surface.sync_route(&mut selection).unwrap();
    surface.routes_found(first.id, vec![route(900.0)], &mut selection);

    selection.set_route(None);
    let second = surface.sync_route(&mut selection).unwrap();
    assert_ne!(first.id, second.id);
}

#[test]
fn request_status_follows_the_answer() {
    let (catalog, mut surface, mut selection) = setup();
    selection.set_start(catalog.get("1").cloned());
    selection.set_destination(catalog.get("3").cloned());
    let request = surface.sync_route(&mut selection).unwrap();
    assert_eq!(surface.route_status(), Some(RouteStatus::Pending));

    surface.routes_found(request.id, vec![route(900.0)], &mut selection);
    assert_eq!(surface.route_status(), Some(RouteStatus::Found));

    selection.set_start(None);
    surface.sync_route(&mut selection);
    assert_eq!(surface.route_status(), None);
}

#[test]
fn failed_request_stays_quiet_until_replanned() {
    let (catalog, mut surface, mut selection) = setup();
    selection.set_start(catalog.get("1").cloned());
    selection.set_destination(catalog.get("3").cloned());
    let first = surface.sync_route(&mut selection).unwrap();

    assert!(surface.route_failed(first.id));
    assert_eq!(surface.route_status(), Some(RouteStatus::Failed));

    // Unrelated selection changes don't retry on their own
    selection.set_selected(catalog.get("5").cloned());
    assert!(surface.sync_route(&mut selection).is_none());

    let second = surface.replan(&mut selection).unwrap();
    assert_ne!(first.id, second.id);
    assert_eq!(surface.route_status(), Some(RouteStatus::Pending));

    // The old request failing late changes nothing
    assert!(!surface.route_failed(first.id));
    assert_eq!(surface.route_status(), Some(RouteStatus::Pending));
}

#[test]
fn empty_answer_stays_quiet_until_endpoints_change() {
    let (catalog, mut surface, mut selection) = setup();
    selection.set_start(catalog.get("1").cloned());
    selection.set_destination(catalog.get("3").cloned());
    let first = surface.sync_route(&mut selection).unwrap();

    assert!(!surface.routes_found(first.id, Vec::new(), &mut selection));
    assert_eq!(surface.route_status(), Some(RouteStatus::NoRoute));
    assert!(selection.route().is_none());

    selection.set_selected(catalog.get("5").cloned());
    assert!(surface.sync_route(&mut selection).is_none());
    assert!(surface.sync_route(&mut selection).is_none());

    selection.set_destination(catalog.get("4").cloned());
    assert!(surface.sync_route(&mut selection).is_some());
}

#[test]
fn replan_keeps_a_pending_request() {
    let (catalog, mut surface, mut selection) = setup();
    selection.set_start(catalog.get("1").cloned());
    selection.set_destination(catalog.get("3").cloned());
    surface.sync_route(&mut selection).unwrap();
    assert!(surface.replan(&mut selection).is_none());
}
