use std::fmt::Write;

use crate::{catalog::Location, narration::SelectionKind, route::RouteResult};

/// Steps read out after a route summary.
pub const SPOKEN_STEPS: usize = 3;

/// "Route planned from A to B." followed by the totals and the first steps,
/// when a route is known.
pub fn route_directions(
    start: &Location,
    destination: &Location,
    route: Option<&RouteResult>,
) -> String {
    let mut text = format!(
        "Route planned from {} to {}.",
        start.name, destination.name
    );
    let Some(route) = route else {
        return text;
    };

    let _ = write!(
        text,
        " Distance: {} kilometers. Estimated time: {} minutes.",
        route.total_distance(),
        route.total_time().as_rounded_minutes()
    );
    if !route.instructions.is_empty() {
        text.push_str(" Directions:");
        for (i, instruction) in route.instructions.iter().take(SPOKEN_STEPS).enumerate() {
            let _ = write!(
                text,
                " Step {}: {}. Distance: {} kilometers.",
                i + 1,
                sentence(&instruction.text),
                instruction.distance
            );
        }
    }
    text
}

/// Name, category, description, opening hours and facilities, each as its
/// own sentence; missing parts are left out.
pub fn building_description(location: &Location) -> String {
    let mut text = format!("{}.", sentence(&location.name));
    let _ = write!(text, " Category: {}.", location.category);
    if !location.description.trim().is_empty() {
        let _ = write!(text, " Description: {}.", sentence(&location.description));
    }
    if let Some(opening_hours) = &location.opening_hours {
        let _ = write!(text, " Opening hours: {}.", opening_hours);
    }
    if !location.facilities.is_empty() {
        let facilities: Vec<&str> = location.facilities.iter().map(|f| f.as_ref()).collect();
        let _ = write!(text, " Facilities include: {}.", facilities.join(", "));
    }
    text
}

pub fn location_selection(location: &Location, kind: SelectionKind) -> String {
    match kind {
        SelectionKind::Start => format!("{} set as starting point.", location.name),
        SelectionKind::Destination => format!("{} set as destination.", location.name),
        SelectionKind::Selected => format!("Selected {}.", location.name),
        SelectionKind::Other => format!("{}.", location.name),
    }
}

// Strips the closing period so it isn't doubled when the caller adds one.
fn sentence(text: &str) -> &str {
    text.trim().trim_end_matches('.')
}
