use campus_map::{
    route::{RouteRequest, RouteResult},
    shared::{Distance, Duration},
};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Routing engine answered {code}: {message}")]
    Engine { code: String, message: String },
}

const ROUTE_OPTIONS: &str = "overview=false&steps=true&alternatives=false";

/// Client for an OSRM `route` service.
#[derive(Clone)]
pub struct OsrmClient {
    inner: reqwest::Client,
    base: String,
    profile: String,
}

impl OsrmClient {
    pub fn new(base: &str, profile: &str) -> Self {
        Self {
            inner: reqwest::Client::new(),
            base: base.trim_end_matches('/').to_string(),
            profile: profile.to_string(),
        }
    }

    pub fn url(&self, request: &RouteRequest) -> String {
        // OSRM wants longitude first
        format!(
            "{}/route/v1/{}/{},{};{},{}",
            self.base,
            self.profile,
            request.from.longitude,
            request.from.latitude,
            request.to.longitude,
            request.to.latitude
        )
    }

    /// Candidate routes, best first.
    pub async fn route(&self, request: &RouteRequest) -> Result<Vec<RouteResult>, Error> {
        let url = self.url(request);
        debug!("Fetching route {} from {url}", request.id);
        let response: RouteResponse = self
            .inner
            .get(format!("{url}?{ROUTE_OPTIONS}"))
            .send()
            .await?
            .json()
            .await?;
        response.into_routes()
    }
}

#[derive(Debug, Deserialize)]
struct RouteResponse {
    code: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

impl RouteResponse {
    fn into_routes(self) -> Result<Vec<RouteResult>, Error> {
        if self.code != "Ok" {
            return Err(Error::Engine {
                code: self.code,
                message: self.message.unwrap_or_default(),
            });
        }
        Ok(self.routes.into_iter().map(RouteResult::from).collect())
    }
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    distance: f64,
    duration: f64,
    #[serde(default)]
    legs: Vec<OsrmLeg>,
}

#[derive(Debug, Deserialize)]
struct OsrmLeg {
    #[serde(default)]
    steps: Vec<OsrmStep>,
}

#[derive(Debug, Deserialize)]
struct OsrmStep {
    distance: f64,
    duration: f64,
    #[serde(default)]
    name: String,
    maneuver: Maneuver,
}

#[derive(Debug, Deserialize)]
struct Maneuver {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    modifier: Option<String>,
}

impl From<OsrmRoute> for RouteResult {
    fn from(value: OsrmRoute) -> Self {
        let mut route = RouteResult::new(
            Distance::from_meters(value.distance),
            Duration::from_seconds(value.duration),
        );
        for step in value.legs.iter().flat_map(|leg| leg.steps.iter()) {
            route = route.with_instruction(
                &instruction_text(step),
                Distance::from_meters(step.distance),
                Duration::from_seconds(step.duration),
            );
        }
        route
    }
}

fn instruction_text(step: &OsrmStep) -> String {
    let onto = if step.name.is_empty() {
        String::new()
    } else {
        format!(" onto {}", step.name)
    };
    let modifier = step.modifier();
    match step.maneuver.kind.as_str() {
        "depart" if step.name.is_empty() => "Head out".to_string(),
        "depart" => format!("Head out on {}", step.name),
        "arrive" => "You have arrived at your destination".to_string(),
        "roundabout" | "rotary" => format!("Enter the roundabout and exit{onto}"),
        "continue" | "new name" => format!("Continue{onto}"),
        "merge" => format!("Merge{onto}"),
        "fork" => format!("Keep {modifier} at the fork{onto}"),
        "end of road" => format!("Turn {modifier} at the end of the road{onto}"),
        _ if modifier == "straight" => format!("Go straight{onto}"),
        _ => format!("Turn {modifier}{onto}"),
    }
}

impl OsrmStep {
    fn modifier(&self) -> &str {
        self.maneuver.modifier.as_deref().unwrap_or("straight")
    }
}
