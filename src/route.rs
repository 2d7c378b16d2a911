use serde::{Deserialize, Serialize};

use crate::shared::{geo::Coordinate, geo::Distance, time::Duration};

/// A coordinate handed to the routing engine as a route endpoint.
pub type Waypoint = Coordinate;

/// Identifies one routing request so late answers can be told apart.
pub type RequestId = u64;

/// What the map surface asks the external routing engine to compute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteRequest {
    pub id: RequestId,
    pub from: Waypoint,
    pub to: Waypoint,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    pub total_distance: Distance,
    pub total_time: Duration,
}

/// One turn-by-turn step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    pub text: String,
    pub distance: Distance,
    pub time: Duration,
}

/// A candidate route as returned by the engine. Never mutated, only replaced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteResult {
    pub summary: RouteSummary,
    pub instructions: Vec<Instruction>,
}

impl RouteResult {
    pub fn new(total_distance: Distance, total_time: Duration) -> Self {
        Self {
            summary: RouteSummary {
                total_distance,
                total_time,
            },
            instructions: Vec::new(),
        }
    }

    pub fn with_instruction(mut self, text: &str, distance: Distance, time: Duration) -> Self {
        self.instructions.push(Instruction {
            text: text.into(),
            distance,
            time,
        });
        self
    }

    pub fn total_distance(&self) -> Distance {
        self.summary.total_distance
    }

    pub fn total_time(&self) -> Duration {
        self.summary.total_time
    }
}
