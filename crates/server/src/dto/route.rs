use campus_map::route::{Instruction, RouteResult};
use serde::Serialize;

#[derive(Clone, Debug, Serialize)]
pub struct RouteDto {
    pub distance_km: f64,
    pub distance_m: f64,
    pub time_minutes: u64,
    pub instructions: Vec<InstructionDto>,
}

impl From<&RouteResult> for RouteDto {
    fn from(route: &RouteResult) -> Self {
        Self {
            distance_km: route.total_distance().as_kilometers(),
            distance_m: route.total_distance().as_meters(),
            time_minutes: route.total_time().as_rounded_minutes(),
            instructions: route.instructions.iter().map(InstructionDto::from).collect(),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct InstructionDto {
    pub text: String,
    pub distance_km: f64,
    pub distance_m: f64,
    pub time_minutes: u64,
}

impl From<&Instruction> for InstructionDto {
    fn from(instruction: &Instruction) -> Self {
        Self {
            text: instruction.text.clone(),
            distance_km: instruction.distance.as_kilometers(),
            distance_m: instruction.distance.as_meters(),
            time_minutes: instruction.time.as_rounded_minutes(),
        }
    }
}
