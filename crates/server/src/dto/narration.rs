use campus_map::narration::{Outcome, SkipReason, Utterance, VoiceSettings};
use serde::Serialize;

use crate::state::Session;

#[derive(Clone, Debug, Serialize)]
pub struct NarrationDto {
    pub supported: bool,
    pub enabled: bool,
    pub settings: VoiceSettings,
    pub voices: Vec<String>,
    /// What the client should be playing right now.
    pub active: Option<Utterance>,
}

impl From<&Session> for NarrationDto {
    fn from(session: &Session) -> Self {
        let narrator = &session.narrator;
        Self {
            supported: narrator.is_supported(),
            enabled: narrator.is_enabled(),
            settings: narrator.settings(),
            voices: narrator.voices(),
            active: narrator.backend().active().cloned(),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct SpeechDto {
    pub spoken: bool,
    pub skipped: Option<SkipReason>,
    pub utterance: Option<Utterance>,
}

impl SpeechDto {
    pub fn new(outcome: Outcome, session: &Session) -> Self {
        match outcome {
            Outcome::Spoken => Self {
                spoken: true,
                skipped: None,
                utterance: session.narrator.backend().active().cloned(),
            },
            Outcome::Skipped(reason) => Self {
                spoken: false,
                skipped: Some(reason),
                utterance: None,
            },
        }
    }
}
