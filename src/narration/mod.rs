use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

mod backend;
pub mod compose;
pub use backend::*;

use crate::{catalog::Location, route::RouteResult};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Speech synthesis failed: {0}")]
    Synthesis(String),
}

/// Rate used when reading out a route.
pub const ROUTE_RATE: f32 = 0.8;
/// Rate used when describing a building.
pub const DESCRIPTION_RATE: f32 = 0.9;
/// Rate used for short selection confirmations.
pub const SELECTION_RATE: f32 = 1.0;

/// Narrator wide defaults, used where a call doesn't override them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VoiceSettings {
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            rate: 0.9,
            pitch: 1.0,
            volume: 0.8,
        }
    }
}

/// Per call overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpeechOptions {
    pub rate: Option<f32>,
    pub pitch: Option<f32>,
    pub volume: Option<f32>,
    pub voice: Option<String>,
}

impl SpeechOptions {
    pub fn rate(rate: f32) -> Self {
        Self {
            rate: Some(rate),
            ..Default::default()
        }
    }
}

/// Text plus the settings to speak it with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Utterance {
    pub text: String,
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
    pub voice: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    Disabled,
    Unsupported,
    EmptyText,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Spoken,
    Skipped(SkipReason),
}

/// What a selection confirmation refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionKind {
    Start,
    Destination,
    Selected,
    #[serde(other)]
    Other,
}

/// Speaks text through a [`NarrationBackend`].
///
/// Backend support is probed once at construction. While disabled or
/// unsupported every call returns `Outcome::Skipped` without touching the
/// backend. There is no queue: starting an utterance cancels the previous one.
#[derive(Debug)]
pub struct Narrator<B> {
    backend: B,
    supported: bool,
    enabled: bool,
    settings: VoiceSettings,
}

impl<B: NarrationBackend> Narrator<B> {
    pub fn new(backend: B) -> Self {
        let supported = backend.is_available();
        if !supported {
            debug!("Speech synthesis unavailable, narration disabled");
        }
        Self {
            backend,
            supported,
            enabled: true,
            settings: VoiceSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: VoiceSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn is_supported(&self) -> bool {
        self.supported
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn settings(&self) -> VoiceSettings {
        self.settings
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Flips narration on or off, silencing it when turned off.
    /// Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        if !self.enabled {
            self.stop();
        }
        debug!("Narration enabled: {}", self.enabled);
        self.enabled
    }

    pub fn stop(&mut self) {
        if self.supported && self.backend.is_speaking() {
            self.backend.cancel();
        }
    }

    /// Overrides the defaults with whichever values `options` carries.
    pub fn set_voice_settings(&mut self, options: &SpeechOptions) {
        self.settings.rate = options.rate.unwrap_or(self.settings.rate);
        self.settings.pitch = options.pitch.unwrap_or(self.settings.pitch);
        self.settings.volume = options.volume.unwrap_or(self.settings.volume);
    }

    pub fn voices(&self) -> Vec<String> {
        if self.supported {
            self.backend.voices()
        } else {
            Vec::new()
        }
    }

    pub fn speak(&mut self, text: &str, options: &SpeechOptions) -> Result<Outcome, Error> {
        if !self.supported {
            return Ok(Outcome::Skipped(SkipReason::Unsupported));
        }
        if !self.enabled {
            return Ok(Outcome::Skipped(SkipReason::Disabled));
        }
        if text.trim().is_empty() {
            return Ok(Outcome::Skipped(SkipReason::EmptyText));
        }

        self.stop();
        let utterance = Utterance {
            text: text.to_string(),
            rate: options.rate.unwrap_or(self.settings.rate),
            pitch: options.pitch.unwrap_or(self.settings.pitch),
            volume: options.volume.unwrap_or(self.settings.volume),
            voice: options.voice.clone(),
        };
        self.backend.speak(utterance)?;
        Ok(Outcome::Spoken)
    }

    pub fn speak_route_directions(
        &mut self,
        start: &Location,
        destination: &Location,
        route: Option<&RouteResult>,
    ) -> Result<Outcome, Error> {
        let text = compose::route_directions(start, destination, route);
        self.speak(&text, &SpeechOptions::rate(ROUTE_RATE))
    }

    pub fn speak_building_description(&mut self, location: &Location) -> Result<Outcome, Error> {
        let text = compose::building_description(location);
        self.speak(&text, &SpeechOptions::rate(DESCRIPTION_RATE))
    }

    pub fn speak_location_selection(
        &mut self,
        location: &Location,
        kind: SelectionKind,
    ) -> Result<Outcome, Error> {
        let text = compose::location_selection(location, kind);
        self.speak(&text, &SpeechOptions::rate(SELECTION_RATE))
    }
}
