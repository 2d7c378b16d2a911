use tracing::{debug, info};

use crate::narration::{Error, Utterance};

/// A speech synthesis capability.
///
/// Implementations only play what they're given; enabling, preemption and
/// defaults live in [`super::Narrator`].
pub trait NarrationBackend {
    /// Whether the platform can speak at all. Checked once, when the
    /// narrator is created.
    fn is_available(&self) -> bool;

    /// Starts speaking `utterance`.
    fn speak(&mut self, utterance: Utterance) -> Result<(), Error>;

    /// Stops whatever is being spoken.
    fn cancel(&mut self);

    fn is_speaking(&self) -> bool;

    /// Voice names the platform offers.
    fn voices(&self) -> Vec<String> {
        Vec::new()
    }
}

impl<B: NarrationBackend + ?Sized> NarrationBackend for Box<B> {
    fn is_available(&self) -> bool {
        (**self).is_available()
    }

    fn speak(&mut self, utterance: Utterance) -> Result<(), Error> {
        (**self).speak(utterance)
    }

    fn cancel(&mut self) {
        (**self).cancel()
    }

    fn is_speaking(&self) -> bool {
        (**self).is_speaking()
    }

    fn voices(&self) -> Vec<String> {
        (**self).voices()
    }
}

/// A platform without speech. Every call is a no-op.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl NarrationBackend for Silent {
    fn is_available(&self) -> bool {
        false
    }

    fn speak(&mut self, _: Utterance) -> Result<(), Error> {
        Ok(())
    }

    fn cancel(&mut self) {}

    fn is_speaking(&self) -> bool {
        false
    }
}

/// Holds the active utterance instead of playing it, so it can be handed to
/// a client that owns the actual speaker.
#[derive(Debug, Clone, Default)]
pub struct Capture {
    active: Option<Utterance>,
    voices: Vec<String>,
    spoken: usize,
}

impl Capture {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_voices(mut self, voices: Vec<String>) -> Self {
        self.voices = voices;
        self
    }

    /// The utterance currently playing.
    pub fn active(&self) -> Option<&Utterance> {
        self.active.as_ref()
    }

    /// The client finished playing the active utterance.
    pub fn finish(&mut self) -> Option<Utterance> {
        self.active.take()
    }

    /// How many utterances were started so far.
    pub fn spoken(&self) -> usize {
        self.spoken
    }
}

impl NarrationBackend for Capture {
    fn is_available(&self) -> bool {
        true
    }

    fn speak(&mut self, utterance: Utterance) -> Result<(), Error> {
        info!(rate = utterance.rate, "Speaking: {}", utterance.text);
        self.spoken += 1;
        self.active = Some(utterance);
        Ok(())
    }

    fn cancel(&mut self) {
        if let Some(utterance) = self.active.take() {
            debug!("Cancelled: {}", utterance.text);
        }
    }

    fn is_speaking(&self) -> bool {
        self.active.is_some()
    }

    fn voices(&self) -> Vec<String> {
        self.voices.clone()
    }
}
