use campus_map::narration::{
    self, Capture, Outcome, SkipReason, Silent, Utterance, VoiceSettings, compose,
};
use campus_map::prelude::*;

/// Remembers every call made to it.
#[derive(Debug, Default)]
struct Recorder {
    spoken: Vec<Utterance>,
    cancelled: usize,
    speaking: bool,
}

impl NarrationBackend for Recorder {
    fn is_available(&self) -> bool {
        true
    }

    fn speak(&mut self, utterance: Utterance) -> Result<(), narration::Error> {
        self.spoken.push(utterance);
        self.speaking = true;
        Ok(())
    }

    fn cancel(&mut self) {
        self.cancelled += 1;
        self.speaking = false;
    }

    fn is_speaking(&self) -> bool {
        self.speaking
    }

    fn voices(&self) -> Vec<String> {
        vec!["Daniel".into(), "Samantha".into()]
    }
}

struct Broken;

impl NarrationBackend for Broken {
    fn is_available(&self) -> bool {
        true
    }

    fn speak(&mut self, _: Utterance) -> Result<(), narration::Error> {
        Err(narration::Error::Synthesis("no audio device".into()))
    }

    fn cancel(&mut self) {}

    fn is_speaking(&self) -> bool {
        false
    }
}

fn library() -> Location {
    Location::new(
        "3",
        "University Library",
        Category::Academic,
        Coordinate::new(6.6707, 3.1573),
    )
    .with_description("Central library with extensive collections.")
    .with_opening_hours("8:00 AM - 10:00 PM")
    .with_facilities(["Reading rooms", "E-library"])
}

fn chapel() -> Location {
    Location::new(
        "1",
        "University Chapel",
        Category::Academic,
        Coordinate::new(6.6717, 3.1583),
    )
}

#[test]
fn speaks_with_defaults() {
    let mut narrator = Narrator::new(Recorder::default());
    let outcome = narrator.speak("Hello", &SpeechOptions::default()).unwrap();
    assert_eq!(outcome, Outcome::Spoken);

    let utterance = &narrator.backend().spoken[0];
    let defaults = VoiceSettings::default();
    assert_eq!(utterance.text, "Hello");
    assert_eq!(utterance.rate, defaults.rate);
    assert_eq!(utterance.pitch, defaults.pitch);
    assert_eq!(utterance.volume, defaults.volume);
}

#[test]
fn per_call_options_override_defaults() {
    let mut narrator = Narrator::new(Recorder::default());
    let options = SpeechOptions {
        rate: Some(1.5),
        voice: Some("Samantha".into()),
        ..Default::default()
    };
    narrator.speak("Hello", &options).unwrap();
    let utterance = &narrator.backend().spoken[0];
    assert_eq!(utterance.rate, 1.5);
    assert_eq!(utterance.voice.as_deref(), Some("Samantha"));
    assert_eq!(utterance.volume, VoiceSettings::default().volume);
}

#[test]
fn disabled_narration_makes_no_backend_call() {
    let mut narrator = Narrator::new(Recorder::default());
    assert!(!narrator.toggle());

    let outcome = narrator.speak("Hello", &SpeechOptions::default()).unwrap();
    assert_eq!(outcome, Outcome::Skipped(SkipReason::Disabled));
    let outcome = narrator.speak_building_description(&library()).unwrap();
    assert_eq!(outcome, Outcome::Skipped(SkipReason::Disabled));
    assert!(narrator.backend().spoken.is_empty());

    assert!(narrator.toggle());
    narrator.speak("Hello", &SpeechOptions::default()).unwrap();
    assert_eq!(narrator.backend().spoken.len(), 1);
}

#[test]
fn toggling_off_stops_speech() {
    let mut narrator = Narrator::new(Recorder::default());
    narrator.speak("A long story", &SpeechOptions::default()).unwrap();
    narrator.toggle();
    assert_eq!(narrator.backend().cancelled, 1);
    assert!(!narrator.backend().is_speaking());
}

#[test]
fn new_speech_preempts_the_old() {
    let mut narrator = Narrator::new(Recorder::default());
    narrator.speak("First", &SpeechOptions::default()).unwrap();
    narrator.speak("Second", &SpeechOptions::default()).unwrap();
    assert_eq!(narrator.backend().cancelled, 1);
    assert_eq!(narrator.backend().spoken.len(), 2);
}

#[test]
fn empty_text_is_skipped() {
    let mut narrator = Narrator::new(Recorder::default());
    let outcome = narrator.speak("  ", &SpeechOptions::default()).unwrap();
    assert_eq!(outcome, Outcome::Skipped(SkipReason::EmptyText));
    assert!(narrator.backend().spoken.is_empty());
}

#[test]
fn unsupported_platform_is_silent() {
    let mut narrator = Narrator::new(Silent);
    assert!(!narrator.is_supported());
    assert!(narrator.voices().is_empty());
    let outcome = narrator.speak("Hello", &SpeechOptions::default()).unwrap();
    assert_eq!(outcome, Outcome::Skipped(SkipReason::Unsupported));
}

#[test]
fn backend_errors_are_reported() {
    let mut narrator = Narrator::new(Broken);
    let result = narrator.speak("Hello", &SpeechOptions::default());
    assert!(matches!(result, Err(narration::Error::Synthesis(_))));
}

#[test]
fn voice_settings_keep_missing_values() {
    let mut narrator = Narrator::new(Recorder::default());
    narrator.set_voice_settings(&SpeechOptions {
        pitch: Some(1.2),
        ..Default::default()
    });
    let settings = narrator.settings();
    assert_eq!(settings.pitch, 1.2);
    assert_eq!(settings.rate, VoiceSettings::default().rate);
    assert_eq!(narrator.voices(), vec!["Daniel", "Samantha"]);
}

#[test]
fn building_description_reads_every_part() {
    let mut narrator = Narrator::new(Recorder::default());
    narrator.speak_building_description(&library()).unwrap();
    let utterance = &narrator.backend().spoken[0];
    assert_eq!(
        utterance.text,
        "University Library. Category: Academic. \
         Description: Central library with extensive collections. \
         Opening hours: 8:00 AM - 10:00 PM. \
         Facilities include: Reading rooms, E-library."
    );
    assert_eq!(utterance.rate, narration::DESCRIPTION_RATE);
}

#[test]
fn building_description_skips_missing_parts() {
    assert_eq!(
        compose::building_description(&chapel()),
        "University Chapel. Category: Academic."
    );
}

#[test]
fn route_directions_without_route() {
    let mut narrator = Narrator::new(Recorder::default());
    narrator
        .speak_route_directions(&chapel(), &library(), None)
        .unwrap();
    let utterance = &narrator.backend().spoken[0];
    assert_eq!(
        utterance.text,
        "Route planned from University Chapel to University Library."
    );
    assert_eq!(utterance.rate, narration::ROUTE_RATE);
}

#[test]
fn route_directions_read_first_steps() {
    let route = RouteResult::new(Distance::from_meters(1260.0), Duration::from_seconds(400.0))
        .with_instruction("Head out on Chapel Road", Distance::from_meters(300.0), Duration::from_seconds(90.0))
        .with_instruction("Turn left onto Library Way.", Distance::from_meters(500.0), Duration::from_seconds(150.0))
        .with_instruction("Turn right", Distance::from_meters(400.0), Duration::from_seconds(100.0))
        .with_instruction("You have arrived", Distance::from_meters(60.0), Duration::from_seconds(60.0));

    let text = compose::route_directions(&chapel(), &library(), Some(&route));
    assert_eq!(
        text,
        "Route planned from University Chapel to University Library. \
         Distance: 1.3 kilometers. Estimated time: 7 minutes. Directions: \
         Step 1: Head out on Chapel Road. Distance: 0.3 kilometers. \
         Step 2: Turn left onto Library Way. Distance: 0.5 kilometers. \
         Step 3: Turn right. Distance: 0.4 kilometers."
    );
}

#[test]
fn selection_confirmation_names_the_role() {
    assert_eq!(
        compose::location_selection(&chapel(), SelectionKind::Start),
        "University Chapel set as starting point."
    );
    assert_eq!(
        compose::location_selection(&chapel(), SelectionKind::Destination),
        "University Chapel set as destination."
    );
}

#[test]
fn capture_holds_the_active_utterance() {
    let mut narrator = Narrator::new(Capture::new());
    narrator.speak("First", &SpeechOptions::default()).unwrap();
    narrator.speak("Second", &SpeechOptions::default()).unwrap();
    assert_eq!(narrator.backend().active().unwrap().text, "Second");
    assert_eq!(narrator.backend().spoken(), 2);

    assert!(narrator.backend_mut().finish().is_some());
    assert!(narrator.backend().active().is_none());
}
