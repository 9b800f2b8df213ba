//! Wiring of the installation.
//!
//! Installations differ only in which inputs they have and what those
//! trigger. Each is described by a `Config`, the presets below cover the
//! builds that exist.

use crate::animation::Color;
use crate::audio::AudioPolicy;
use crate::clip::{Clip, Selection};
use crate::debounce::{Event, Pin, Polarity};

/// Logical pin numbers, the firmware maps them to the board.
pub mod pins {
    use crate::debounce::Pin;

    pub const AUDIO_TRIGGER: Pin = Pin(0);
    pub const LIGHTS_TRIGGER: Pin = Pin(1);
    pub const BUSY: Pin = Pin(2);
}

pub const DEFAULT_DEBOUNCE_MS: u32 = 20;
pub const DEFAULT_FRAME_DURATION_MS: u32 = 500;

/// Edge of a trigger input that fires its reaction.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    Pressed,
    #[default]
    Released,
}

impl Edge {
    #[must_use]
    pub fn fires_on(self, event: Event) -> bool {
        matches!(
            (self, event),
            (Self::Pressed, Event::Pressed) | (Self::Released, Event::Released)
        )
    }
}

/// One physical input and how it is wired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Binding {
    pub pin: Pin,
    pub polarity: Polarity,
    pub edge: Edge,
}

impl Binding {
    /// A pulled-up input reacting on release.
    #[must_use]
    pub const fn new(pin: Pin) -> Self {
        Self {
            pin,
            polarity: Polarity::PullUp,
            edge: Edge::Released,
        }
    }

    #[must_use]
    pub const fn pulled_down(mut self) -> Self {
        self.polarity = Polarity::PullDown;
        self
    }

    #[must_use]
    pub const fn on_press(mut self) -> Self {
        self.edge = Edge::Pressed;
        self
    }
}

#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AudioConfig<'a> {
    pub trigger: Binding,
    /// Busy line of the audio module, asserted while playing.
    pub busy: Option<Binding>,
    pub policy: AudioPolicy,
    pub selection: Selection,
    pub clips: &'a [Clip],
}

#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LightsConfig<'a> {
    pub trigger: Binding,
    pub frames: &'a [Color],
    pub frame_duration: u32,
}

#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config<'a> {
    pub debounce_ms: u32,
    pub audio: Option<AudioConfig<'a>>,
    pub lights: Option<LightsConfig<'a>>,
    /// Mirror the audio trigger on the status LED.
    pub indicator: bool,
}

impl Default for Config<'_> {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            audio: None,
            lights: None,
            indicator: false,
        }
    }
}

static SINGLE_CLIP: [Clip; 1] = [Clip::looped(1)];

static SCARE_CLIPS: [Clip; 4] = [
    Clip::once(1),
    Clip::once(2),
    Clip::once(3),
    Clip::once(4),
];

static FLICKER: [Color; 2] = [Color::ORANGE, Color::PURPLE];

/// One button starting and stopping a single looping clip, with the status
/// LED following the button.
#[must_use]
pub fn single_button() -> Config<'static> {
    Config {
        audio: Some(AudioConfig {
            trigger: Binding::new(pins::AUDIO_TRIGGER),
            busy: None,
            policy: AudioPolicy::Toggle,
            selection: Selection::Fixed(0),
            clips: &SINGLE_CLIP,
        }),
        indicator: true,
        ..Config::default()
    }
}

/// One button playing a random clip, or stopping the one playing.
#[must_use]
pub fn random_clips() -> Config<'static> {
    Config {
        audio: Some(AudioConfig {
            trigger: Binding::new(pins::AUDIO_TRIGGER),
            busy: Some(Binding::new(pins::BUSY)),
            policy: AudioPolicy::BusyCheck,
            selection: Selection::Random,
            clips: &SCARE_CLIPS,
        }),
        ..Config::default()
    }
}

/// Motion sensor toggling the lights when it detects movement.
#[must_use]
pub fn motion_lights() -> Config<'static> {
    Config {
        lights: Some(LightsConfig {
            trigger: Binding::new(pins::LIGHTS_TRIGGER).pulled_down().on_press(),
            frames: &FLICKER,
            frame_duration: DEFAULT_FRAME_DURATION_MS,
        }),
        ..Config::default()
    }
}

/// Separate triggers for random clips and for the lights.
#[must_use]
pub fn audio_and_lights() -> Config<'static> {
    Config {
        audio: random_clips().audio,
        lights: Some(LightsConfig {
            trigger: Binding::new(pins::LIGHTS_TRIGGER),
            frames: &FLICKER,
            frame_duration: DEFAULT_FRAME_DURATION_MS,
        }),
        ..Config::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_released_edge_is_configured_it_ignores_presses() {
        assert!(Edge::Released.fires_on(Event::Released));
        assert!(!Edge::Released.fires_on(Event::Pressed));
        assert!(!Edge::Released.fires_on(Event::StillReleased(0)));
    }

    #[test]
    fn when_pressed_edge_is_configured_it_ignores_releases() {
        assert!(Edge::Pressed.fires_on(Event::Pressed));
        assert!(!Edge::Pressed.fires_on(Event::Released));
        assert!(!Edge::Pressed.fires_on(Event::StillPressed(10)));
    }

    #[test]
    fn bindings_default_to_pull_up_on_release() {
        let binding = Binding::new(Pin(4));
        assert_eq!(binding.polarity, Polarity::PullUp);
        assert_eq!(binding.edge, Edge::Released);

        let binding = binding.pulled_down().on_press();
        assert_eq!(binding.polarity, Polarity::PullDown);
        assert_eq!(binding.edge, Edge::Pressed);
    }
}
