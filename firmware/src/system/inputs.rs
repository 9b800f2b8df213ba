//! Raw levels of all trigger inputs.
//!
//! Debouncing happens in the control package, this only maps logical pins
//! to the board and reads them.

use prop_control::config::{pins, Config};
use prop_control::debounce::{Pin, Polarity};
use prop_control::peripheral::LevelSource;

use crate::system::hal::gpio;

pub type AudioTriggerPin = gpio::gpiog::PG14<gpio::Input>;
pub type LightsTriggerPin = gpio::gpiog::PG13<gpio::Input>;
pub type BusyPin = gpio::gpiob::PB15<gpio::Input>;

pub struct Pins {
    pub audio_trigger: gpio::gpiog::PG14<gpio::Analog>,
    pub lights_trigger: gpio::gpiog::PG13<gpio::Analog>,
    pub busy: gpio::gpiob::PB15<gpio::Analog>,
}

pub struct Inputs {
    pub audio_trigger: AudioTriggerPin,
    pub lights_trigger: LightsTriggerPin,
    pub busy: BusyPin,
}

macro_rules! into_input {
    ( $pin:expr, $polarity:expr ) => {
        match $polarity {
            Polarity::PullUp => $pin.into_pull_up_input(),
            Polarity::PullDown => $pin.into_pull_down_input(),
        }
    };
}

impl Inputs {
    /// Set pull resistors as the configuration expects them. Unused inputs
    /// are pulled up.
    #[must_use]
    pub fn new(pins: Pins, config: &Config<'_>) -> Self {
        let audio = config.audio.as_ref();
        let audio_trigger = audio.map_or(Polarity::PullUp, |a| a.trigger.polarity);
        let busy = audio
            .and_then(|a| a.busy)
            .map_or(Polarity::PullUp, |b| b.polarity);
        let lights_trigger = config
            .lights
            .as_ref()
            .map_or(Polarity::PullUp, |l| l.trigger.polarity);

        Self {
            audio_trigger: into_input!(pins.audio_trigger, audio_trigger),
            lights_trigger: into_input!(pins.lights_trigger, lights_trigger),
            busy: into_input!(pins.busy, busy),
        }
    }
}

impl LevelSource for Inputs {
    fn read_level(&mut self, pin: Pin) -> bool {
        match pin {
            pins::AUDIO_TRIGGER => self.audio_trigger.is_high(),
            pins::LIGHTS_TRIGGER => self.lights_trigger.is_high(),
            pins::BUSY => self.busy.is_high(),
            Pin(other) => {
                defmt::warn!("Reading unmapped pin {}", other);
                true
            }
        }
    }
}
