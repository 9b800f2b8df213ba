use prop_control::config::{pins, DEFAULT_DEBOUNCE_MS};
use prop_control::debounce::{DebouncedInput, Event, Polarity};

use crate::system::inputs::Inputs;

const CYCLES_PER_MS: u32 = 480_000_000 / 1000;

/// Block until the audio trigger is pressed and released.
///
/// # Panics
///
/// Panics if the trigger can not be configured.
pub fn sample_until_button_is_clicked(inputs: &mut Inputs) {
    let mut button = DebouncedInput::new();
    let mut now = 0;
    button
        .configure(
            inputs,
            pins::AUDIO_TRIGGER,
            DEFAULT_DEBOUNCE_MS,
            Polarity::PullUp,
            now,
        )
        .unwrap();
    loop {
        now += 1;
        if button.poll(inputs, now) == Event::Released {
            break;
        }
        cortex_m::asm::delay(CYCLES_PER_MS);
    }
}
