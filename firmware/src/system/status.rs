use daisy::led::{Led, LedUser};

use prop_control::peripheral::Indicator;

/// The user LED of the board, mirroring the audio trigger.
pub struct StatusLed {
    led: LedUser,
}

impl StatusLed {
    #[must_use]
    pub fn new(led: LedUser) -> Self {
        Self { led }
    }
}

impl Indicator for StatusLed {
    fn set(&mut self, on: bool) {
        if on {
            self.led.on();
        } else {
            self.led.off();
        }
    }
}
