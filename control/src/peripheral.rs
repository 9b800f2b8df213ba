//! Hardware the control loop talks to.
//!
//! The control package never touches registers. The firmware implements
//! these traits over the board peripherals, tests implement them over plain
//! memory.

use crate::animation::Color;
use crate::clip::Clip;
use crate::debounce::Pin;

/// Source of raw electrical levels, `true` meaning high.
pub trait LevelSource {
    fn read_level(&mut self, pin: Pin) -> bool;
}

/// Audio module playing clips from its storage.
///
/// Stopping while nothing plays must be harmless.
pub trait AudioPlayer {
    fn play(&mut self, clip: Clip);
    fn stop(&mut self);
}

/// Addressable LED strip with a buffered pattern.
pub trait LightStrip {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn set_pixel(&mut self, index: usize, color: Color);

    /// Commit the buffered pattern to the strip.
    fn show(&mut self);

    fn clear(&mut self);
}

/// Single status LED.
pub trait Indicator {
    fn set(&mut self, on: bool);
}

/// Source of uniformly distributed randomness.
pub trait Random {
    /// Return a value within `[0.0, 1.0)`.
    fn normal(&mut self) -> f32;
}
