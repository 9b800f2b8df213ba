//! Peripheral doubles shared by unit tests.

use heapless::Vec;

use crate::animation::Color;
use crate::clip::Clip;
use crate::debounce::Pin;
use crate::peripheral::{AudioPlayer, Indicator, LevelSource, LightStrip, Random};

/// Replays a fixed list of draws, wrapping around at the end.
pub struct Sequence<'a> {
    values: &'a [f32],
    position: usize,
}

impl<'a> Sequence<'a> {
    pub fn new(values: &'a [f32]) -> Self {
        Self {
            values,
            position: 0,
        }
    }
}

impl Random for Sequence<'_> {
    fn normal(&mut self) -> f32 {
        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        value
    }
}

/// Electrical levels of up to 32 lines, all high on start as if pulled up.
pub struct Lines {
    high: [bool; 32],
}

impl Default for Lines {
    fn default() -> Self {
        Self { high: [true; 32] }
    }
}

impl Lines {
    pub fn set(&mut self, pin: Pin, high: bool) {
        self.high[pin.0 as usize] = high;
    }
}

impl LevelSource for Lines {
    fn read_level(&mut self, pin: Pin) -> bool {
        self.high[pin.0 as usize]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Play(Clip),
    Stop,
}

#[derive(Default)]
pub struct Player {
    pub calls: Vec<Call, 16>,
}

impl AudioPlayer for Player {
    fn play(&mut self, clip: Clip) {
        self.calls.push(Call::Play(clip)).unwrap();
    }

    fn stop(&mut self) {
        self.calls.push(Call::Stop).unwrap();
    }
}

pub struct Strip {
    pub pixels: [Color; 4],
    pub shown: [Color; 4],
    pub shows: usize,
}

impl Default for Strip {
    fn default() -> Self {
        Self {
            pixels: [Color::BLACK; 4],
            shown: [Color::BLACK; 4],
            shows: 0,
        }
    }
}

impl LightStrip for Strip {
    fn len(&self) -> usize {
        self.pixels.len()
    }

    fn set_pixel(&mut self, index: usize, color: Color) {
        self.pixels[index] = color;
    }

    fn show(&mut self) {
        self.shown = self.pixels;
        self.shows += 1;
    }

    fn clear(&mut self) {
        self.pixels = [Color::BLACK; 4];
    }
}

#[derive(Default)]
pub struct Led {
    pub on: Option<bool>,
}

impl Indicator for Led {
    fn set(&mut self, on: bool) {
        self.on = Some(on);
    }
}
