use daisy::hal::rng::{Rng, RngCore};

use prop_control::peripheral::Random;

pub struct Randomizer {
    pub rng: Rng,
}

impl Randomizer {
    #[must_use]
    pub fn new(rng: Rng) -> Self {
        Self { rng }
    }
}

impl Random for Randomizer {
    #[allow(clippy::cast_lossless)]
    fn normal(&mut self) -> f32 {
        // A failed draw falls back to the first clip.
        let draw = RngCore::<u16>::gen(&mut self.rng).unwrap_or(0);
        draw as f32 / (1 << 16) as f32
    }
}
