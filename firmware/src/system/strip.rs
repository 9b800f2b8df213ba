use smart_leds::{SmartLedsWrite, RGB8};
use ws2812_spi::Ws2812;

use prop_control::animation::Color;
use prop_control::peripheral::LightStrip;

use crate::system::hal::pac::SPI2;
use crate::system::hal::spi::{Enabled, Spi};

pub const LED_COUNT: usize = 60;

type Driver = Ws2812<Spi<SPI2, Enabled>>;

/// WS2812 strip driven through SPI.
pub struct Strip {
    driver: Driver,
    pixels: [RGB8; LED_COUNT],
}

impl Strip {
    #[must_use]
    pub fn new(spi: Spi<SPI2, Enabled>) -> Self {
        let mut strip = Self {
            driver: Ws2812::new(spi),
            pixels: [RGB8::default(); LED_COUNT],
        };
        strip.show(); // Blank whatever the strip held before reset
        strip
    }
}

impl LightStrip for Strip {
    fn len(&self) -> usize {
        LED_COUNT
    }

    fn set_pixel(&mut self, index: usize, color: Color) {
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = RGB8::new(color.r, color.g, color.b);
        }
    }

    fn show(&mut self) {
        if self.driver.write(self.pixels.iter().copied()).is_err() {
            defmt::warn!("Failed to write to the LED strip");
        }
    }

    fn clear(&mut self) {
        self.pixels = [RGB8::default(); LED_COUNT];
    }
}
