pub mod inputs;
pub mod player;
pub mod randomizer;
pub mod status;
pub mod strip;

pub use daisy::hal;

use hal::pac::CorePeripherals;
use hal::pac::Peripherals as DevicePeripherals;
use hal::prelude::*;
use hal::rng::RngExt;
use hal::spi;
use systick_monotonic::Systick;

use prop_control::Config;

use inputs::{Inputs, Pins as InputsPins};
use player::Player;
use randomizer::Randomizer;
use status::StatusLed;
use strip::Strip;

pub struct System {
    pub mono: Systick<1000>,
    pub status_led: StatusLed,
    pub inputs: Inputs,
    pub player: Player,
    pub strip: Strip,
    pub randomizer: Randomizer,
}

impl System {
    /// Initialize system abstraction
    ///
    /// Pull resistors of inputs are set according to the given
    /// configuration.
    ///
    /// # Panics
    ///
    /// The system can be initialized only once. It panics otherwise.
    #[must_use]
    pub fn init(mut cp: CorePeripherals, dp: DevicePeripherals, config: &Config<'_>) -> Self {
        enable_cache(&mut cp);

        let board = daisy::Board::take().unwrap();
        let ccdr = daisy::board_freeze_clocks!(board, dp);
        let pins = daisy::board_split_gpios!(board, ccdr, dp);

        let mono = Systick::new(cp.SYST, 480_000_000);
        let status_led = StatusLed::new(daisy::board_split_leds!(pins).USER);

        let inputs = Inputs::new(
            InputsPins {
                audio_trigger: pins.GPIO.PIN_B10,
                lights_trigger: pins.GPIO.PIN_B9,
                busy: pins.GPIO.PIN_A9,
            },
            config,
        );

        let player = {
            let serial = dp
                .USART1
                .serial(
                    (
                        pins.GPIO.PIN_B4.into_alternate(),
                        pins.GPIO.PIN_B3.into_alternate(),
                    ),
                    9_600.bps(),
                    ccdr.peripheral.USART1,
                    &ccdr.clocks,
                )
                .unwrap();
            let (tx, _rx) = serial.split();
            Player::new(tx)
        };

        let strip = {
            let spi = dp.SPI2.spi(
                (
                    pins.GPIO.PIN_D10.into_alternate(),
                    hal::spi::NoMiso,
                    pins.GPIO.PIN_D9.into_alternate(),
                ),
                spi::MODE_0,
                3.MHz(),
                ccdr.peripheral.SPI2,
                &ccdr.clocks,
            );
            Strip::new(spi)
        };

        let randomizer = Randomizer::new(dp.RNG.constrain(ccdr.peripheral.RNG, &ccdr.clocks));

        Self {
            mono,
            status_led,
            inputs,
            player,
            strip,
            randomizer,
        }
    }
}

/// AN5212: Improve application performance when fetching instruction and
/// data, from both internal and external memories.
fn enable_cache(cp: &mut CorePeripherals) {
    cp.SCB.enable_icache();
    // NOTE: This requires cache management around all use of DMA.
    cp.SCB.enable_dcache(&mut cp.CPUID);
}
