//! Serial audio module playing clips from its SD card.
//!
//! Only commands are sent. Whether the module plays is read from its busy
//! line, see `inputs`.

use prop_control::clip::Clip;
use prop_control::peripheral::AudioPlayer;

use crate::system::hal::pac::USART1;
use crate::system::hal::prelude::*;
use crate::system::hal::serial::Tx;

const START: u8 = 0x7E;
const VERSION: u8 = 0xFF;
const LENGTH: u8 = 0x06;
const NO_FEEDBACK: u8 = 0x00;
const END: u8 = 0xEF;

const PLAY_TRACK: u8 = 0x03;
const SET_VOLUME: u8 = 0x06;
const LOOP_TRACK: u8 = 0x08;
const STOP: u8 = 0x16;

const VOLUME: u16 = 20;

/// The module ignores the serial line until it reads its card after
/// power-up.
pub const BOOT_TIME_MS: u32 = 2_000;

pub struct Player {
    tx: Tx<USART1>,
    booted: bool,
}

impl Player {
    #[must_use]
    pub fn new(tx: Tx<USART1>) -> Self {
        Self { tx, booted: false }
    }

    /// Set the volume once the module had time to boot.
    ///
    /// Returns whether the module is ready to accept commands.
    pub fn boot(&mut self, now: u32) -> bool {
        if !self.booted && now >= BOOT_TIME_MS {
            self.send(SET_VOLUME, VOLUME);
            self.booted = true;
        }
        self.booted
    }

    fn send(&mut self, command: u8, parameter: u16) {
        let [high, low] = parameter.to_be_bytes();
        let mut frame = [
            START,
            VERSION,
            LENGTH,
            command,
            NO_FEEDBACK,
            high,
            low,
            0,
            0,
            END,
        ];
        let sum = frame[1..7]
            .iter()
            .fold(0u16, |sum, byte| sum.wrapping_add(u16::from(*byte)));
        let [checksum_high, checksum_low] = 0u16.wrapping_sub(sum).to_be_bytes();
        frame[7] = checksum_high;
        frame[8] = checksum_low;

        for byte in frame {
            if nb::block!(self.tx.write(byte)).is_err() {
                defmt::warn!("Failed to send command {:x} to the audio module", command);
                return;
            }
        }
    }
}

impl AudioPlayer for Player {
    fn play(&mut self, clip: Clip) {
        let command = if clip.loops { LOOP_TRACK } else { PLAY_TRACK };
        self.send(command, clip.track);
    }

    fn stop(&mut self) {
        self.send(STOP, 0);
    }
}
