//! Setup-time failures.
//!
//! Polling never fails. Everything that can go wrong is caught while the
//! pipeline is being wired up, so the firmware can refuse to start instead of
//! misbehaving later.

use core::fmt;

use crate::debounce::Pin;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// The input was already bound to a pin. It must be reset first.
    AlreadyConfigured(Pin),
    /// A clip index does not resolve to a configured clip.
    ClipOutOfRange { index: usize, len: usize },
    /// The clip set is empty or exceeds its capacity.
    NoClips,
    /// The frame sequence is empty or exceeds its capacity.
    NoFrames,
    /// Frames would advance on every tick.
    ZeroFrameDuration,
    /// Busy-check policy without a busy line to check.
    MissingBusyLine,
    /// Neither audio nor lights are configured.
    NoTriggers,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyConfigured(pin) => {
                write!(f, "input on pin {} is already configured", pin.0)
            }
            Self::ClipOutOfRange { index, len } => {
                write!(f, "clip index {index} is out of range for {len} clips")
            }
            Self::NoClips => write!(
                f,
                "clip set must hold between 1 and {} clips",
                crate::clip::MAX_CLIPS
            ),
            Self::NoFrames => write!(
                f,
                "animation must hold between 1 and {} frames",
                crate::animation::MAX_FRAMES
            ),
            Self::ZeroFrameDuration => write!(f, "frame duration must be longer than 0 ms"),
            Self::MissingBusyLine => write!(f, "busy-check policy requires a busy line"),
            Self::NoTriggers => write!(f, "neither audio nor lights are configured"),
        }
    }
}
