//! Filter noisy digital lines into clean logical levels.
//!
//! Each input is sampled cooperatively from the control loop. A raw change
//! is accepted only after the line stayed at the new level for the whole
//! debounce interval. Electrical polarity is resolved here, callers only see
//! whether the input is asserted or idle.

use crate::error::ConfigError;
use crate::peripheral::LevelSource;

/// Identifier of a physical input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pin(pub u8);

/// Which way the line is pulled while nobody touches it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Idles high, asserted when pulled to ground.
    #[default]
    PullUp,
    /// Idles low, asserted when driven high.
    PullDown,
}

impl Polarity {
    fn level(self, high: bool) -> Level {
        let asserted = match self {
            Self::PullUp => !high,
            Self::PullDown => high,
        };
        if asserted {
            Level::Asserted
        } else {
            Level::Idle
        }
    }
}

/// Logical level of an input, independent of its wiring.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    #[default]
    Idle,
    Asserted,
}

impl Level {
    #[must_use]
    pub fn is_asserted(self) -> bool {
        self == Self::Asserted
    }
}

/// Outcome of a single poll.
///
/// Edges are reported exactly once per committed transition. While the
/// debounced level agrees with the line, every poll reports how long the
/// current level has been held, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    NoChange,
    Pressed,
    Released,
    StillPressed(u32),
    StillReleased(u32),
}

impl Event {
    #[must_use]
    pub fn is_edge(self) -> bool {
        matches!(self, Self::Pressed | Self::Released)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
struct DebounceState {
    pin: Pin,
    raw_last_read: Level,
    debounced_level: Level,
    last_change: u32,
    state_entered: u32,
    interval: u32,
    polarity: Polarity,
}

/// Debounced view of one input line.
///
/// All time arithmetic is done through wrapping subtraction, so a single
/// rollover of the millisecond clock does not disturb a pending transition.
#[derive(Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DebouncedInput {
    state: Option<DebounceState>,
}

impl DebouncedInput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind the input to a line and seed it with its current level.
    ///
    /// No event is reported for the seeded level, a line held asserted since
    /// power-up starts as pressed without a synthetic edge.
    ///
    /// # Errors
    ///
    /// Fails with `ConfigError::AlreadyConfigured` if the input was bound
    /// before and not reset since.
    pub fn configure<S: LevelSource>(
        &mut self,
        source: &mut S,
        pin: Pin,
        interval_ms: u32,
        polarity: Polarity,
        now: u32,
    ) -> Result<(), ConfigError> {
        if let Some(state) = self.state {
            return Err(ConfigError::AlreadyConfigured(state.pin));
        }

        let level = polarity.level(source.read_level(pin));
        self.state = Some(DebounceState {
            pin,
            raw_last_read: level,
            debounced_level: level,
            last_change: now,
            state_entered: now,
            interval: interval_ms,
            polarity,
        });

        Ok(())
    }

    pub fn reset(&mut self) {
        self.state = None;
    }

    /// Sample the line and advance the debounce state machine.
    ///
    /// The timestamp must not go backwards, apart from the rollover of the
    /// clock. An input that was never configured always reports `NoChange`.
    pub fn poll<S: LevelSource>(&mut self, source: &mut S, now: u32) -> Event {
        let Some(state) = self.state.as_mut() else {
            return Event::NoChange;
        };

        let raw = state.polarity.level(source.read_level(state.pin));
        if raw != state.raw_last_read {
            state.raw_last_read = raw;
            state.last_change = now;
        }

        if raw != state.debounced_level {
            if now.wrapping_sub(state.last_change) < state.interval {
                return Event::NoChange;
            }
            state.debounced_level = raw;
            state.state_entered = now;
            return match raw {
                Level::Asserted => Event::Pressed,
                Level::Idle => Event::Released,
            };
        }

        let duration = now.wrapping_sub(state.state_entered);
        match state.debounced_level {
            Level::Asserted => Event::StillPressed(duration),
            Level::Idle => Event::StillReleased(duration),
        }
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.state.is_some()
    }

    /// The debounced level. Idle when not configured.
    #[must_use]
    pub fn level(&self) -> Level {
        self.state.map_or(Level::Idle, |s| s.debounced_level)
    }

    #[must_use]
    pub fn pin(&self) -> Option<Pin> {
        self.state.map(|s| s.pin)
    }

    /// Time at which the current debounced level was entered.
    #[must_use]
    pub fn state_entered(&self) -> Option<u32> {
        self.state.map(|s| s.state_entered)
    }
}
