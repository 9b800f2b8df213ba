//! Cycle the strip through a fixed sequence of colors.

use heapless::Vec;

use crate::error::ConfigError;

pub const MAX_FRAMES: usize = 8;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const RED: Self = Self::new(255, 0, 0);
    pub const GREEN: Self = Self::new(0, 255, 0);
    pub const BLUE: Self = Self::new(0, 0, 255);
    pub const PURPLE: Self = Self::new(128, 0, 128);
    pub const ORANGE: Self = Self::new(255, 80, 0);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Request for the strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LightsCommand {
    /// Paint every pixel with the color.
    Fill(Color),
    Clear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    Idle,
    Animating { frame: usize, started: u32 },
}

/// Frame sequencer.
///
/// Frames advance only from `update`, at most by one per call, so a late
/// update delays the animation rather than skipping frames.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Animation {
    frames: Vec<Color, MAX_FRAMES>,
    frame_duration: u32,
    state: State,
}

impl Animation {
    /// # Errors
    ///
    /// Fails when there are no frames, more than `MAX_FRAMES` of them, or
    /// when the frame duration is zero.
    pub fn new(frames: &[Color], frame_duration: u32) -> Result<Self, ConfigError> {
        if frames.is_empty() {
            return Err(ConfigError::NoFrames);
        }
        if frame_duration == 0 {
            return Err(ConfigError::ZeroFrameDuration);
        }
        let frames = Vec::from_slice(frames).map_err(|()| ConfigError::NoFrames)?;
        Ok(Self {
            frames,
            frame_duration,
            state: State::Idle,
        })
    }

    /// Start from the first frame. Restarts if already running.
    pub fn start(&mut self, now: u32) -> LightsCommand {
        self.state = State::Animating {
            frame: 0,
            started: now,
        };
        LightsCommand::Fill(self.frames[0])
    }

    pub fn stop(&mut self) -> LightsCommand {
        self.state = State::Idle;
        LightsCommand::Clear
    }

    /// Advance to the next frame once the current one has been shown long
    /// enough. Returns the new frame to be displayed.
    pub fn update(&mut self, now: u32) -> Option<LightsCommand> {
        let State::Animating { frame, started } = self.state else {
            return None;
        };

        if now.wrapping_sub(started) < self.frame_duration {
            return None;
        }

        let frame = (frame + 1) % self.frames.len();
        self.state = State::Animating {
            frame,
            started: now,
        };
        Some(LightsCommand::Fill(self.frames[frame]))
    }

    #[must_use]
    pub fn state(&self) -> State {
        self.state
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        matches!(self.state, State::Animating { .. })
    }

    #[must_use]
    pub fn current_frame(&self) -> Option<usize> {
        match self.state {
            State::Idle => None,
            State::Animating { frame, .. } => Some(frame),
        }
    }

    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LENGTH: u32 = 500;

    fn two_frames() -> Animation {
        Animation::new(&[Color::RED, Color::BLUE], LENGTH).unwrap()
    }

    #[test]
    fn when_created_it_is_idle() {
        let mut animation = two_frames();
        assert_eq!(animation.state(), State::Idle);
        assert_eq!(animation.update(10_000), None);
    }

    #[test]
    fn when_built_without_frames_it_fails() {
        assert_eq!(
            Animation::new(&[], LENGTH).unwrap_err(),
            ConfigError::NoFrames
        );
    }

    #[test]
    fn when_built_with_too_many_frames_it_fails() {
        let frames = [Color::RED; MAX_FRAMES + 1];
        assert_eq!(
            Animation::new(&frames, LENGTH).unwrap_err(),
            ConfigError::NoFrames
        );
    }

    #[test]
    fn when_built_with_zero_duration_it_fails() {
        assert_eq!(
            Animation::new(&[Color::RED], 0).unwrap_err(),
            ConfigError::ZeroFrameDuration
        );
    }

    #[test]
    fn when_started_it_shows_the_first_frame() {
        let mut animation = two_frames();
        assert_eq!(animation.start(100), LightsCommand::Fill(Color::RED));
        assert_eq!(animation.current_frame(), Some(0));
    }

    #[test]
    fn when_running_it_cycles_frames_on_schedule() {
        let mut animation = two_frames();
        let t0 = 1_000;
        animation.start(t0);

        for now in t0..t0 + LENGTH {
            assert_eq!(animation.update(now), None);
            assert_eq!(animation.current_frame(), Some(0));
        }
        assert_eq!(
            animation.update(t0 + LENGTH),
            Some(LightsCommand::Fill(Color::BLUE))
        );
        for now in t0 + LENGTH..t0 + 2 * LENGTH {
            animation.update(now);
            assert_eq!(animation.current_frame(), Some(1));
        }
        assert_eq!(
            animation.update(t0 + 2 * LENGTH),
            Some(LightsCommand::Fill(Color::RED))
        );
        for now in t0 + 2 * LENGTH..t0 + 3 * LENGTH {
            animation.update(now);
            assert_eq!(animation.current_frame(), Some(0));
        }
    }

    #[test]
    fn when_update_comes_late_it_advances_only_one_frame() {
        let mut animation = Animation::new(&[Color::RED, Color::GREEN, Color::BLUE], 10).unwrap();
        animation.start(0);
        assert_eq!(
            animation.update(1_000),
            Some(LightsCommand::Fill(Color::GREEN))
        );
        assert_eq!(animation.current_frame(), Some(1));
        assert_eq!(animation.update(1_005), None);
    }

    #[test]
    fn when_stopped_it_clears_and_goes_idle() {
        let mut animation = two_frames();
        animation.start(0);
        assert_eq!(animation.stop(), LightsCommand::Clear);
        assert!(!animation.is_animating());
        assert_eq!(animation.update(LENGTH * 4), None);
    }

    #[test]
    fn when_clock_wraps_it_keeps_the_schedule() {
        let mut animation = two_frames();
        animation.start(u32::MAX - 100);
        assert_eq!(animation.update(LENGTH - 102), None);
        assert_eq!(
            animation.update(LENGTH - 101),
            Some(LightsCommand::Fill(Color::BLUE))
        );
    }
}
