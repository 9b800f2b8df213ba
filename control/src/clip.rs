//! Clips stored on the audio module and the way the next one is picked.

use heapless::Vec;

use crate::error::ConfigError;
use crate::peripheral::Random;

pub const MAX_CLIPS: usize = 16;

/// A clip stored on the audio module.
///
/// Whether it loops is only recorded here. The audio module is the one
/// repeating it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Clip {
    /// Track number as known to the audio module, starting from 1.
    pub track: u16,
    pub loops: bool,
}

impl Clip {
    #[must_use]
    pub const fn once(track: u16) -> Self {
        Self {
            track,
            loops: false,
        }
    }

    #[must_use]
    pub const fn looped(track: u16) -> Self {
        Self { track, loops: true }
    }
}

/// How the next clip is chosen.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Selection {
    /// Always the same clip.
    Fixed(usize),
    /// Round robin through the set, starting with the first.
    #[default]
    Sequential,
    /// Uniform draw over the set.
    Random,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Clips {
    clips: Vec<Clip, MAX_CLIPS>,
}

impl Clips {
    /// # Errors
    ///
    /// Fails with `ConfigError::NoClips` when empty or over capacity.
    pub fn new(clips: &[Clip]) -> Result<Self, ConfigError> {
        if clips.is_empty() {
            return Err(ConfigError::NoClips);
        }
        let clips = Vec::from_slice(clips).map_err(|()| ConfigError::NoClips)?;
        Ok(Self { clips })
    }

    /// # Errors
    ///
    /// Fails with `ConfigError::ClipOutOfRange` for an unknown index.
    pub fn get(&self, index: usize) -> Result<Clip, ConfigError> {
        self.clips
            .get(index)
            .copied()
            .ok_or(ConfigError::ClipOutOfRange {
                index,
                len: self.clips.len(),
            })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.clips.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }
}

/// A clip picked for playback together with its position in the set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Selected {
    pub index: usize,
    pub clip: Clip,
}

/// Picks clip indices according to the configured selection.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Selector {
    clips: Clips,
    selection: Selection,
    next: usize,
}

impl Selector {
    /// # Errors
    ///
    /// Fails with `ConfigError::ClipOutOfRange` when a fixed selection
    /// points outside of the set.
    pub fn new(clips: Clips, selection: Selection) -> Result<Self, ConfigError> {
        if let Selection::Fixed(index) = selection {
            clips.get(index)?;
        }
        Ok(Self {
            clips,
            selection,
            next: 0,
        })
    }

    /// Pick the clip to play next.
    pub fn select<R: Random>(&mut self, random: &mut R) -> Selected {
        let index = self.next_index(random);
        Selected {
            index,
            clip: self.clips.clips[index],
        }
    }

    fn next_index<R: Random>(&mut self, random: &mut R) -> usize {
        let len = self.clips.len();
        match self.selection {
            Selection::Fixed(index) => index,
            Selection::Sequential => {
                let index = self.next;
                self.next = (self.next + 1) % len;
                index
            }
            Selection::Random => {
                let draw = random.normal().clamp(0.0, 1.0);
                ((draw * len as f32) as usize).min(len - 1)
            }
        }
    }

    /// # Errors
    ///
    /// Fails with `ConfigError::ClipOutOfRange` for an unknown index.
    pub fn clip(&self, index: usize) -> Result<Clip, ConfigError> {
        self.clips.get(index)
    }

    #[must_use]
    pub fn clips(&self) -> &Clips {
        &self.clips
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::testing::Sequence;

    fn three_clips() -> Clips {
        Clips::new(&[Clip::once(1), Clip::looped(2), Clip::once(3)]).unwrap()
    }

    #[test]
    fn when_clip_set_is_empty_it_fails() {
        assert_eq!(Clips::new(&[]).unwrap_err(), ConfigError::NoClips);
    }

    #[test]
    fn when_clip_set_overflows_it_fails() {
        let clips = [Clip::once(1); MAX_CLIPS + 1];
        assert_eq!(Clips::new(&clips).unwrap_err(), ConfigError::NoClips);
    }

    #[test]
    fn when_index_is_out_of_range_it_is_rejected() {
        assert_eq!(
            three_clips().get(3),
            Err(ConfigError::ClipOutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn when_fixed_selection_is_out_of_range_it_fails() {
        assert_eq!(
            Selector::new(three_clips(), Selection::Fixed(7)).unwrap_err(),
            ConfigError::ClipOutOfRange { index: 7, len: 3 }
        );
    }

    #[test]
    fn when_fixed_it_always_picks_the_same_clip() {
        let mut selector = Selector::new(three_clips(), Selection::Fixed(1)).unwrap();
        let mut random = Sequence::new(&[0.0, 0.9]);
        for _ in 0..5 {
            assert_eq!(selector.select(&mut random).index, 1);
        }
        assert_eq!(selector.clip(1), Ok(Clip::looped(2)));
    }

    #[test]
    fn when_sequential_it_cycles_through_the_set() {
        let mut selector = Selector::new(three_clips(), Selection::Sequential).unwrap();
        let mut random = Sequence::new(&[0.5]);
        let picked: [usize; 5] = core::array::from_fn(|_| selector.select(&mut random).index);
        assert_eq!(picked, [0, 1, 2, 0, 1]);
    }

    #[test]
    fn when_random_it_maps_the_draw_over_the_whole_set() {
        let mut selector = Selector::new(three_clips(), Selection::Random).unwrap();
        let mut random = Sequence::new(&[0.0, 0.34, 0.99, 1.0, -0.5]);
        let picked: [usize; 5] = core::array::from_fn(|_| selector.select(&mut random).index);
        assert_eq!(picked, [0, 1, 2, 2, 0]);
    }
}
