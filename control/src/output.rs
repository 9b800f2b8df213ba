use crate::animation::LightsCommand;
use crate::audio::AudioCommand;
use crate::peripheral::{AudioPlayer, Indicator, LightStrip};

/// Desired change of output peripherals after one control tick.
///
/// Each field is `None` when the peripheral should be left alone.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Reaction {
    pub audio: Option<AudioCommand>,
    pub lights: Option<LightsCommand>,
    pub indicator: Option<bool>,
}

impl Reaction {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.audio.is_none() && self.lights.is_none() && self.indicator.is_none()
    }

    /// Pass the reaction to the peripherals.
    pub fn dispatch<A, L, I>(&self, player: &mut A, strip: &mut L, indicator: &mut I)
    where
        A: AudioPlayer,
        L: LightStrip,
        I: Indicator,
    {
        match self.audio {
            Some(AudioCommand::Play(clip)) => player.play(clip),
            Some(AudioCommand::Stop) => player.stop(),
            None => (),
        }

        match self.lights {
            Some(LightsCommand::Fill(color)) => {
                for i in 0..strip.len() {
                    strip.set_pixel(i, color);
                }
                strip.show();
            }
            Some(LightsCommand::Clear) => {
                strip.clear();
                strip.show();
            }
            None => (),
        }

        if let Some(on) = self.indicator {
            indicator.set(on);
        }
    }
}
