//! The control pipeline, reacting to inputs over time.
//!
//! It is meant to be ticked from a single cooperative loop, passing the
//! current time in milliseconds:
//!
//! ```text
//!   [Busy line] [Audio trigger] [Lights trigger]
//!        |             |               |
//!        +------> (DebouncedInput) <---+
//!                      |
//!                   (Event)
//!                      V
//!          [ Store {TriggerSession} ] <-- (AudioEvent)
//!                      |
//!                  (Reaction)
//!                      V
//!      [AudioPlayer] [LightStrip] [Indicator]
//! ```

use heapless::Vec;

use crate::animation::Animation;
use crate::audio::{self, AudioEvent, AudioTrigger};
use crate::clip::{Clips, Selector};
use crate::config::{AudioConfig, Binding, Config};
use crate::debounce::{DebouncedInput, Event, Level};
use crate::error::ConfigError;
use crate::log;
use crate::output::Reaction;
use crate::peripheral::{LevelSource, Random};
use crate::session::TriggerSession;

const MAX_INPUTS: usize = 3;

/// What an input is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Role {
    Busy,
    AudioTrigger,
    LightsTrigger,
}

#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
struct Input {
    role: Role,
    binding: Binding,
    debounced: DebouncedInput,
}

/// The main store of input abstractions and session state.
///
/// Inputs are polled in a fixed order: busy line, audio trigger, lights
/// trigger. A reaction to one input is complete before the next is polled.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Store {
    inputs: Vec<Input, MAX_INPUTS>,
    audio: Option<AudioTrigger>,
    animation: Option<Animation>,
    session: TriggerSession,
    indicator: bool,
}

impl Store {
    /// Validate the configuration and bind all inputs.
    ///
    /// # Errors
    ///
    /// Fails when the configuration is inconsistent, see `ConfigError`.
    pub fn new<S: LevelSource>(
        config: &Config<'_>,
        source: &mut S,
        now: u32,
    ) -> Result<Self, ConfigError> {
        if config.audio.is_none() && config.lights.is_none() {
            return Err(ConfigError::NoTriggers);
        }

        let audio = config.audio.as_ref().map(build_audio).transpose()?;
        let animation = config
            .lights
            .as_ref()
            .map(|lights| Animation::new(lights.frames, lights.frame_duration))
            .transpose()?;

        let mut bindings: Vec<(Role, Binding), MAX_INPUTS> = Vec::new();
        if let Some(audio) = &config.audio {
            if let Some(busy) = audio.busy {
                let _ = bindings.push((Role::Busy, busy));
            }
            let _ = bindings.push((Role::AudioTrigger, audio.trigger));
        }
        if let Some(lights) = &config.lights {
            let _ = bindings.push((Role::LightsTrigger, lights.trigger));
        }

        let mut inputs = Vec::new();
        for (role, binding) in bindings {
            let mut debounced = DebouncedInput::new();
            debounced.configure(
                source,
                binding.pin,
                config.debounce_ms,
                binding.polarity,
                now,
            )?;
            log::info!("Bound {} to pin {}", role, binding.pin);
            // NOTE: There is one slot per role.
            let _ = inputs.push(Input {
                role,
                binding,
                debounced,
            });
        }

        Ok(Self {
            inputs,
            audio,
            animation,
            session: TriggerSession::default(),
            indicator: config.indicator,
        })
    }

    /// Poll all inputs, react to their edges and advance the animation.
    ///
    /// At most one status event of the audio module is consumed per tick.
    pub fn tick<S: LevelSource, R: Random>(
        &mut self,
        source: &mut S,
        now: u32,
        audio_event: Option<AudioEvent>,
        random: &mut R,
    ) -> Reaction {
        let mut reaction = Reaction::default();

        for i in 0..self.inputs.len() {
            let event = self.inputs[i].debounced.poll(source, now);
            let Input { role, binding, .. } = self.inputs[i];
            self.react(role, binding, event, now, random, &mut reaction);
        }

        if let Some(event) = audio_event {
            audio::report(event);
        }

        if let Some(animation) = self.animation.as_mut() {
            if let Some(command) = animation.update(now) {
                reaction.lights = Some(command);
            }
        }

        reaction
    }

    fn react<R: Random>(
        &mut self,
        role: Role,
        binding: Binding,
        event: Event,
        now: u32,
        random: &mut R,
        reaction: &mut Reaction,
    ) {
        match event {
            Event::NoChange => return,
            Event::Pressed | Event::Released => {
                log::info!("{} on pin {}: {}", role, binding.pin, event);
            }
            Event::StillPressed(_) | Event::StillReleased(_) => {
                log::trace!("{} on pin {}: {}", role, binding.pin, event);
            }
        }

        match role {
            Role::Busy => {
                if event == Event::Released {
                    if let Some(audio) = self.audio.as_mut() {
                        audio.playback_ended(&mut self.session);
                    }
                }
            }
            Role::AudioTrigger => {
                if self.indicator && event.is_edge() {
                    reaction.indicator = Some(event == Event::Pressed);
                }
                if binding.edge.fires_on(event) {
                    let busy = self.level(Role::Busy).is_asserted();
                    if let Some(audio) = self.audio.as_mut() {
                        reaction.audio = Some(audio.trigger(&mut self.session, busy, random));
                    }
                }
            }
            Role::LightsTrigger => {
                if binding.edge.fires_on(event) {
                    if let Some(animation) = self.animation.as_mut() {
                        let command = if self.session.toggle_lights() {
                            animation.start(now)
                        } else {
                            animation.stop()
                        };
                        reaction.lights = Some(command);
                    }
                }
            }
        }
    }

    /// Debounced level of the input serving the role. Idle if there is none.
    #[must_use]
    pub fn level(&self, role: Role) -> Level {
        self.inputs
            .iter()
            .find(|input| input.role == role)
            .map_or(Level::Idle, |input| input.debounced.level())
    }

    #[must_use]
    pub fn session(&self) -> &TriggerSession {
        &self.session
    }

    #[must_use]
    pub fn animation(&self) -> Option<&Animation> {
        self.animation.as_ref()
    }
}

fn build_audio(config: &AudioConfig<'_>) -> Result<AudioTrigger, ConfigError> {
    if config.policy == audio::AudioPolicy::BusyCheck && config.busy.is_none() {
        return Err(ConfigError::MissingBusyLine);
    }
    let clips = Clips::new(config.clips)?;
    let selector = Selector::new(clips, config.selection)?;
    Ok(AudioTrigger::new(config.policy, selector))
}
