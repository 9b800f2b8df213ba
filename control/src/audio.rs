//! Start and stop clips from a trigger.
//!
//! Two policies are supported. Busy-check asks the audio module's busy line
//! whether something plays, so it follows clips ending on their own. Toggle
//! only remembers what it asked for last and is kept for installations
//! without the busy line wired.

use crate::clip::{Clip, Selector};
use crate::log;
use crate::peripheral::Random;
use crate::session::TriggerSession;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AudioPolicy {
    /// Consult the busy line of the audio module.
    #[default]
    BusyCheck,
    /// Flip a locally tracked flag.
    Toggle,
}

/// Request for the audio module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AudioCommand {
    Play(Clip),
    Stop,
}

/// Status reported by the audio module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AudioEvent {
    TimeOut,
    WrongStack,
    CardInserted,
    CardRemoved,
    CardOnline,
    PlayFinished(u16),
    Error(ErrorCode),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ErrorCode {
    Busy,
    Sleeping,
    SerialWrongStack,
    CheckSum,
    FileIndexOut,
    FileMismatch,
    Advertise,
}

impl AudioEvent {
    #[must_use]
    pub fn is_fault(self) -> bool {
        matches!(self, Self::TimeOut | Self::WrongStack | Self::Error(_))
    }
}

/// Log the event. Nothing else happens, faults are not retried and the
/// session stays as it is.
pub fn report(event: AudioEvent) {
    if event.is_fault() {
        log::warning!("Audio fault: {}", event);
    } else {
        log::info!("Audio event: {}", event);
    }
}

/// Reaction of the audio path to its trigger.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AudioTrigger {
    policy: AudioPolicy,
    selector: Selector,
}

impl AudioTrigger {
    #[must_use]
    pub fn new(policy: AudioPolicy, selector: Selector) -> Self {
        Self { policy, selector }
    }

    #[must_use]
    pub fn policy(&self) -> AudioPolicy {
        self.policy
    }

    /// React to the trigger edge.
    ///
    /// `busy` is the state of the busy line. The toggle policy ignores it.
    pub fn trigger<R: Random>(
        &mut self,
        session: &mut TriggerSession,
        busy: bool,
        random: &mut R,
    ) -> AudioCommand {
        let playing = match self.policy {
            AudioPolicy::BusyCheck => busy,
            AudioPolicy::Toggle => session.audio_active(),
        };

        if playing {
            session.stop_audio();
            log::info!("Stopping audio");
            AudioCommand::Stop
        } else {
            let selected = self.selector.select(random);
            session.start_audio(selected);
            log::info!(
                "Playing clip {} (track {}, loops: {})",
                selected.index,
                selected.clip.track,
                selected.clip.loops
            );
            AudioCommand::Play(selected.clip)
        }
    }

    /// The busy line went idle, the module is no longer playing.
    pub fn playback_ended(&mut self, session: &mut TriggerSession) {
        if self.policy == AudioPolicy::BusyCheck && session.audio_active() {
            log::info!("Playback ended");
            session.stop_audio();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::clip::{Clips, Selection};
    use crate::testing::Sequence;

    fn audio_trigger(policy: AudioPolicy, selection: Selection) -> AudioTrigger {
        let clips = Clips::new(&[Clip::once(1), Clip::looped(2), Clip::once(3)]).unwrap();
        AudioTrigger::new(policy, Selector::new(clips, selection).unwrap())
    }

    #[test]
    fn when_busy_line_is_idle_twice_it_plays_twice() {
        let mut trigger = audio_trigger(AudioPolicy::BusyCheck, Selection::Random);
        let mut session = TriggerSession::default();
        let mut random = Sequence::new(&[0.9, 0.1]);

        assert_eq!(
            trigger.trigger(&mut session, false, &mut random),
            AudioCommand::Play(Clip::once(3))
        );
        assert_eq!(
            trigger.trigger(&mut session, false, &mut random),
            AudioCommand::Play(Clip::once(1))
        );
        assert_eq!(session.selected().map(|s| s.index), Some(0));
    }

    #[test]
    fn when_busy_line_is_asserted_it_stops_and_clears_selection() {
        let mut trigger = audio_trigger(AudioPolicy::BusyCheck, Selection::Fixed(1));
        let mut session = TriggerSession::default();
        let mut random = Sequence::new(&[0.0]);

        trigger.trigger(&mut session, false, &mut random);
        assert!(session.audio_active());
        assert!(session.selected().unwrap().clip.loops);

        assert_eq!(
            trigger.trigger(&mut session, true, &mut random),
            AudioCommand::Stop
        );
        assert!(!session.audio_active());
        assert_eq!(session.selected(), None);
    }

    #[test]
    fn when_busy_line_goes_idle_it_clears_the_session() {
        let mut trigger = audio_trigger(AudioPolicy::BusyCheck, Selection::Sequential);
        let mut session = TriggerSession::default();
        let mut random = Sequence::new(&[0.0]);

        trigger.trigger(&mut session, false, &mut random);
        trigger.playback_ended(&mut session);
        assert!(!session.audio_active());
    }

    #[test]
    fn when_toggling_it_alternates_play_and_stop() {
        let mut trigger = audio_trigger(AudioPolicy::Toggle, Selection::Sequential);
        let mut session = TriggerSession::default();
        let mut random = Sequence::new(&[0.0]);

        assert_eq!(
            trigger.trigger(&mut session, true, &mut random),
            AudioCommand::Play(Clip::once(1))
        );
        assert_eq!(
            trigger.trigger(&mut session, false, &mut random),
            AudioCommand::Stop
        );
        assert_eq!(
            trigger.trigger(&mut session, false, &mut random),
            AudioCommand::Play(Clip::looped(2))
        );
    }

    #[test]
    fn when_toggling_it_ignores_playback_ending_on_its_own() {
        let mut trigger = audio_trigger(AudioPolicy::Toggle, Selection::Sequential);
        let mut session = TriggerSession::default();
        let mut random = Sequence::new(&[0.0]);

        trigger.trigger(&mut session, false, &mut random);
        trigger.playback_ended(&mut session);
        assert!(session.audio_active());
    }

    #[test]
    fn faults_are_told_apart_from_status() {
        assert!(AudioEvent::TimeOut.is_fault());
        assert!(AudioEvent::Error(ErrorCode::CheckSum).is_fault());
        assert!(!AudioEvent::PlayFinished(3).is_fault());
        assert!(!AudioEvent::CardRemoved.is_fault());
    }

    #[test]
    fn when_reporting_events_it_accepts_faults_and_status() {
        report(AudioEvent::TimeOut);
        report(AudioEvent::Error(ErrorCode::FileMismatch));
        report(AudioEvent::PlayFinished(2));
        report(AudioEvent::CardOnline);
    }
}
