//! What the installation is doing right now.

use crate::clip::Selected;

/// Session state shared by the trigger reactions.
///
/// Audio is active exactly when a clip is selected, the two can not drift
/// apart. The current light frame and its start time are kept by the
/// animation itself.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TriggerSession {
    selected: Option<Selected>,
    lights_active: bool,
}

impl TriggerSession {
    #[must_use]
    pub fn selected(&self) -> Option<Selected> {
        self.selected
    }

    #[must_use]
    pub fn audio_active(&self) -> bool {
        self.selected.is_some()
    }

    #[must_use]
    pub fn lights_active(&self) -> bool {
        self.lights_active
    }

    pub(crate) fn start_audio(&mut self, selected: Selected) {
        self.selected = Some(selected);
    }

    pub(crate) fn stop_audio(&mut self) {
        self.selected = None;
    }

    /// Flip the lights and return the new state.
    pub(crate) fn toggle_lights(&mut self) -> bool {
        self.lights_active = !self.lights_active;
        self.lights_active
    }
}
