//! The installation this firmware is built for.
//!
//! The variant is picked by a Cargo feature, e.g.
//! `cargo build --no-default-features --features motion-lights`. Wiring of
//! the logical pins is in `system::inputs`.

use prop_control::config::{self, Config};

#[cfg(not(any(
    feature = "single-button",
    feature = "random-clips",
    feature = "motion-lights",
    feature = "audio-and-lights"
)))]
compile_error!("enable one installation feature");

#[cfg(any(
    all(feature = "single-button", feature = "random-clips"),
    all(feature = "single-button", feature = "motion-lights"),
    all(feature = "single-button", feature = "audio-and-lights"),
    all(feature = "random-clips", feature = "motion-lights"),
    all(feature = "random-clips", feature = "audio-and-lights"),
    all(feature = "motion-lights", feature = "audio-and-lights"),
))]
compile_error!("installation features are mutually exclusive");

#[cfg(feature = "single-button")]
#[must_use]
pub fn config() -> Config<'static> {
    config::single_button()
}

#[cfg(feature = "random-clips")]
#[must_use]
pub fn config() -> Config<'static> {
    config::random_clips()
}

#[cfg(feature = "motion-lights")]
#[must_use]
pub fn config() -> Config<'static> {
    config::motion_lights()
}

#[cfg(feature = "audio-and-lights")]
#[must_use]
pub fn config() -> Config<'static> {
    config::audio_and_lights()
}
