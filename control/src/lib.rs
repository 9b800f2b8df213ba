//! Hardware-independent control of a triggered audio and light prop.
//!
//! A button, a motion sensor or any other switch is debounced and its edges
//! start or stop a clip on an MP3 module and an animation on an LED strip.
//! It is meant to run in a firmware with a single cooperative loop, ticking
//! the `Store` every millisecond:
//!
//! ```text
//!     [Inputs] --(levels)--> [ Store {Session} ] --(Reaction)--> [Player]
//!                                    A                             [Strip]
//!     [Player status] --(AudioEvent)-+                             [LED]
//! ```
//!
//! Nothing here touches hardware directly. The firmware implements the
//! traits in `peripheral` and forwards the reactions.

#![cfg_attr(not(test), no_std)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]

pub mod animation;
pub mod audio;
pub mod clip;
pub mod config;
pub mod debounce;
pub mod error;
pub mod output;
pub mod peripheral;
pub mod session;
pub mod store;

mod log;

#[cfg(test)]
mod testing;

pub use config::Config;
pub use error::ConfigError;
pub use output::Reaction;
pub use store::Store;
