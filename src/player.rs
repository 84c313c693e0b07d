//! Hands tracks to something outside the process that can actually play them.
//!
//! The playlist only knows about the `Launcher` trait; which program opens a
//! file (and how that differs per platform) is decided here.

mod launcher;
#[cfg(test)]
mod recording;

pub use launcher::{LaunchError, LaunchTarget, Launcher, SystemLauncher};
#[cfg(test)]
pub(crate) use recording::RecordingLauncher;
