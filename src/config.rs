//! Configuration loader and schema types.
//!
//! This module exposes the settings that shape scanning, the starting
//! playback state and the player command, plus helpers to load them.

mod load;
mod schema;

pub use schema::*;
