//! Playlist model: ordered tracks, a current-track cursor, one-shot shuffle
//! and the repeat-mode navigation rules.

mod model;
mod repeat;

pub use model::*;
pub use repeat::RepeatMode;
