use std::fmt;

use crate::config::RepeatModeSetting;

/// What navigation does at the ends of the playlist.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum RepeatMode {
    /// Stop at the first and last track.
    #[default]
    None,
    /// Every next/previous replays the current track.
    One,
    /// Wrap around at both ends.
    All,
}

impl RepeatMode {
    /// The mode after this one in the `None -> One -> All -> None` cycle.
    pub fn cycled(self) -> Self {
        match self {
            Self::None => Self::One,
            Self::One => Self::All,
            Self::All => Self::None,
        }
    }
}

impl fmt::Display for RepeatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::None => "NONE",
            Self::One => "ONE",
            Self::All => "ALL",
        })
    }
}

impl From<RepeatModeSetting> for RepeatMode {
    fn from(setting: RepeatModeSetting) -> Self {
        match setting {
            RepeatModeSetting::None => Self::None,
            RepeatModeSetting::One => Self::One,
            RepeatModeSetting::All => Self::All,
        }
    }
}
