//! The playlist itself: an ordered list of tracks plus a cursor.
//!
//! Tracks live in a `Vec` in folder-scan order and the current track is an
//! index into it. The cursor is `Some` exactly when the list is non-empty.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use thiserror::Error;

use crate::config::LibrarySettings;
use crate::library::{self, ScanError, Track};
use crate::player::{LaunchError, Launcher};

use super::repeat::RepeatMode;

/// Which end of the playlist navigation ran into.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Boundary {
    Start,
    End,
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Start => "Start",
            Self::End => "End",
        })
    }
}

/// Direction of a cursor move.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    fn boundary(self) -> Boundary {
        match self {
            Self::Forward => Boundary::End,
            Self::Backward => Boundary::Start,
        }
    }
}

/// Why a play or navigation request did nothing (or only partly succeeded).
///
/// None of these are fatal; they are reported to the user and the session
/// carries on.
#[derive(Debug, Error)]
pub enum PlaybackError {
    #[error("No song selected.")]
    EmptySelection,
    #[error("{0} of playlist.")]
    BoundaryReached(Boundary),
    /// The cursor is already on the requested track; only starting the
    /// player failed.
    #[error(transparent)]
    Launch(#[from] LaunchError),
}

/// The track handed to the launcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NowPlaying {
    /// Zero-based position in the playlist.
    pub position: usize,
    pub filename: String,
    pub path: PathBuf,
}

impl fmt::Display for NowPlaying {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Playing: {}", self.filename)
    }
}

pub struct Playlist {
    tracks: Vec<Track>,
    cursor: Option<usize>,
    repeat: RepeatMode,
    folder: PathBuf,
    rng: StdRng,
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

impl Playlist {
    /// Create an empty playlist for `folder`, with shuffling seeded from the
    /// wall clock.
    pub fn new(folder: impl Into<PathBuf>) -> Self {
        Self::with_rng(folder, StdRng::seed_from_u64(clock_seed()))
    }

    /// Create an empty playlist that shuffles with the given random source.
    pub fn with_rng(folder: impl Into<PathBuf>, rng: StdRng) -> Self {
        Self {
            tracks: Vec::new(),
            cursor: None,
            repeat: RepeatMode::default(),
            folder: folder.into(),
            rng,
        }
    }

    /// Append a track at the tail. The first track appended becomes current.
    pub fn append(&mut self, track: Track) {
        self.tracks.push(track);
        if self.cursor.is_none() {
            self.cursor = Some(0);
        }
    }

    /// Scan the playlist folder and append every audio file found.
    ///
    /// Returns how many tracks were added. On error nothing is added.
    pub fn load_from_folder(&mut self, settings: &LibrarySettings) -> Result<usize, ScanError> {
        let found = library::scan(&self.folder, settings)?;
        let added = found.len();
        for track in found {
            self.append(track);
        }
        Ok(added)
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }

    /// Zero-based index of the current track.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn current(&self) -> Option<&Track> {
        self.cursor.and_then(|i| self.tracks.get(i))
    }

    pub fn repeat_mode(&self) -> RepeatMode {
        self.repeat
    }

    pub fn set_repeat_mode(&mut self, mode: RepeatMode) {
        self.repeat = mode;
    }

    /// Advance the repeat mode one step and return the new mode.
    pub fn cycle_repeat_mode(&mut self) -> RepeatMode {
        self.repeat = self.repeat.cycled();
        self.repeat
    }

    /// Hand the current track to `launcher`. Never changes the playlist.
    pub fn play_current<L: Launcher + ?Sized>(
        &self,
        launcher: &mut L,
    ) -> Result<NowPlaying, PlaybackError> {
        let (position, track) = self
            .cursor
            .and_then(|i| self.tracks.get(i).map(|t| (i, t)))
            .ok_or(PlaybackError::EmptySelection)?;

        let path = self.folder.join(track.name());
        launcher.launch(&path)?;
        Ok(NowPlaying {
            position,
            filename: track.filename().into_owned(),
            path,
        })
    }

    /// Move the cursor one step according to the repeat mode, without playing.
    ///
    /// Returns the new cursor. Under `RepeatMode::One` the cursor stays put.
    pub fn step(&mut self, direction: Direction) -> Result<usize, PlaybackError> {
        let current = self.cursor.ok_or(PlaybackError::EmptySelection)?;
        let last = self.tracks.len() - 1;

        let target = match (self.repeat, direction) {
            (RepeatMode::One, _) => current,
            (_, Direction::Forward) if current < last => current + 1,
            (_, Direction::Backward) if current > 0 => current - 1,
            (RepeatMode::All, Direction::Forward) => 0,
            (RepeatMode::All, Direction::Backward) => last,
            (RepeatMode::None, _) => {
                return Err(PlaybackError::BoundaryReached(direction.boundary()));
            }
        };

        self.cursor = Some(target);
        Ok(target)
    }

    /// Move to the next track (per the repeat mode) and play it.
    pub fn next<L: Launcher + ?Sized>(
        &mut self,
        launcher: &mut L,
    ) -> Result<NowPlaying, PlaybackError> {
        self.step(Direction::Forward)?;
        self.play_current(launcher)
    }

    /// Move to the previous track (per the repeat mode) and play it.
    pub fn previous<L: Launcher + ?Sized>(
        &mut self,
        launcher: &mut L,
    ) -> Result<NowPlaying, PlaybackError> {
        self.step(Direction::Backward)?;
        self.play_current(launcher)
    }

    /// Randomly reorder every track and put the cursor on the new first one.
    ///
    /// Returns `false` (and changes nothing) when there are fewer than two
    /// tracks.
    pub fn shuffle(&mut self) -> bool {
        if self.tracks.len() < 2 {
            return false;
        }
        self.tracks.shuffle(&mut self.rng);
        self.cursor = Some(0);
        true
    }
}

impl fmt::Debug for Playlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Playlist")
            .field("folder", &self.folder)
            .field("tracks", &self.tracks)
            .field("cursor", &self.cursor)
            .field("repeat", &self.repeat)
            .finish_non_exhaustive()
    }
}

/// Numbered listing with a marker on the current track.
impl fmt::Display for Playlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Playlist ({} songs)", self.tracks.len())?;
        if self.tracks.is_empty() {
            return writeln!(f, "  [Empty playlist]");
        }
        for (i, track) in self.tracks.iter().enumerate() {
            let marker = if self.cursor == Some(i) {
                "  <-- current"
            } else {
                ""
            };
            writeln!(f, " {:>2}. {}{}", i + 1, track.filename(), marker)?;
        }
        Ok(())
    }
}
