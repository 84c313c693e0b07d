use std::io;
use std::path::{Path, PathBuf};

use super::{LaunchError, Launcher};

/// Test double that remembers every path it was asked to play.
#[derive(Debug, Default)]
pub(crate) struct RecordingLauncher {
    pub launched: Vec<PathBuf>,
    pub fail: bool,
}

impl RecordingLauncher {
    pub fn failing() -> Self {
        Self {
            launched: Vec::new(),
            fail: true,
        }
    }

    /// File names (last path component) of everything launched so far.
    pub fn names(&self) -> Vec<String> {
        self.launched
            .iter()
            .filter_map(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .collect()
    }
}

impl Launcher for RecordingLauncher {
    fn launch(&mut self, path: &Path) -> Result<(), LaunchError> {
        self.launched.push(path.to_path_buf());
        if self.fail {
            return Err(LaunchError::DefaultHandler {
                path: path.to_path_buf(),
                source: io::Error::other("no handler"),
            });
        }
        Ok(())
    }
}
