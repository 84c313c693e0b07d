use std::io;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};

use thiserror::Error;

use crate::config::PlayerSettings;

/// Something that can start playback of a file outside this process.
pub trait Launcher {
    /// Ask the environment to play `path`. Returns once the request is made;
    /// the player's own lifetime is not tracked.
    fn launch(&mut self, path: &Path) -> Result<(), LaunchError>;
}

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("Could not open {} with the default player", path.display())]
    DefaultHandler {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Could not run `{program}` for {}", path.display())]
    Command {
        program: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Which program a `SystemLauncher` hands tracks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchTarget {
    /// The registered default handler (`xdg-open`, `open` or `start`, picked
    /// by the `open` crate).
    DefaultHandler,
    /// A user-configured program, run with `args` followed by the track path.
    Command { program: String, args: Vec<String> },
}

/// Launches tracks through the host.
///
/// Players started through a configured command are not waited on; finished
/// ones are reaped on the next launch.
#[derive(Debug)]
pub struct SystemLauncher {
    target: LaunchTarget,
    running: Vec<Child>,
}

impl SystemLauncher {
    pub fn new(target: LaunchTarget) -> Self {
        Self {
            target,
            running: Vec::new(),
        }
    }

    pub fn from_settings(settings: &PlayerSettings) -> Self {
        let target = match settings.command.as_deref().map(str::trim) {
            Some(program) if !program.is_empty() => LaunchTarget::Command {
                program: program.to_string(),
                args: settings.args.clone(),
            },
            _ => LaunchTarget::DefaultHandler,
        };
        Self::new(target)
    }

    pub fn target(&self) -> &LaunchTarget {
        &self.target
    }

    /// Drop children that have exited, collecting their status.
    pub(super) fn reap_finished(&mut self) {
        self.running.retain_mut(|child| match child.try_wait() {
            Ok(None) => true,
            Ok(Some(status)) => {
                log::debug!("player {} exited with {status}", child.id());
                false
            }
            Err(err) => {
                log::warn!("could not poll player {}: {err}", child.id());
                false
            }
        });
    }

    #[cfg(test)]
    pub(super) fn running(&self) -> usize {
        self.running.len()
    }
}

impl Launcher for SystemLauncher {
    fn launch(&mut self, path: &Path) -> Result<(), LaunchError> {
        self.reap_finished();

        match &self.target {
            LaunchTarget::DefaultHandler => {
                log::debug!("opening {} with the default handler", path.display());
                open::that_detached(path).map_err(|source| LaunchError::DefaultHandler {
                    path: path.to_path_buf(),
                    source,
                })
            }
            LaunchTarget::Command { program, args } => {
                log::debug!("running {program} {args:?} {}", path.display());
                let child = Command::new(program)
                    .args(args)
                    .arg(path)
                    .stdin(Stdio::null())
                    .stdout(Stdio::null())
                    .stderr(Stdio::null())
                    .spawn()
                    .map_err(|source| LaunchError::Command {
                        program: program.clone(),
                        path: path.to_path_buf(),
                        source,
                    })?;
                self.running.push(child);
                Ok(())
            }
        }
    }
}
