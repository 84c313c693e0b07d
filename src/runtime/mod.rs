use std::error::Error as _;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::config::{LibrarySettings, RepeatModeSetting};
use crate::player::SystemLauncher;
use crate::playlist::Playlist;

mod event_loop;
mod menu;
mod settings;
mod startup;

#[cfg(test)]
mod tests;

/// Startup choices taken from the command line.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Folder to load; prompted for on stdin when absent.
    pub folder: Option<PathBuf>,
    /// Overrides `playback.repeat` from the config.
    pub repeat: Option<RepeatModeSetting>,
    /// Shuffle once after loading, regardless of config.
    pub shuffle: bool,
}

pub fn run(options: Options) -> Result<()> {
    let settings = settings::load_settings();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut output = stdout.lock();

    let folder = match options.folder.clone() {
        Some(folder) => folder,
        None => prompt_folder(&mut input, &mut output).context("failed to read folder path")?,
    };

    let mut playlist = Playlist::new(folder);
    if !load(&mut playlist, &settings.library, &mut output)? {
        return Ok(());
    }

    startup::apply_playback_defaults(&mut playlist, &settings.playback, &options);

    let mut launcher = SystemLauncher::from_settings(&settings.player);
    log::debug!("launching tracks via {:?}", launcher.target());
    event_loop::run(&mut playlist, &mut launcher, &mut input, &mut output)
        .context("menu input/output failed")
}

fn prompt_folder<R, W>(input: &mut R, output: &mut W) -> io::Result<PathBuf>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    write!(output, "Enter music folder path : ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(PathBuf::from(line.trim_end_matches(['\r', '\n'])))
}

/// Fill `playlist` from its folder and tell the user how it went.
///
/// Returns `false` when nothing was loaded and the session should end.
fn load<W: Write + ?Sized>(
    playlist: &mut Playlist,
    library: &LibrarySettings,
    output: &mut W,
) -> Result<bool> {
    match playlist.load_from_folder(library) {
        Ok(count) => {
            writeln!(output, "\nScanning folder: {}", playlist.folder().display())?;
            writeln!(output, "Loaded {count} songs.\n")?;
        }
        Err(err) => {
            match err.source() {
                Some(cause) => log::warn!("{err}: {cause}"),
                None => log::warn!("{err}"),
            }
            writeln!(output, "{err}")?;
        }
    }

    if playlist.is_empty() {
        writeln!(output, "No songs found. Exiting.")?;
        return Ok(false);
    }
    Ok(true)
}
