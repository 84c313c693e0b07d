use std::error::Error as _;
use std::io::{self, BufRead, Write};
use std::ops::ControlFlow;

use crate::player::Launcher;
use crate::playlist::{NowPlaying, PlaybackError, Playlist};

use super::menu::{MenuChoice, write_menu};

/// Menu loop: print the menu, read a choice, act on the playlist.
/// Returns `Ok(())` on the exit choice or when input runs out.
pub fn run<L, R, W>(
    playlist: &mut Playlist,
    launcher: &mut L,
    input: &mut R,
    output: &mut W,
) -> io::Result<()>
where
    L: Launcher + ?Sized,
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    let mut line = String::new();
    loop {
        write_menu(output)?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            log::debug!("input closed, leaving menu");
            return Ok(());
        }

        let Some(choice) = MenuChoice::parse(&line) else {
            writeln!(output, "Invalid choice.")?;
            continue;
        };

        if dispatch(choice, playlist, launcher, output)?.is_break() {
            return Ok(());
        }
    }
}

fn dispatch<L, W>(
    choice: MenuChoice,
    playlist: &mut Playlist,
    launcher: &mut L,
    output: &mut W,
) -> io::Result<ControlFlow<()>>
where
    L: Launcher + ?Sized,
    W: Write + ?Sized,
{
    log::debug!("menu choice {choice:?}");
    match choice {
        MenuChoice::View => {
            writeln!(output)?;
            write!(output, "{playlist}")?;
            writeln!(output)?;
        }
        MenuChoice::PlayCurrent => report(output, playlist.play_current(launcher))?,
        MenuChoice::Next => report(output, playlist.next(launcher))?,
        MenuChoice::Previous => report(output, playlist.previous(launcher))?,
        MenuChoice::Shuffle => {
            if playlist.shuffle() {
                writeln!(output, "Playlist shuffled!")?;
            } else {
                writeln!(output, "Not enough songs to shuffle.")?;
            }
        }
        MenuChoice::CycleRepeat => {
            let mode = playlist.cycle_repeat_mode();
            writeln!(output, "Repeat mode: {mode}")?;
        }
        MenuChoice::Exit => {
            writeln!(output, "Chill mode end! -_-")?;
            return Ok(ControlFlow::Break(()));
        }
    }
    Ok(ControlFlow::Continue(()))
}

fn report<W: Write + ?Sized>(
    output: &mut W,
    result: Result<NowPlaying, PlaybackError>,
) -> io::Result<()> {
    match result {
        Ok(now) => {
            log::info!("launched #{} {}", now.position + 1, now.path.display());
            writeln!(output, " {now}")
        }
        Err(PlaybackError::Launch(err)) => {
            match err.source() {
                Some(cause) => log::error!("{err}: {cause}"),
                None => log::error!("{err}"),
            }
            writeln!(output, "{err}")
        }
        Err(other) => writeln!(output, "{other}"),
    }
}
