use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};

mod config;
mod library;
mod player;
mod playlist;
mod runtime;

use crate::config::RepeatModeSetting;

#[derive(Parser, Debug)]
#[command(name = "tracklist", version)]
#[command(about = "Play the audio files of a folder through your default player", long_about = None)]
struct Args {
    /// Music folder to load (asked for interactively when omitted)
    folder: Option<PathBuf>,

    /// Starting repeat mode (overrides the config file)
    #[arg(short, long, value_enum)]
    repeat: Option<RepeatArg>,

    /// Shuffle the playlist once after loading
    #[arg(short, long)]
    shuffle: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum RepeatArg {
    None,
    One,
    All,
}

impl From<RepeatArg> for RepeatModeSetting {
    fn from(arg: RepeatArg) -> Self {
        match arg {
            RepeatArg::None => Self::None,
            RepeatArg::One => Self::One,
            RepeatArg::All => Self::All,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    runtime::run(runtime::Options {
        folder: args.folder,
        repeat: args.repeat.map(Into::into),
        shuffle: args.shuffle,
    })
}
