use crate::config::PlaybackSettings;
use crate::playlist::Playlist;

use super::Options;

/// Apply the starting repeat mode and optional shuffle. Command-line options
/// win over the config file.
pub fn apply_playback_defaults(
    playlist: &mut Playlist,
    playback: &PlaybackSettings,
    options: &Options,
) {
    let repeat = options.repeat.unwrap_or(playback.repeat);
    playlist.set_repeat_mode(repeat.into());

    if (options.shuffle || playback.shuffle_on_load) && playlist.shuffle() {
        log::info!("shuffled {} tracks on load", playlist.len());
    }
    log::debug!("starting with repeat mode {}", playlist.repeat_mode());
}
