use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/tracklist/config.toml` or `~/.config/tracklist/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `TRACKLIST__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub library: LibrarySettings,
    pub playback: PlaybackSettings,
    pub player: PlayerSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// File extensions to treat as audio (without dot).
    pub extensions: Vec<String>,
    /// When false, a file matches if its name contains `.<ext>` anywhere
    /// (case-sensitive). When true, the name must end with `.<ext>`
    /// (case-insensitive).
    pub strict_extensions: bool,
    /// Whether to include hidden files (dotfiles).
    pub include_hidden: bool,
    /// Whether to follow symlinks when checking that an entry is a file.
    pub follow_links: bool,
    /// Sort by file name instead of keeping the filesystem order.
    pub sort_by_name: bool,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            extensions: vec!["mp3".into(), "wav".into()],
            strict_extensions: false,
            include_hidden: true,
            follow_links: true,
            sort_by_name: false,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Repeat mode the playlist starts in.
    pub repeat: RepeatModeSetting,
    /// Shuffle once right after the folder is loaded.
    pub shuffle_on_load: bool,
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RepeatModeSetting {
    #[default]
    #[serde(alias = "off", alias = "no-repeat", alias = "no_repeat")]
    None,
    #[serde(
        alias = "repeat-one",
        alias = "repeat_one",
        alias = "loop-one",
        alias = "single"
    )]
    One,
    #[serde(
        alias = "repeat-all",
        alias = "repeat_all",
        alias = "loop-all",
        alias = "loop-around"
    )]
    All,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    /// Program to open tracks with. When unset, the OS default handler is used.
    pub command: Option<String>,
    /// Extra arguments passed to `command` before the track path.
    pub args: Vec<String>,
}
