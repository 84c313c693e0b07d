use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

use crate::config::LibrarySettings;

use super::model::Track;

/// Failure to enumerate the playlist folder.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Cannot open folder: {}", path.display())]
    UnreadableSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

fn extensions(settings: &LibrarySettings) -> Vec<&str> {
    settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.'))
        .filter(|e| !e.is_empty())
        .collect()
}

/// Decide whether `name` looks like an audio file.
///
/// Loose mode matches `.<ext>` anywhere in the name, so `old.mp3.txt` counts.
/// Strict mode compares the real extension, ignoring ASCII case.
fn is_audio_name(name: &str, exts: &[&str], strict: bool) -> bool {
    if strict {
        Path::new(name)
            .extension()
            .and_then(|s| s.to_str())
            .map(|ext| exts.iter().any(|e| e.eq_ignore_ascii_case(ext)))
            .unwrap_or(false)
    } else {
        exts.iter().any(|e| name.contains(&format!(".{e}")))
    }
}

fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// List the audio files directly inside `dir`, in enumeration order.
///
/// Subdirectories are not descended into. Entries that fail to read are
/// skipped; only a folder that cannot be opened at all is an error.
pub fn scan(dir: &Path, settings: &LibrarySettings) -> Result<Vec<Track>, ScanError> {
    let unreadable = |source: io::Error| ScanError::UnreadableSource {
        path: dir.to_path_buf(),
        source,
    };

    // Surface permission and not-a-directory failures up front.
    fs::read_dir(dir).map_err(unreadable)?;

    let exts = extensions(settings);
    let mut walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(settings.follow_links);
    if settings.sort_by_name {
        walker = walker.sort_by_file_name();
    }

    let mut tracks: Vec<Track> = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => return Err(unreadable(err.into())),
            Err(err) => {
                log::warn!("skipping unreadable entry in {}: {err}", dir.display());
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        // Matching works on the lossy form; the track keeps the raw name.
        let name = entry.file_name().to_string_lossy();
        if !settings.include_hidden && is_hidden(&name) {
            continue;
        }
        if is_audio_name(&name, &exts, settings.strict_extensions) {
            log::debug!("found track {name}");
            tracks.push(Track::new(entry.file_name()));
        }
    }

    log::info!("scanned {}: {} tracks", dir.display(), tracks.len());
    Ok(tracks)
}
