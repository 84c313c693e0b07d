use std::borrow::Cow;
use std::ffi::{OsStr, OsString};

/// Longest filename a track keeps, in bytes.
pub const MAX_FILENAME_LEN: usize = 511;

/// One audio file in the playlist folder.
///
/// The name is kept exactly as the filesystem reported it, relative to the
/// folder; it is never parsed for tags or metadata.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Track {
    name: OsString,
}

impl Track {
    /// Build a track, truncating overlong UTF-8 names on a char boundary.
    ///
    /// Names that are not valid UTF-8 are kept whole so they still resolve
    /// on disk.
    pub fn new(name: impl Into<OsString>) -> Self {
        let name = name.into();
        if name.len() <= MAX_FILENAME_LEN {
            return Self { name };
        }

        match name.into_string() {
            Ok(mut name) => {
                let mut cut = MAX_FILENAME_LEN;
                while !name.is_char_boundary(cut) {
                    cut -= 1;
                }
                log::warn!("truncating track name longer than {MAX_FILENAME_LEN} bytes: {name}");
                name.truncate(cut);
                Self { name: name.into() }
            }
            Err(name) => {
                log::warn!(
                    "keeping non UTF-8 track name longer than {MAX_FILENAME_LEN} bytes: {}",
                    name.to_string_lossy()
                );
                Self { name }
            }
        }
    }

    /// The raw file name, for building paths.
    pub fn name(&self) -> &OsStr {
        &self.name
    }

    /// The file name for display; invalid UTF-8 is replaced.
    pub fn filename(&self) -> Cow<'_, str> {
        self.name.to_string_lossy()
    }
}
