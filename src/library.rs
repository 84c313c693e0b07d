//! Folder library: the `Track` model and the scanner that fills a playlist.

mod model;
mod scan;

pub use model::Track;
pub use scan::{ScanError, scan};
