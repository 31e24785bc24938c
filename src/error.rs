//! Error types for the gallery
//!
//! Every failure the gallery recognises is non-fatal: callers log it
//! and degrade (empty library, skipped thumbnail, default stylesheet).

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GalleryError {
    /// The image directory does not exist
    #[error("image folder not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// The image directory path exists but is a file
    #[error("image folder is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// Any other I/O failure while reading the image directory
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An image that was scanned but cannot be shown
    #[error("image not found or unreadable: {} ({reason})", path.display())]
    Unresolvable { path: PathBuf, reason: String },

    /// The embedded stylesheet is not valid JSON for our schema
    #[error("invalid stylesheet: {0}")]
    Stylesheet(#[from] serde_json::Error),

    /// A colour in the stylesheet is not `#rrggbb` or `#rrggbbaa`
    #[error("invalid colour {0:?}, expected #rrggbb or #rrggbbaa")]
    InvalidColor(String),
}
