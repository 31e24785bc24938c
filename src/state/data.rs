//! Shared data structures for the application state
//!
//! These types flow between the scanner, the controller and the views.

use std::fmt;
use std::path::{Path, PathBuf};

/// One image discovered by the startup scan
///
/// Immutable once constructed; the scanner is the only producer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageRef {
    path: PathBuf,
}

impl ImageRef {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Full path to the image file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name only (e.g. "a.jpg")
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

/// The screen currently shown
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GalleryState {
    /// Thumbnail grid of the whole library
    #[default]
    Grid,
    /// One image shown full-size
    Detail(ImageRef),
}

impl GalleryState {
    /// A thumbnail was clicked. Replaces any current selection.
    pub fn select(&mut self, image: ImageRef) {
        *self = GalleryState::Detail(image);
    }

    /// "Back to Thumbnails" was pressed.
    /// Returns false when already on the grid (nothing changed).
    pub fn back(&mut self) -> bool {
        match self {
            GalleryState::Grid => false,
            GalleryState::Detail(_) => {
                *self = GalleryState::Grid;
                true
            }
        }
    }

    /// The image shown in detail, if any
    pub fn selected(&self) -> Option<&ImageRef> {
        match self {
            GalleryState::Grid => None,
            GalleryState::Detail(image) => Some(image),
        }
    }
}
