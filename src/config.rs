//! Startup configuration
//!
//! The gallery has no runtime configuration sources: everything here is
//! a compile-time default, gathered in one struct so the directory and
//! window parameters are handed to the app explicitly.

use iced::Size;
use std::path::PathBuf;

/// Folder scanned once at startup, relative to the working directory
pub const DEFAULT_IMAGE_DIR: &str = "assets/images";

/// Window title
pub const WINDOW_TITLE: &str = "Image Gallery";

/// Initial window size before switching to fullscreen
const WINDOW_WIDTH: f32 = 800.0;
const WINDOW_HEIGHT: f32 = 450.0;

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryConfig {
    /// Directory holding the `.jpg`/`.png` files to show
    pub image_dir: PathBuf,
    pub title: &'static str,
    pub window_size: Size,
    /// Switch the window to fullscreen right after it opens
    pub fullscreen: bool,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            image_dir: PathBuf::from(DEFAULT_IMAGE_DIR),
            title: WINDOW_TITLE,
            window_size: Size::new(WINDOW_WIDTH, WINDOW_HEIGHT),
            fullscreen: true,
        }
    }
}
