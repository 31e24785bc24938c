/// State management module
///
/// This module handles all application state:
/// - The startup scan and the read-only image library (library.rs)
/// - Shared data structures: ImageRef and the current screen (data.rs)

pub mod library;
pub mod data;
