/// Image source module
///
/// This module handles:
/// - Checking that a scanned image can still be shown
/// - Producing iced image handles for the grid and the full view

pub mod thumbnail;
