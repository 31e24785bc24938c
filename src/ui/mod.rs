/// User interface module
///
/// - `grid.rs` - scrollable, wrapping grid of clickable thumbnails
/// - `detail.rs` - one image full-size with a back button
/// - `style.rs` - the static stylesheet shared by both screens
///
/// Views never change state themselves; they emit `Message`s that the
/// application's `update` handles.

pub mod detail;
pub mod grid;
pub mod style;
