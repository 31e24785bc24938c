use iced::widget::image::Handle;
use image::ImageReader;
use tracing::debug;

use crate::error::GalleryError;
use crate::state::data::ImageRef;

/// Resolve an image for display in the grid
///
/// Opens the file and reads its header so that missing, unreadable or
/// non-image files are caught before they reach the widget tree.
/// Pixel decoding and scaling are left to the iced image widget.
pub fn resolve(image: &ImageRef) -> Result<Handle, GalleryError> {
    let unresolvable = |reason: String| GalleryError::Unresolvable {
        path: image.path().to_path_buf(),
        reason,
    };

    let reader = ImageReader::open(image.path())
        .map_err(|e| unresolvable(e.to_string()))?
        .with_guessed_format()
        .map_err(|e| unresolvable(e.to_string()))?;

    let (width, height) = reader
        .into_dimensions()
        .map_err(|e| unresolvable(e.to_string()))?;

    debug!(image = %image, width, height, "resolved image");

    Ok(handle_for(image))
}

/// Image handle for a path, without checking it
pub fn handle_for(image: &ImageRef) -> Handle {
    Handle::from_path(image.path())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolves_real_png_and_jpeg() {
        let tmp = TempDir::new().unwrap();
        let png = tmp.path().join("a.png");
        let jpg = tmp.path().join("b.jpg");
        image::RgbImage::new(4, 3).save(&png).unwrap();
        image::RgbImage::new(4, 3).save(&jpg).unwrap();

        assert!(resolve(&ImageRef::new(png)).is_ok());
        assert!(resolve(&ImageRef::new(jpg)).is_ok());
    }

    #[test]
    fn test_missing_file_is_unresolvable() {
        let tmp = TempDir::new().unwrap();
        let err = resolve(&ImageRef::new(tmp.path().join("gone.png"))).unwrap_err();
        assert!(matches!(err, GalleryError::Unresolvable { .. }));
    }

    #[test]
    fn test_garbage_contents_are_unresolvable() {
        let tmp = TempDir::new().unwrap();
        let fake = tmp.path().join("fake.png");
        fs::write(&fake, b"this is not a png").unwrap();

        let err = resolve(&ImageRef::new(fake)).unwrap_err();
        assert!(matches!(err, GalleryError::Unresolvable { .. }));
    }
}
