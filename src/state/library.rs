use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use walkdir::WalkDir;

use super::data::ImageRef;
use crate::error::GalleryError;

/// File name suffixes the gallery shows. Matched case-sensitively.
pub const SUPPORTED_EXTENSIONS: [&str; 2] = [".jpg", ".png"];

/// The Library is the read-only set of images found at startup.
/// It is filled once and never rescanned.
#[derive(Debug, Clone, Default)]
pub struct Library {
    directory: PathBuf,
    images: Vec<ImageRef>,
}

impl Library {
    /// Scan `directory` and build the library.
    ///
    /// A missing or unreadable folder is not fatal: a warning is logged
    /// and the library is empty.
    pub fn load(directory: impl Into<PathBuf>) -> Self {
        let directory = directory.into();

        let images = match scan_directory(&directory) {
            Ok(images) => images,
            Err(err) => {
                warn!("{err}");
                Vec::new()
            }
        };

        info!(
            directory = %directory.display(),
            count = images.len(),
            "image library loaded"
        );

        Library { directory, images }
    }

    /// The folder this library was scanned from
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// All images, in directory-listing order
    pub fn images(&self) -> &[ImageRef] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

/// Whether a file name carries one of the supported extensions
pub fn is_supported_image(file_name: &str) -> bool {
    SUPPORTED_EXTENSIONS
        .iter()
        .any(|extension| file_name.ends_with(extension))
}

/// List the image files directly inside `directory` (no recursion).
///
/// Order is whatever the filesystem listing yields.
pub fn scan_directory(directory: &Path) -> Result<Vec<ImageRef>, GalleryError> {
    let metadata = match fs::metadata(directory) {
        Ok(metadata) => metadata,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(GalleryError::DirectoryNotFound(directory.to_path_buf()));
        }
        Err(source) => {
            return Err(GalleryError::Io {
                path: directory.to_path_buf(),
                source,
            });
        }
    };

    if !metadata.is_dir() {
        return Err(GalleryError::NotADirectory(directory.to_path_buf()));
    }

    let mut images = Vec::new();

    for entry in WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("skipping unreadable entry: {err}");
                continue;
            }
        };

        // Only files; a folder called "x.jpg" is not an image
        if !entry.file_type().is_file() {
            continue;
        }

        if is_supported_image(&entry.file_name().to_string_lossy()) {
            images.push(ImageRef::new(entry.into_path()));
        }
    }

    Ok(images)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        File::create(dir.join(name)).unwrap();
    }

    fn names(images: &[ImageRef]) -> Vec<String> {
        let mut names: Vec<String> = images.iter().map(ImageRef::file_name).collect();
        names.sort();
        names
    }

    #[test]
    fn test_supported_extensions() {
        assert!(is_supported_image("a.jpg"));
        assert!(is_supported_image("b.png"));
        assert!(!is_supported_image("c.txt"));
        assert!(!is_supported_image("d.jpeg"));
        assert!(!is_supported_image("e.gif"));
        assert!(!is_supported_image("jpg"));
    }

    #[test]
    fn test_extension_match_is_case_sensitive() {
        assert!(!is_supported_image("A.JPG"));
        assert!(!is_supported_image("B.Png"));
    }

    #[test]
    fn test_counts_only_allow_listed_files() {
        let tmp = TempDir::new().unwrap();
        for name in ["1.jpg", "2.jpg", "3.png"] {
            touch(tmp.path(), name);
        }
        for name in ["notes.txt", "raw.nef", "photo.JPG", "clip.gif"] {
            touch(tmp.path(), name);
        }

        let images = scan_directory(tmp.path()).unwrap();
        assert_eq!(images.len(), 3);
    }

    #[test]
    fn test_concrete_scenario() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "a.jpg");
        touch(tmp.path(), "b.png");
        touch(tmp.path(), "c.txt");

        let images = scan_directory(tmp.path()).unwrap();
        assert_eq!(names(&images), vec!["a.jpg", "b.png"]);
        assert!(images.iter().all(|image| image.path().starts_with(tmp.path())));
    }

    #[test]
    fn test_does_not_recurse() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "top.png");
        let nested = tmp.path().join("nested");
        fs::create_dir(&nested).unwrap();
        touch(&nested, "deep.png");
        fs::create_dir(tmp.path().join("folder.jpg")).unwrap();

        let images = scan_directory(tmp.path()).unwrap();
        assert_eq!(names(&images), vec!["top.png"]);
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("does-not-exist");

        let err = scan_directory(&missing).unwrap_err();
        assert!(matches!(err, GalleryError::DirectoryNotFound(_)));
    }

    #[test]
    fn test_file_is_not_a_directory() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "a.jpg");

        let err = scan_directory(&tmp.path().join("a.jpg")).unwrap_err();
        assert!(matches!(err, GalleryError::NotADirectory(_)));
    }

    #[test]
    fn test_load_missing_directory_gives_empty_library() {
        let tmp = TempDir::new().unwrap();
        let library = Library::load(tmp.path().join("nope"));

        assert!(library.is_empty());
        assert_eq!(library.len(), 0);
        assert_eq!(library.directory(), tmp.path().join("nope"));
    }

    #[test]
    fn test_load_file_path_gives_empty_library() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "a.jpg");
        let file = tmp.path().join("a.jpg");

        let library = Library::load(&file);
        assert!(library.is_empty());
        assert_eq!(library.directory(), file);
    }

    #[test]
    fn test_load_keeps_scan_order() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "a.jpg");
        touch(tmp.path(), "b.png");

        let scanned = scan_directory(tmp.path()).unwrap();
        let library = Library::load(tmp.path());
        assert_eq!(library.images(), scanned.as_slice());
    }
}
