use crate::constants::SUPPORTED_IMAGE_SUFFIXES;
use crate::error::{Result, SqueezeError};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// An image selected for compression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    /// Absolute path.
    pub path: PathBuf,
    /// Size on disk when discovered, in bytes. Never zero.
    pub size: u64,
}

/// Exact, case-sensitive suffix match: `photo.png` qualifies, `photo.PNG` does not.
pub fn is_image_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| {
            SUPPORTED_IMAGE_SUFFIXES
                .iter()
                .any(|suffix| name.ends_with(suffix))
        })
        .unwrap_or(false)
}

/// Lists the immediate image files of `dir`, skipping empty ones.
///
/// Results come back in directory-listing order. A directory that is
/// missing or unreadable is a fatal error.
pub fn collect_image_files(dir: &Path) -> Result<Vec<ImageFile>> {
    let unreadable = |source: std::io::Error| SqueezeError::DirectoryUnreadable {
        path: dir.to_path_buf(),
        source,
    };

    let root = dir.canonicalize().map_err(unreadable)?;
    if !root.is_dir() {
        return Err(unreadable(std::io::Error::new(
            std::io::ErrorKind::Other,
            "not a directory",
        )));
    }

    let mut image_files = Vec::new();

    for entry in WalkDir::new(&root).max_depth(1) {
        let entry = entry?;
        if entry.depth() == 0 || !is_image_file(entry.path()) {
            continue;
        }

        // Follows symlinks, so a link to an image counts as that image.
        let metadata = fs::metadata(entry.path())?;
        if !metadata.is_file() || metadata.len() == 0 {
            continue;
        }

        image_files.push(ImageFile {
            path: entry.path().to_path_buf(),
            size: metadata.len(),
        });
    }

    Ok(image_files)
}
