//! Input folder listing.
//!
//! Finds the image files a user can select for a batch run. A file counts as
//! an image when its name ends in `.` plus one of [`IMAGE_EXTENSIONS`],
//! compared case-insensitively. Content is not inspected here; a file with
//! an image extension but broken bytes is listed and later fails to decode
//! as a per-item error.
//!
//! ```text
//! input/
//! ├── .thumbs/           # hidden folder, never descended into
//! ├── .cover.jpg         # listed
//! ├── IMG_0001.JPG       # listed
//! ├── IMG_0002.png       # listed
//! ├── notes.txt          # not an image
//! └── 2023/              # only with `recursive`
//!     └── beach.gif
//! ```
//!
//! Results are sorted by path so selection order is stable between runs.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("Failed to list directory: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Recognized image file extensions (lowercase).
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "gif"];

/// Options controlling how an input folder is listed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Descend into subdirectories instead of listing the folder only.
    pub recursive: bool,
}

/// Whether the file name of `path` ends in `.{ext}` for a recognized image
/// extension, ignoring case. Dotfiles such as `.holiday.jpg` or `.jpg` match.
pub fn has_image_extension(path: &Path) -> bool {
    let Some(name) = path.file_name() else {
        return false;
    };
    let name = name.to_string_lossy().to_lowercase();
    IMAGE_EXTENSIONS
        .iter()
        .any(|ext| name.strip_suffix(ext).is_some_and(|stem| stem.ends_with('.')))
}

/// Whether `path` is a regular file with a recognized image extension.
pub fn is_image(path: &Path) -> bool {
    path.is_file() && has_image_extension(path)
}

/// Hidden subdirectories are not descended into. Hidden files are listed.
fn is_hidden_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry.file_name().to_string_lossy().starts_with('.')
}

/// List the image files in `dir`, sorted by path.
pub fn list_images(dir: &Path, options: ScanOptions) -> Result<Vec<PathBuf>, ScanError> {
    if !dir.is_dir() {
        return Err(ScanError::NotADirectory(dir.to_path_buf()));
    }

    let max_depth = if options.recursive { usize::MAX } else { 1 };
    let mut images = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(max_depth)
        .into_iter()
        .filter_entry(|e| !is_hidden_dir(e))
    {
        let entry = entry?;
        if entry.file_type().is_file() && has_image_extension(entry.path()) {
            images.push(entry.into_path());
        }
    }

    images.sort();
    debug!(dir = %dir.display(), count = images.len(), "listed input images");
    Ok(images)
}

/// Where the sources of a batch run come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Explicit files, processed in the given order.
    Files(Vec<PathBuf>),
    /// Every image in a folder, as listed by [`list_images`].
    Folder { dir: PathBuf, options: ScanOptions },
}

impl Selection {
    /// The ordered source paths. Only [`Selection::Folder`] touches the disk.
    pub fn resolve(&self) -> Result<Vec<PathBuf>, ScanError> {
        match self {
            Selection::Files(files) => Ok(files.clone()),
            Selection::Folder { dir, options } => list_images(dir, *options),
        }
    }
}
