//! Asset collection.
//!
//! The documentation exporter saves each page as `<page>.html` next to a
//! `<page>_files/` folder holding the images that page references. The bundle
//! needs them in one flat directory so the rewritten `src` attributes (see
//! [`crate::extract`]) resolve from a single place:
//!
//! ```text
//! t-bank/                              t-bank-copywriting-assets/
//! ├── Полезно.html                     ├── hero.png
//! ├── Полезно_files/              →    ├── ok.svg
//! │   ├── hero.png                     └── tip.webp
//! │   ├── ok.svg
//! │   └── runtime.js   (not copied)
//! └── Тире_files/
//!     ├── ok.svg       (skipped: name taken)
//!     └── tip.webp
//! ```
//!
//! Only the top level of each `_files` folder is considered. Filenames are
//! kept as-is, so two pages shipping different images under the same name
//! collide; [`CollisionPolicy::FirstWriterWins`] keeps whichever was copied
//! first, visiting folders and files in filename order.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Cannot read directory: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Marker in a directory name identifying a per-page asset folder.
pub const ASSET_FOLDER_MARKER: &str = "_files";

const ASSET_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "svg", "webp"];

/// What to do when an asset name already exists in the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionPolicy {
    /// Keep the existing file; later same-named assets are skipped.
    #[default]
    FirstWriterWins,
}

/// Outcome of a copy run.
#[derive(Debug, Default)]
pub struct AssetReport {
    /// Filenames copied into the destination during this run.
    pub copied: Vec<String>,
    /// Filenames skipped because the destination already had them.
    pub skipped: Vec<String>,
}

/// Copy every image asset from the source's `_files` folders into `dest`.
///
/// `dest` is created up front, even when there is nothing to copy.
pub fn copy_assets(
    source: &Path,
    dest: &Path,
    policy: CollisionPolicy,
) -> Result<AssetReport, AssetError> {
    fs::create_dir_all(dest)?;
    let mut report = AssetReport::default();

    for folder in asset_folders(source)? {
        for entry in WalkDir::new(&folder)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry?;
            if !entry.file_type().is_file() || !is_asset(entry.path()) {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            let target = dest.join(entry.file_name());

            match policy {
                CollisionPolicy::FirstWriterWins if target.exists() => {
                    tracing::debug!(asset = %name, folder = %folder.display(), "asset already present, skipping");
                    report.skipped.push(name);
                }
                CollisionPolicy::FirstWriterWins => {
                    fs::copy(entry.path(), &target)?;
                    tracing::debug!(asset = %name, "copied asset");
                    report.copied.push(name);
                }
            }
        }
    }

    Ok(report)
}

/// Top-level directories of `source` whose name carries the asset marker.
fn asset_folders(source: &Path) -> Result<Vec<PathBuf>, AssetError> {
    let mut folders = Vec::new();
    for entry in WalkDir::new(source)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        if entry.file_type().is_dir()
            && entry
                .file_name()
                .to_string_lossy()
                .contains(ASSET_FOLDER_MARKER)
        {
            folders.push(entry.into_path());
        }
    }
    Ok(folders)
}

fn is_asset(path: &Path) -> bool {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    ASSET_EXTENSIONS.contains(&ext.as_str())
}
