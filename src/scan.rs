//! Source directory scanning.
//!
//! Stage 1 of the bundle pipeline. Lists the exported `.html` pages at the
//! top level of the source directory, routes each through the
//! [`ClassificationTable`], and extracts the ones that land in a section.
//!
//! ## Directory Structure
//!
//! ```text
//! t-bank/                          # Source root
//! ├── Полезно.html                 # Page → "Общие принципы", order 1
//! ├── Полезно_files/               # Its assets (see crate::assets)
//! ├── Тире.html                    # Page → "Типографика", order 2
//! ├── Контакты.html                # No keyword → skipped with a warning
//! └── Тире_files/
//! ```
//!
//! ## Soft Failures
//!
//! A page with no matching keyword, or with no content region, is logged
//! and recorded in [`Manifest::skipped`]; the scan carries on. Only I/O
//! failures abort it.

use crate::classify::ClassificationTable;
use crate::extract;
use crate::types::{Article, SkipReason, Skipped};
use std::path::Path;
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Cannot read source directory: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Result of the scan stage.
#[derive(Debug, Default)]
pub struct Manifest {
    /// Extracted articles in source filename order (not yet grouped).
    pub articles: Vec<Article>,
    /// Pages left out, with the reason.
    pub skipped: Vec<Skipped>,
}

/// Scan `source` for pages, classify them, and extract their content.
///
/// `assets_dir_name` is the flat asset directory that rewritten image
/// sources point at.
pub fn scan(
    source: &Path,
    table: &ClassificationTable,
    assets_dir_name: &str,
) -> Result<Manifest, ScanError> {
    let mut manifest = Manifest::default();

    for entry in WalkDir::new(source)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        let filename = entry.file_name().to_string_lossy().into_owned();
        if !entry.file_type().is_file() || !filename.ends_with(".html") {
            continue;
        }

        let Some(placement) = table.classify(&filename) else {
            tracing::warn!(file = %filename, "no section matches this page, skipping");
            manifest.skipped.push(Skipped {
                source_file: filename,
                reason: SkipReason::Unclassified,
            });
            continue;
        };

        let Some(extracted) = extract::extract_file(entry.path(), assets_dir_name)? else {
            tracing::warn!(file = %filename, "content region not found, skipping");
            manifest.skipped.push(Skipped {
                source_file: filename,
                reason: SkipReason::NoContent,
            });
            continue;
        };

        tracing::debug!(
            file = %filename,
            section = %placement.section,
            order = placement.order,
            "extracted page"
        );
        manifest.articles.push(Article {
            title: extracted.title,
            content: extracted.content,
            section: placement.section.clone(),
            order: placement.order,
            source_file: filename,
        });
    }

    Ok(manifest)
}
