//! Shared test utilities for the guide-bundle test suite.
//!
//! Builds exported-page fixtures on disk and provides lookups over scan
//! results that panic with a readable message on a miss.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = TempDir::new().unwrap();
//! write_page(tmp.path(), "Полезно.html", "Полезно", "<p>Body</p>");
//! write_asset(tmp.path(), "Полезно_files", "hero.png", b"png");
//!
//! let manifest = scan(tmp.path(), &table, "assets").unwrap();
//! let article = find_article(&manifest, "Полезно.html");
//! ```

use std::fs;
use std::path::Path;
use unicode_normalization::UnicodeNormalization;

use crate::scan::Manifest;
use crate::types::Article;

// =========================================================================
// Fixture setup
// =========================================================================

/// Wrap a body in the chrome an exported documentation page carries.
pub fn exported_page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="ru">
<head><meta charset="UTF-8"><title>{title} | Т-Банк</title></head>
<body>
<nav class="navbar">Меню</nav>
<main><article><div class="theme-doc-markdown markdown"><header><h1>{title}</h1></header>
{body}
</div></article></main>
<footer class="footer">© Т-Банк</footer>
</body>
</html>"#
    )
}

/// Write an exported page named `filename` into `dir`.
pub fn write_page(dir: &Path, filename: &str, title: &str, body: &str) {
    fs::write(dir.join(filename), exported_page(title, body)).unwrap();
}

/// Write `bytes` as `dir/folder/name`, creating `folder` as needed.
pub fn write_asset(dir: &Path, folder: &str, name: &str, bytes: &[u8]) {
    let folder = dir.join(folder);
    fs::create_dir_all(&folder).unwrap();
    fs::write(folder.join(name), bytes).unwrap();
}

/// Decomposed (NFD) form of `s`, as macOS file systems tend to store names.
pub fn nfd(s: &str) -> String {
    s.nfd().collect()
}

// =========================================================================
// Manifest lookups
// =========================================================================

/// Find an article by source filename. Panics if not found.
pub fn find_article<'a>(manifest: &'a Manifest, source_file: &str) -> &'a Article {
    manifest
        .articles
        .iter()
        .find(|a| a.source_file == source_file)
        .unwrap_or_else(|| {
            let files: Vec<&str> = manifest
                .articles
                .iter()
                .map(|a| a.source_file.as_str())
                .collect();
            panic!("article '{source_file}' not found. Available: {files:?}")
        })
}

/// Build an article directly, bypassing extraction.
pub fn article(section: &str, order: u32, title: &str, content: &str) -> Article {
    Article {
        title: title.to_string(),
        content: content.to_string(),
        section: section.to_string(),
        order,
        source_file: format!("{title}.html"),
    }
}
