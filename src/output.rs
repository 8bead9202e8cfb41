//! CLI output formatting for all pipeline stages.
//!
//! Output is information-first: sections and articles are listed by title
//! and position, with the source filename as an indented context line.
//!
//! ## Assets
//!
//! ```text
//! Assets → t-bank-copywriting-assets/
//!     copied 14, already present 3
//! ```
//!
//! ## Scan
//!
//! ```text
//! Общие принципы
//!     001 Полезно
//!         Source: Полезно.html
//!     002 Понятно
//!         Source: Понятно.html
//!
//! Skipped
//!     Контакты.html (no matching section)
//! ```
//!
//! ## Generate
//!
//! ```text
//! Bundled 2 sections, 3 articles → t-bank-copywriting.html
//! ```
//!
//! Each stage has a `format_*` function returning `Vec<String>` and a
//! `print_*` wrapper that writes to stdout. Diagnostics do not go here; they
//! are emitted through `tracing` as they happen.

use crate::assets::AssetReport;
use crate::generate::{SectionGroup, group_sections};
use crate::scan::Manifest;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Article heading line; untitled articles show their filename in parens.
fn article_line(index: usize, title: &str, source_file: &str) -> String {
    if title.trim().is_empty() {
        format!("{} ({})", format_index(index), source_file)
    } else {
        format!("{} {}", format_index(index), title)
    }
}

// ============================================================================
// Assets
// ============================================================================

pub fn format_asset_output(report: &AssetReport, dest: &Path) -> Vec<String> {
    vec![
        format!("Assets \u{2192} {}/", dest.display()),
        format!(
            "    copied {}, already present {}",
            report.copied.len(),
            report.skipped.len()
        ),
    ]
}

pub fn print_asset_output(report: &AssetReport, dest: &Path) {
    for line in format_asset_output(report, dest) {
        println!("{}", line);
    }
}

// ============================================================================
// Scan
// ============================================================================

/// Format the planned document layout and the skipped pages.
pub fn format_scan_output(manifest: &Manifest, section_order: &[String]) -> Vec<String> {
    let mut lines = Vec::new();
    let groups = group_sections(&manifest.articles, section_order);

    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        lines.push(group.name.to_string());
        for (idx, article) in group.articles.iter().enumerate() {
            lines.push(format!(
                "    {}",
                article_line(idx + 1, &article.title, &article.source_file)
            ));
            lines.push(format!("        Source: {}", article.source_file));
        }
    }

    if !manifest.skipped.is_empty() {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push("Skipped".to_string());
        for skipped in &manifest.skipped {
            lines.push(format!("    {} ({})", skipped.source_file, skipped.reason));
        }
    }

    lines
}

pub fn print_scan_output(manifest: &Manifest, section_order: &[String]) {
    for line in format_scan_output(manifest, section_order) {
        println!("{}", line);
    }
}

// ============================================================================
// Generate
// ============================================================================

pub fn format_generate_output(sections: &[SectionGroup<'_>], output: &Path) -> Vec<String> {
    let article_count: usize = sections.iter().map(|s| s.articles.len()).sum();
    vec![format!(
        "Bundled {} sections, {} articles \u{2192} {}",
        sections.len(),
        article_count,
        output.display()
    )]
}

pub fn print_generate_output(sections: &[SectionGroup<'_>], output: &Path) {
    for line in format_generate_output(sections, output) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
