//! Single-document generation.
//!
//! Stage 2 of the bundle pipeline. Groups the scanned articles by section,
//! orders them, and renders one self-contained HTML document.
//!
//! ## Document Layout
//!
//! ```text
//! <header>   heading + subtitle from [document] config
//! <main>
//!   <section class="section">          one per non-empty section,
//!     <h2 class="section-title">         in configured section order
//!     <article class="article">          one per page, ascending `order`
//!       <h3>title</h3>
//!       cleaned fragment
//! <footer>   source link + "© <year> <holder>"
//! ```
//!
//! The stylesheet (`static/style.css`) is embedded at compile time and
//! inlined into `<head>`, so the output only depends on the flat asset
//! directory next to it.
//!
//! ## HTML Generation
//!
//! The shell is built with [maud](https://maud.lambda.xyz/). Article titles
//! and fragments are already HTML (entities, inline markup) and are emitted
//! with `PreEscaped`; nothing in them is validated.

use crate::config::{BundleConfig, DocumentConfig};
use crate::types::Article;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

const CSS: &str = include_str!("../static/style.css");

const FONT_STYLESHEET: &str =
    "https://fonts.googleapis.com/css2?family=Roboto:wght@400;500;700&display=swap";

/// A section with its articles in display order.
#[derive(Debug)]
pub struct SectionGroup<'a> {
    pub name: &'a str,
    pub articles: Vec<&'a Article>,
}

/// Render the document and write it to `output`.
///
/// Returns the section groups that were rendered, for reporting.
pub fn generate<'a>(
    articles: &'a [Article],
    config: &'a BundleConfig,
    year: i32,
    output: &Path,
) -> Result<Vec<SectionGroup<'a>>, GenerateError> {
    let sections = group_sections(articles, &config.sections);
    let document = render_document(&sections, &config.document, year);
    write_document(output, &document.into_string())?;
    Ok(sections)
}

/// Group articles by section in `section_order`, dropping empty sections.
///
/// Within a section articles are sorted by `order`; the sort is stable, so
/// equal orders keep their scan order. Articles naming a section absent from
/// `section_order` are not rendered.
pub fn group_sections<'a>(
    articles: &'a [Article],
    section_order: &'a [String],
) -> Vec<SectionGroup<'a>> {
    section_order
        .iter()
        .filter_map(|name| {
            let mut members: Vec<&Article> =
                articles.iter().filter(|a| &a.section == name).collect();
            if members.is_empty() {
                return None;
            }
            members.sort_by_key(|a| a.order);
            Some(SectionGroup {
                name,
                articles: members,
            })
        })
        .collect()
}

/// Write the document, replacing any existing file.
pub fn write_document(path: &Path, document: &str) -> Result<(), GenerateError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, document)?;
    Ok(())
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the full document.
pub fn render_document(
    sections: &[SectionGroup<'_>],
    doc: &DocumentConfig,
    year: i32,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(doc.lang) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (doc.title) }
                link rel="preconnect" href="https://fonts.googleapis.com";
                link rel="preconnect" href="https://fonts.gstatic.com" crossorigin;
                link href=(FONT_STYLESHEET) rel="stylesheet";
                style { (PreEscaped(CSS)) }
            }
            body {
                header {
                    h1 { (doc.heading) }
                    p.subtitle { (doc.subtitle) }
                }
                main {
                    @for section in sections {
                        (render_section(section))
                    }
                }
                (render_footer(doc, year))
            }
        }
    }
}

fn render_section(section: &SectionGroup<'_>) -> Markup {
    html! {
        section.section {
            h2.section-title { (section.name) }
            @for entry in &section.articles {
                article.article {
                    h3 { (PreEscaped(&entry.title)) }
                    (PreEscaped(&entry.content))
                }
            }
        }
    }
}

fn render_footer(doc: &DocumentConfig, year: i32) -> Markup {
    html! {
        footer {
            p {
                "Источник: "
                a href=(doc.source_url) { (doc.source_label) }
            }
            p { "© " (year) " " (doc.copyright_holder) }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
