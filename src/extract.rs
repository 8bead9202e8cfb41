//! Content extraction and markup cleanup.
//!
//! Each exported page is a full documentation-site document: navigation,
//! sidebar, footer, hydration scripts. The article body sits inside
//! `<div class="theme-doc-markdown markdown">` and runs to the closing
//! `</article>`. Everything outside that region is discarded.
//!
//! The body is then cleaned by a fixed chain of regex rewrites. The chain is
//! order-sensitive: the icon rule in [`strip_styles`] emits a `class`
//! attribute, so it must run after [`rewrite_classes`] or the icon marker
//! would be filtered out again; empty `div` removal runs last so it sees the
//! elements emptied by the earlier steps.
//!
//! ## Class Mapping
//!
//! CSS-module class names carry build hashes (`cardTableRow_x7Qa`) that the
//! bundled stylesheet cannot target. Tokens are mapped by the first matching
//! rule, everything else is dropped:
//!
//! | Token | Result |
//! |-------|--------|
//! | `grid*` | kept |
//! | `note-container` | kept |
//! | `hash-link` | kept, then removed with its anchor |
//! | `cardTableCell*` | `card-cell` |
//! | `cardTableRow*` | `card-row` |
//! | `cardTable_*` | `card-table` |
//! | `statusContainer*` | `status` |
//!
//! `cardTableCell` and `cardTableRow` are tested before `cardTable_`; the
//! underscore keeps the table rule from swallowing cells and rows.
//!
//! ## Known Limitation
//!
//! Empty `div` removal is a single pass over `<div>\s*</div>`. A `div` that
//! only becomes empty once its empty children are gone survives as
//! `<div></div>`. Markup is never parsed into a tree.

use regex::{Captures, Regex};
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

/// Class marking heading permalinks. Kept through the class rewrite so the
/// anchor step can still find it.
const HASH_LINK_MARKER: &str = "hash-link";

static CONTENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<div class="theme-doc-markdown markdown">(.*?)</article>"#)
        .expect("Invalid content region regex")
});

static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<h1>(.*?)</h1>").expect("Invalid title regex"));

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("Invalid tag regex"));

static HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<header>.*?</header>").expect("Invalid header regex"));

static IMAGE_SRC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"src="\./[^"]*_files/([^"]+)""#).expect("Invalid image src regex")
});

static CLASS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(\s*)class="([^"]*)""#).expect("Invalid class regex"));

static HASH_LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<a[^>]*hash-link[^>]*>.*?</a>").expect("Invalid hash-link regex")
});

static ICON_STYLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\s+style="[^"]*width:\s*24px[^"]*""#).expect("Invalid icon style regex")
});

static STYLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\s+style="[^"]*""#).expect("Invalid style regex"));

static SVG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<svg.*?</svg>").expect("Invalid svg regex"));

static QA_SPAN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<span[^>]*data-qa-type[^>]*>.*?</span>").expect("Invalid qa span regex")
});

static EMPTY_DIV_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<div>\s*</div>").expect("Invalid empty div regex"));

/// Title and cleaned body of one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted {
    /// Text of the first `<h1>`, tags removed. Empty when the page has none.
    pub title: String,
    /// Cleaned HTML fragment.
    pub content: String,
}

/// Read a page from disk and extract it.
///
/// `Ok(None)` means the page has no content region; I/O failures are errors.
pub fn extract_file(path: &Path, assets_dir_name: &str) -> std::io::Result<Option<Extracted>> {
    let html = fs::read_to_string(path)?;
    Ok(extract(&html, assets_dir_name))
}

/// Extract the content region of `html` and run the cleanup chain over it.
pub fn extract(html: &str, assets_dir_name: &str) -> Option<Extracted> {
    let region = CONTENT_RE.captures(html)?.get(1)?.as_str();

    let title = TITLE_RE
        .captures(region)
        .and_then(|c| c.get(1))
        .map(|m| TAG_RE.replace_all(m.as_str(), "").into_owned())
        .unwrap_or_default();

    Some(Extracted {
        title,
        content: clean_content(region, assets_dir_name),
    })
}

/// Apply every rewrite, in order, to a content fragment.
pub fn clean_content(fragment: &str, assets_dir_name: &str) -> String {
    let content = strip_header(fragment);
    let content = rewrite_image_paths(&content, assets_dir_name);
    let content = rewrite_classes(&content);
    let content = strip_hash_links(&content);
    let content = strip_styles(&content);
    let content = strip_svgs(&content);
    let content = strip_qa_spans(&content);
    strip_empty_divs(&content)
}

/// Remove the first `<header>` block (the page's own title bar).
pub fn strip_header(content: &str) -> String {
    HEADER_RE.replace(content, "").into_owned()
}

/// Point `./<page>_files/<name>` image sources at the shared asset directory.
pub fn rewrite_image_paths(content: &str, assets_dir_name: &str) -> String {
    IMAGE_SRC_RE
        .replace_all(content, |caps: &Captures<'_>| {
            format!(r#"src="./{}/{}""#, assets_dir_name, &caps[1])
        })
        .into_owned()
}

/// Map every `class` attribute through the token rules, dropping it when empty.
pub fn rewrite_classes(content: &str) -> String {
    CLASS_RE
        .replace_all(content, |caps: &Captures<'_>| {
            let tokens = map_class_tokens(&caps[2]);
            if tokens.is_empty() {
                String::new()
            } else {
                format!(r#"{}class="{}""#, &caps[1], tokens.join(" "))
            }
        })
        .into_owned()
}

/// Map a whitespace-separated class list, deduplicating while keeping order.
pub fn map_class_tokens(classes: &str) -> Vec<&str> {
    let mut kept: Vec<&str> = Vec::new();
    for token in classes.split_whitespace() {
        if let Some(mapped) = map_class_token(token)
            && !kept.contains(&mapped)
        {
            kept.push(mapped);
        }
    }
    kept
}

fn map_class_token(token: &str) -> Option<&str> {
    if token.starts_with("grid") || token == "note-container" || token == HASH_LINK_MARKER {
        Some(token)
    } else if token.starts_with("cardTableCell") {
        Some("card-cell")
    } else if token.starts_with("cardTableRow") {
        Some("card-row")
    } else if token.starts_with("cardTable_") {
        Some("card-table")
    } else if token.starts_with("statusContainer") {
        Some("status")
    } else {
        None
    }
}

/// Remove heading permalink anchors together with their content.
pub fn strip_hash_links(content: &str) -> String {
    HASH_LINK_RE.replace_all(content, "").into_owned()
}

/// Turn 24px-wide inline styles into `class="icon"`, then drop all other styles.
pub fn strip_styles(content: &str) -> String {
    let content = ICON_STYLE_RE.replace_all(content, r#" class="icon""#);
    STYLE_RE.replace_all(&content, "").into_owned()
}

pub fn strip_svgs(content: &str) -> String {
    SVG_RE.replace_all(content, "").into_owned()
}

pub fn strip_qa_spans(content: &str) -> String {
    QA_SPAN_RE.replace_all(content, "").into_owned()
}

/// Single pass; see the module docs.
pub fn strip_empty_divs(content: &str) -> String {
    EMPTY_DIV_RE.replace_all(content, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ASSETS: &str = "t-bank-copywriting-assets";

    fn page(body: &str) -> String {
        format!(
            r#"<html><body><nav>menu</nav><article><div class="theme-doc-markdown markdown">{body}</div></article><footer>site</footer></body></html>"#
        )
    }

    // =========================================================================
    // Region and title
    // =========================================================================

    #[test]
    fn extracts_region_and_title() {
        let html = r#"<div class="theme-doc-markdown markdown"><h1>Title</h1><p>Body</p></div></article>"#;
        let extracted = extract(html, ASSETS).unwrap();
        assert_eq!(extracted.title, "Title");
        assert!(extracted.content.contains("<p>Body</p>"));
    }

    #[test]
    fn region_stops_at_first_article_close() {
        let html = page("<p>Inside</p>") + "<p>Outside</p></article>";
        let extracted = extract(&html, ASSETS).unwrap();
        assert!(extracted.content.contains("Inside"));
        assert!(!extracted.content.contains("Outside"));
        assert!(!extracted.content.contains("menu"));
    }

    #[test]
    fn region_spans_lines() {
        let html = page("\n<h1>Multi</h1>\n<p>line</p>\n");
        let extracted = extract(&html, ASSETS).unwrap();
        assert_eq!(extracted.title, "Multi");
        assert!(extracted.content.contains("<p>line</p>"));
    }

    #[test]
    fn missing_region_yields_none() {
        assert_eq!(extract("<html><p>No markers</p></html>", ASSETS), None);
    }

    #[test]
    fn region_without_article_close_yields_none() {
        let html = r#"<div class="theme-doc-markdown markdown"><p>Body</p></div>"#;
        assert_eq!(extract(html, ASSETS), None);
    }

    #[test]
    fn title_strips_nested_markup() {
        let html = page(r##"<h1>Без <em>повторов</em><a class="hash-link" href="#x">#</a></h1>"##);
        assert_eq!(extract(&html, ASSETS).unwrap().title, "Без повторов#");
    }

    #[test]
    fn title_defaults_to_empty() {
        let html = page("<p>No heading</p>");
        assert_eq!(extract(&html, ASSETS).unwrap().title, "");
    }

    // =========================================================================
    // Individual rewrites
    // =========================================================================

    #[test]
    fn header_block_removed_once() {
        let content = "<header><h1>T</h1></header><p>a</p><header>kept</header>";
        assert_eq!(strip_header(content), "<p>a</p><header>kept</header>");
    }

    #[test]
    fn image_src_points_at_shared_assets() {
        let content = r#"<img src="./Page_files/icon.png" alt="">"#;
        assert_eq!(
            rewrite_image_paths(content, ASSETS),
            r#"<img src="./t-bank-copywriting-assets/icon.png" alt="">"#
        );
    }

    #[test]
    fn image_src_outside_files_folder_untouched() {
        let content = r#"<img src="https://cdn.example/icon.png">"#;
        assert_eq!(rewrite_image_paths(content, ASSETS), content);
    }

    #[test]
    fn class_tokens_keep_grid_and_note() {
        assert_eq!(
            map_class_tokens("grid grid-col--2 note-container theme-admonition"),
            vec!["grid", "grid-col--2", "note-container"]
        );
    }

    #[test]
    fn class_tokens_row_and_status_both_survive() {
        assert_eq!(
            map_class_tokens("cardTableRow_abc12 statusContainer_9xz"),
            vec!["card-row", "status"]
        );
    }

    #[test]
    fn class_tokens_specific_prefixes_before_table() {
        assert_eq!(map_class_tokens("cardTableCell_q1"), vec!["card-cell"]);
        assert_eq!(map_class_tokens("cardTableRow_q1"), vec!["card-row"]);
        assert_eq!(map_class_tokens("cardTable_q1"), vec!["card-table"]);
    }

    #[test]
    fn class_tokens_keep_hash_link_marker() {
        assert_eq!(map_class_tokens("hash-link anchor_x1"), vec!["hash-link"]);
    }

    #[test]
    fn hash_links_removed_after_class_rewrite() {
        let content = r##"<h2 class="anchor_q" id="a">A<a href="#a" class="hash-link" title="Прямая ссылка">&#8203;</a></h2>"##;
        let rewritten = rewrite_classes(content);
        assert_eq!(strip_hash_links(&rewritten), r#"<h2 id="a">A</h2>"#);
    }

    #[test]
    fn class_tokens_deduplicated() {
        assert_eq!(
            map_class_tokens("cardTableCell_a cardTableCell_b"),
            vec!["card-cell"]
        );
    }

    #[test]
    fn class_attribute_rewritten_in_place() {
        let content = r#"<div class="cardTable_x1 shadow"><p class="text">a</p></div>"#;
        assert_eq!(
            rewrite_classes(content),
            r#"<div class="card-table"><p>a</p></div>"#
        );
    }

    #[test]
    fn hash_links_removed_with_content() {
        let content = r##"<h2>Dates<a href="#dates" class="hash-link" title="link">&#8203;</a></h2>"##;
        assert_eq!(strip_hash_links(content), "<h2>Dates</h2>");
    }

    #[test]
    fn icon_style_becomes_class() {
        let content = r#"<img src="a.svg" style="width: 24px; height: 24px">"#;
        assert_eq!(strip_styles(content), r#"<img src="a.svg" class="icon">"#);
    }

    #[test]
    fn other_styles_removed() {
        let content = r#"<p style="color: red">a</p><img style="width:100%">"#;
        assert_eq!(strip_styles(content), "<p>a</p><img>");
    }

    #[test]
    fn svgs_removed() {
        let content = "<p>a<svg viewBox=\"0 0 24 24\">\n<path d=\"M0\"/></svg>b</p>";
        assert_eq!(strip_svgs(content), "<p>ab</p>");
    }

    #[test]
    fn qa_spans_removed() {
        let content = r#"<p>a<span data-qa-type="uikit/badge">new</span>b<span>kept</span></p>"#;
        assert_eq!(strip_qa_spans(content), "<p>ab<span>kept</span></p>");
    }

    #[test]
    fn empty_divs_removed_in_single_pass() {
        assert_eq!(strip_empty_divs("<div> \n </div><p>a</p>"), "<p>a</p>");
        assert_eq!(strip_empty_divs("<div><div></div></div>"), "<div></div>");
    }

    // =========================================================================
    // Full chain
    // =========================================================================

    #[test]
    fn chain_turns_classless_wrappers_into_removable_divs() {
        let content = r#"<div class="wrapper_a1"> </div><p>a</p>"#;
        assert_eq!(clean_content(content, ASSETS), "<p>a</p>");
    }

    #[test]
    fn chain_icon_class_survives_class_rewrite() {
        let content = r#"<img src="./X_files/ok.svg" style="width:24px">"#;
        assert_eq!(
            clean_content(content, ASSETS),
            r#"<img src="./t-bank-copywriting-assets/ok.svg" class="icon">"#
        );
    }

    #[test]
    fn chain_cleans_realistic_fragment() {
        let body = r##"<header><h1>Тире</h1></header>
<h2 class="anchor anchorWithStickyNavbar_abc" id="dash">Длинное тире<a href="#dash" class="hash-link">#</a></h2>
<div class="cardTable_k2 root"><div class="cardTableRow_k3"><div class="cardTableCell_k4"><div class="statusContainer_k5"><img src="./Тире_files/ok.svg" style="width: 24px"><p>Так</p></div></div></div></div>
<div class="theme-admonition note-container"><svg><path/></svg><p>Заметка</p></div>
<p>Текст<span data-qa-type="hint">?</span></p>"##;
        let extracted = extract(&page(body), ASSETS).unwrap();
        let c = &extracted.content;

        assert_eq!(extracted.title, "Тире");
        assert!(!c.contains("<header>"));
        assert!(c.contains(r#"<h2 id="dash">Длинное тире</h2>"#));
        assert!(c.contains(r#"<div class="card-table"><div class="card-row"><div class="card-cell"><div class="status">"#));
        assert!(c.contains(r#"<img src="./t-bank-copywriting-assets/ok.svg" class="icon">"#));
        assert!(c.contains(r#"<div class="note-container"><p>Заметка</p></div>"#));
        assert!(c.contains("<p>Текст</p>"));
        assert!(!c.contains("svg>"));
    }
}
