//! Shared types passed from the scan stage to rendering and CLI output.

/// One extracted page, placed in a section.
///
/// Created by [`crate::scan`], never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    /// Heading text from the page's `<h1>`, possibly empty.
    pub title: String,
    /// Cleaned HTML fragment rendered below the heading.
    pub content: String,
    /// Section display name.
    pub section: String,
    /// Position within the section (ascending).
    pub order: u32,
    /// Source filename, e.g. `Полезно.html`.
    pub source_file: String,
}

/// Why a source page did not make it into the bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No keyword from the classification table appears in the filename.
    Unclassified,
    /// The page has no recognizable content region.
    NoContent,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::Unclassified => f.write_str("no matching section"),
            SkipReason::NoContent => f.write_str("content region not found"),
        }
    }
}

/// A source page left out of the bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skipped {
    pub source_file: String,
    pub reason: SkipReason,
}
