//! Filename keyword classification.
//!
//! Exported pages carry their topic in the filename (`Полезно.html`,
//! `Тире и дефисы.html`), so routing a page to its section is a substring
//! lookup against an ordered keyword table. The first keyword found in the
//! filename wins; when one keyword contains another, the row declared first
//! takes priority.
//!
//! Filenames coming from macOS file systems are often in decomposed Unicode
//! form (`й` as `и` + combining breve), which never matches a composed
//! keyword byte-for-byte. Both sides are normalized to NFC before comparing.

use unicode_normalization::UnicodeNormalization;

/// Where a page lands in the bundled document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// Section display name.
    pub section: String,
    /// Position within the section (ascending).
    pub order: u32,
}

/// Immutable ordered keyword → placement table.
#[derive(Debug, Clone)]
pub struct ClassificationTable {
    rules: Vec<(String, Placement)>,
}

impl ClassificationTable {
    /// Build the table from `(keyword, placement)` pairs in priority order.
    pub fn new<'a>(rules: impl IntoIterator<Item = (&'a str, Placement)>) -> Self {
        Self {
            rules: rules
                .into_iter()
                .map(|(keyword, placement)| (nfc(keyword), placement))
                .collect(),
        }
    }

    /// Return the placement of the first keyword contained in `filename`.
    pub fn classify(&self, filename: &str) -> Option<&Placement> {
        let normalized = nfc(filename);
        self.rules
            .iter()
            .find(|(keyword, _)| normalized.contains(keyword.as_str()))
            .map(|(_, placement)| placement)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

fn nfc(s: &str) -> String {
    s.nfc().collect()
}
