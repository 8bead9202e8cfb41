//! # Guide Bundle
//!
//! Turns a documentation style guide exported page-by-page from a
//! documentation site into one self-contained HTML document. Filenames
//! decide where each page goes; the page markup is stripped down to its
//! article body.
//!
//! # Pipeline
//!
//! ```text
//! 1. Assets    t-bank/*_files/  →  t-bank-copywriting-assets/   (flat copy)
//! 2. Scan      t-bank/*.html    →  Manifest                     (classify + extract)
//! 3. Generate  Manifest         →  t-bank-copywriting.html      (group, sort, render)
//! ```
//!
//! Stages run once, in order, on a single thread. Pages that cannot be placed
//! or have no recognizable body are logged and left out; any I/O error aborts
//! the run.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`assets`] | Copies images from per-page `_files` folders into one flat directory |
//! | [`classify`] | Ordered keyword table mapping filenames to `(section, order)` |
//! | [`extract`] | Content region extraction and the regex cleanup chain |
//! | [`scan`] | Stage driver: lists pages, classifies, extracts, records skips |
//! | [`generate`] | Groups articles into sections and renders the document with Maud |
//! | [`config`] | Stock configuration, optional TOML overrides, validation |
//! | [`types`] | `Article` and skip records shared across stages |
//! | [`output`] | CLI output formatting for each stage |
//!
//! # Design Decisions
//!
//! ## Filenames Are The Routing Table
//!
//! The exporter gives no structured metadata, only page titles baked into
//! filenames. Routing is therefore a substring match against an ordered
//! keyword list, normalized to NFC on both sides. When keywords overlap the
//! earlier row wins, so more specific keywords must be listed first.
//!
//! ## Regex Cleanup, Not An HTML Parser
//!
//! The exported markup is machine-generated and uniform. A fixed chain of
//! regex rewrites is enough to strip it down and keeps the output
//! byte-predictable. The cost is known: a single pass removes empty `div`s,
//! so nested empty wrappers can leave residue, and malformed markup passes
//! through unchanged.
//!
//! ## First Writer Wins For Assets
//!
//! Assets are flattened by filename. When two pages ship different files
//! under one name, the first copied is kept and the rest are reported as
//! skipped. This also makes re-running the copier a no-op.

pub mod assets;
pub mod classify;
pub mod config;
pub mod extract;
pub mod generate;
pub mod output;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
