//! # KB Diff
//!
//! Comparison engine for manual drafts and manual versions.
//!
//! ## Pipeline
//!
//! ```text
//! Raw text (guidelines, drafts)
//!     │
//!     ├──> Line tokenizer
//!     │      └─> Trimmed, blank-free step sequences
//!     │
//!     ├──> Positional line diff
//!     │      └─> Same / Different per index
//!     │
//!     └──> Keyword set diff
//!            └─> Added / Removed / Unchanged per item
//! ```
//!
//! The line diff is positional by policy: lines are compared index by index
//! with no realignment, so a single inserted line marks every following line
//! `Different`. Reviewers rely on that "everything below here moved" signal;
//! do not replace it with an LCS diff.
//!
//! Everything here is pure and synchronous. Fetching version payloads and
//! orchestrating comparisons lives in `kb-versions`.

mod line_diff;
mod set_diff;
mod summary;
mod tokenize;
mod types;

pub use line_diff::{compare_lines, compare_texts};
pub use set_diff::compare_sets;
pub use summary::DiffSummary;
pub use tokenize::tokenize_lines;
pub use types::{DiffLine, ItemDiff, ItemStatus, LineStatus, TextComparison};
