//! Diff result types shared by the line and set comparisons.
//!
//! All of these are ephemeral projections built per render; none are persisted.

use serde::{Deserialize, Serialize};

/// Per-line verdict of the positional line diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStatus {
    Same,
    Different,
}

/// One annotated line of a compared text.
///
/// `text` keeps the original (untrimmed) line so callers can render it as
/// written; only the comparison itself ignores surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffLine {
    pub text: String,
    pub status: LineStatus,
}

/// Membership verdict of the keyword set diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    Added,
    Removed,
    Unchanged,
}

/// One classified item of a compared keyword set, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDiff {
    pub item: String,
    pub status: ItemStatus,
}

/// Both sides of a draft-versus-manual text comparison.
///
/// Each side is annotated in full against the other, so the two views can be
/// rendered independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextComparison {
    pub left: Vec<DiffLine>,
    pub right: Vec<DiffLine>,
}
