//! Comparison results and coordinator snapshots.

use kb_diff::{compare_lines, compare_sets, tokenize_lines, DiffLine, DiffSummary, ItemDiff};
use serde::{Deserialize, Serialize};

use crate::store::VersionPayload;

/// Annotated difference between two manual versions.
///
/// Built fresh for every refresh; never cached here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionComparison {
    pub old_version: String,
    pub new_version: String,
    /// Keyword classification in the new version's order, removed keywords
    /// appended.
    pub keyword_statuses: Vec<ItemDiff>,
    /// The new version's guideline steps, annotated positionally against the
    /// old version's.
    pub guideline_statuses: Vec<DiffLine>,
}

impl VersionComparison {
    pub(crate) fn build(
        old_version: String,
        new_version: String,
        old: &VersionPayload,
        new: &VersionPayload,
    ) -> Self {
        let keyword_statuses = compare_sets(&old.keywords, &new.keywords);
        let old_steps = tokenize_lines(&old.guideline_text);
        let new_steps = tokenize_lines(&new.guideline_text);
        let guideline_statuses = compare_lines(&new_steps, &old_steps);

        Self {
            old_version,
            new_version,
            keyword_statuses,
            guideline_statuses,
        }
    }

    /// Aggregate change counts for badge display.
    #[must_use]
    pub fn summary(&self) -> DiffSummary {
        DiffSummary::from_parts(&self.keyword_statuses, &self.guideline_statuses)
    }
}

/// Lifecycle of one version-comparison session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompareStatus {
    /// No comparison available: start-up, or fewer than two distinct
    /// versions exist.
    #[default]
    Idle,
    Loading,
    Ready,
    Failed,
}

/// Coordinator state as exposed to the presentation layer.
///
/// `old_version` and `new_version` mirror the selector widgets: they hold the
/// explicitly chosen tags, or the resolved defaults once a refresh settles.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompareSnapshot {
    pub status: CompareStatus,
    pub old_version: Option<String>,
    pub new_version: Option<String>,
    pub comparison: Option<VersionComparison>,
    /// Fixed banner message while `status` is [`CompareStatus::Failed`].
    pub error: Option<String>,
}

impl CompareSnapshot {
    pub(crate) fn initial() -> Self {
        Self {
            status: CompareStatus::Idle,
            old_version: None,
            new_version: None,
            comparison: None,
            error: None,
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.status == CompareStatus::Loading
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.status == CompareStatus::Failed
    }
}
