use serde::Serialize;

use crate::types::{DiffLine, ItemDiff, ItemStatus, LineStatus};

/// Aggregate change counts for badge display next to a comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiffSummary {
    pub keywords_added: usize,
    pub keywords_removed: usize,
    pub keywords_unchanged: usize,
    pub steps_changed: usize,
    pub steps_total: usize,
}

impl DiffSummary {
    pub fn from_parts(keywords: &[ItemDiff], steps: &[DiffLine]) -> Self {
        let mut summary = Self::default();
        for keyword in keywords {
            match keyword.status {
                ItemStatus::Added => summary.keywords_added += 1,
                ItemStatus::Removed => summary.keywords_removed += 1,
                ItemStatus::Unchanged => summary.keywords_unchanged += 1,
            }
        }
        summary.steps_total = steps.len();
        summary.steps_changed = steps
            .iter()
            .filter(|line| line.status == LineStatus::Different)
            .count();
        summary
    }

    /// True when the comparison shows no keyword or step changes.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.keywords_added == 0 && self.keywords_removed == 0 && self.steps_changed == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{compare_lines, compare_sets};
    use pretty_assertions::assert_eq;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn counts_keyword_and_step_changes() {
        let keywords = compare_sets(&strings(&["a", "b"]), &strings(&["b", "c"]));
        let steps = compare_lines(&strings(&["x", "z", "y"]), &strings(&["x", "y"]));
        let summary = DiffSummary::from_parts(&keywords, &steps);

        assert_eq!(summary.keywords_added, 1);
        assert_eq!(summary.keywords_removed, 1);
        assert_eq!(summary.keywords_unchanged, 1);
        assert_eq!(summary.steps_changed, 2);
        assert_eq!(summary.steps_total, 3);
        assert!(!summary.is_clean());
    }

    #[test]
    fn identical_versions_summarize_as_clean() {
        let keywords = compare_sets(&strings(&["a"]), &strings(&["a"]));
        let steps = compare_lines(&strings(&["x"]), &strings(&["x"]));
        assert!(DiffSummary::from_parts(&keywords, &steps).is_clean());
    }
}
