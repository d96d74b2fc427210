use std::collections::HashSet;

use crate::types::{ItemDiff, ItemStatus};

/// Classifies keyword items between an old and a new version.
///
/// Equality is on trimmed values. Display order is the new version's order
/// with removed old-only items appended in old order, so the current state
/// reads first and history trails it. Items that trim to empty are dropped,
/// and duplicates (after trimming) collapse to their first occurrence.
pub fn compare_sets(old_items: &[String], new_items: &[String]) -> Vec<ItemDiff> {
    let old_set = trimmed_set(old_items);

    let mut seen: HashSet<&str> = HashSet::new();
    let mut diff = Vec::with_capacity(old_items.len() + new_items.len());

    for item in new_items {
        let trimmed = item.trim();
        if trimmed.is_empty() || !seen.insert(trimmed) {
            continue;
        }
        let status = if old_set.contains(trimmed) {
            ItemStatus::Unchanged
        } else {
            ItemStatus::Added
        };
        diff.push(ItemDiff {
            item: trimmed.to_string(),
            status,
        });
    }

    // whatever survives `seen` here exists only in the old version
    for item in old_items {
        let trimmed = item.trim();
        if trimmed.is_empty() || !seen.insert(trimmed) {
            continue;
        }
        diff.push(ItemDiff {
            item: trimmed.to_string(),
            status: ItemStatus::Removed,
        });
    }

    diff
}

fn trimmed_set(items: &[String]) -> HashSet<&str> {
    items
        .iter()
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .collect()
}
