use crate::tokenize::tokenize_lines;
use crate::types::{DiffLine, LineStatus, TextComparison};

/// Annotates `left` against `right`, index by index.
///
/// A line is `Different` when `right` has no line at that index or when the
/// trimmed contents differ; otherwise it is `Same`. There is no
/// insertion/deletion realignment: one inserted line marks every following
/// line `Different`. The right-side annotation is the symmetric call with the
/// arguments swapped.
pub fn compare_lines(left: &[String], right: &[String]) -> Vec<DiffLine> {
    left.iter()
        .enumerate()
        .map(|(idx, line)| {
            let status = match right.get(idx) {
                Some(other) if line.trim() == other.trim() => LineStatus::Same,
                _ => LineStatus::Different,
            };
            DiffLine {
                text: line.clone(),
                status,
            }
        })
        .collect()
}

/// Tokenizes two raw texts and annotates both sides against each other.
///
/// This is the draft-versus-manual comparison: each side is rendered in full,
/// with per-line verdicts relative to the other side.
pub fn compare_texts(left: &str, right: &str) -> TextComparison {
    let left_lines = tokenize_lines(left);
    let right_lines = tokenize_lines(right);
    TextComparison {
        left: compare_lines(&left_lines, &right_lines),
        right: compare_lines(&right_lines, &left_lines),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    fn statuses(diff: &[DiffLine]) -> Vec<LineStatus> {
        diff.iter().map(|line| line.status).collect()
    }

    #[test]
    fn equal_sequences_are_all_same() {
        let left = lines(&["step one", "step two"]);
        let diff = compare_lines(&left, &left);
        assert_eq!(statuses(&diff), vec![LineStatus::Same, LineStatus::Same]);
    }

    #[test]
    fn inserted_line_shifts_everything_after_it() {
        let left = lines(&["x", "y"]);
        let right = lines(&["x", "z", "y"]);
        assert_eq!(
            statuses(&compare_lines(&left, &right)),
            vec![LineStatus::Same, LineStatus::Different]
        );
        assert_eq!(
            statuses(&compare_lines(&right, &left)),
            vec![
                LineStatus::Same,
                LineStatus::Different,
                LineStatus::Different
            ]
        );
    }

    #[test]
    fn comparison_ignores_surrounding_whitespace() {
        let diff = compare_lines(&lines(&["  step one  "]), &lines(&["step one"]));
        assert_eq!(diff[0].status, LineStatus::Same);
        // the original spelling is kept for rendering
        assert_eq!(diff[0].text, "  step one  ");
    }

    #[test]
    fn lines_past_the_end_of_the_other_side_are_different() {
        let diff = compare_lines(&lines(&["a", "b"]), &lines(&["a"]));
        assert_eq!(statuses(&diff), vec![LineStatus::Same, LineStatus::Different]);
    }

    #[test]
    fn empty_left_side_produces_empty_annotation() {
        assert!(compare_lines(&[], &lines(&["a"])).is_empty());
        assert!(compare_lines(&[], &[]).is_empty());
    }

    #[test]
    fn compare_texts_annotates_both_sides() {
        let cmp = compare_texts("alpha\n\nbeta", "alpha\ngamma\nbeta");
        assert_eq!(
            statuses(&cmp.left),
            vec![LineStatus::Same, LineStatus::Different]
        );
        assert_eq!(
            statuses(&cmp.right),
            vec![
                LineStatus::Same,
                LineStatus::Different,
                LineStatus::Different
            ]
        );
    }

    proptest! {
        #[test]
        fn annotation_length_always_matches_the_left_side(
            left in prop::collection::vec("[a-z]{0,6}", 0..8),
            right in prop::collection::vec("[a-z]{0,6}", 0..8),
        ) {
            prop_assert_eq!(compare_lines(&left, &right).len(), left.len());
        }

        #[test]
        fn lines_beyond_the_right_side_are_always_different(
            shared in prop::collection::vec("[a-z]{1,6}", 0..6),
            extra in prop::collection::vec("[a-z]{1,6}", 1..6),
        ) {
            let mut left = shared.clone();
            left.extend(extra.iter().cloned());
            let diff = compare_lines(&left, &shared);
            for line in diff.iter().skip(shared.len()) {
                prop_assert_eq!(line.status, LineStatus::Different);
            }
        }

        #[test]
        fn comparing_a_sequence_with_itself_is_all_same(
            steps in prop::collection::vec("[a-z]{1,6}", 0..8),
        ) {
            for line in compare_lines(&steps, &steps) {
                prop_assert_eq!(line.status, LineStatus::Same);
            }
        }
    }
}
