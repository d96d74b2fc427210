use crate::model::{RawHit, SimilarConsultation};

/// Projects raw backend hits into display rows.
///
/// Rank follows the backend's ordering (1-based); no re-sorting happens here.
/// Score is the raw similarity as a rounded percentage, clamped into
/// `0..=100` so an out-of-range backend value cannot break the badge render.
pub fn project_hits(hits: Vec<RawHit>) -> Vec<SimilarConsultation> {
    hits.into_iter()
        .enumerate()
        .map(|(idx, hit)| SimilarConsultation {
            rank: idx + 1,
            score: score_percent(hit.similarity),
            consultation_id: hit.consultation_id,
            inquiry: hit.inquiry,
            answer: hit.answer,
            keywords: hit.keywords,
        })
        .collect()
}

fn score_percent(similarity: f64) -> u8 {
    let percent = (similarity * 100.0).round();
    if percent.is_nan() {
        return 0;
    }
    percent.clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn hit(id: &str, similarity: f64) -> RawHit {
        RawHit {
            similarity,
            consultation_id: id.to_string(),
            inquiry: String::new(),
            answer: String::new(),
            error_code: None,
            keywords: Vec::new(),
        }
    }

    #[test]
    fn rounds_similarity_to_a_percentage() {
        let rows = project_hits(vec![hit("c-1", 0.873)]);
        assert_eq!(rows[0].score, 87);
    }

    #[test]
    fn ranks_follow_backend_order_starting_at_one() {
        let rows = project_hits(vec![hit("a", 0.5), hit("b", 0.9), hit("c", 0.1)]);
        let ranked: Vec<(usize, &str)> = rows
            .iter()
            .map(|row| (row.rank, row.consultation_id.as_str()))
            .collect();
        assert_eq!(ranked, vec![(1, "a"), (2, "b"), (3, "c")]);
    }

    #[test]
    fn scores_clamp_to_the_percent_range() {
        let rows = project_hits(vec![hit("hi", 1.7), hit("lo", -0.3), hit("nan", f64::NAN)]);
        assert_eq!(rows[0].score, 100);
        assert_eq!(rows[1].score, 0);
        assert_eq!(rows[2].score, 0);
    }

    #[test]
    fn rounding_is_to_the_nearest_percent() {
        assert_eq!(project_hits(vec![hit("x", 0.874)])[0].score, 87);
        assert_eq!(project_hits(vec![hit("x", 0.876)])[0].score, 88);
        assert_eq!(project_hits(vec![hit("x", 1.0)])[0].score, 100);
        assert_eq!(project_hits(vec![hit("x", 0.0)])[0].score, 0);
    }

    #[test]
    fn empty_hits_project_to_empty_rows() {
        assert!(project_hits(Vec::new()).is_empty());
    }
}
