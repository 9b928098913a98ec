//! Pluggable string-similarity scoring for fuzzy title search.
//!
//! The query engine depends on the [`Scorer`] trait rather than a concrete
//! algorithm, so the scorer can be swapped without touching search logic.
//! The default [`IndelScorer`] computes a normalized insert/delete
//! edit-distance ratio on a 0–100 scale, which is the convention the
//! search thresholds in [`crate::query`] are calibrated against.

/// A string-similarity scoring capability.
///
/// Implementations return a score in `[0.0, 100.0]` where `100.0` means
/// identical. Scores must be symmetric in their arguments.
pub trait Scorer {
    /// Scores the similarity of `a` and `b` on a 0–100 scale.
    fn similarity(&self, a: &str, b: &str) -> f64;
}

/// Normalized insert/delete edit-distance ratio.
///
/// The score is `100 * (1 - indel(a, b) / (|a| + |b|))`, where `indel` is
/// the minimum number of character insertions and deletions turning `a`
/// into `b` (no substitutions). Equivalently it rewards the longest common
/// subsequence, so a short query embedded in a longer title still scores
/// well. Comparison is case-sensitive and operates on `char`s, not bytes.
#[derive(Debug, Default, Clone, Copy)]
pub struct IndelScorer;

impl Scorer for IndelScorer {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        let len_a = a.chars().count();
        let len_b = b.chars().count();

        if len_a == 0 && len_b == 0 {
            return 100.0;
        }

        let dist = indel_distance(a, b);

        #[allow(clippy::cast_precision_loss)] // title lengths are tiny
        let total = (len_a + len_b) as f64;
        #[allow(clippy::cast_precision_loss)]
        let dist = dist as f64;

        100.0 * (1.0 - dist / total)
    }
}

/// Minimum number of insertions and deletions turning `a` into `b`.
///
/// Two-row dynamic program over chars. A cell either extends a match
/// diagonally (equal chars, no cost) or takes the cheaper of deleting
/// from `a` or inserting from `b`.
fn indel_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev_row: Vec<usize> = (0..=b.len()).collect();
    let mut curr_row = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr_row[0] = i;

        for j in 1..=b.len() {
            curr_row[j] = if a[i - 1] == b[j - 1] {
                prev_row[j - 1]
            } else {
                std::cmp::min(
                    prev_row[j] + 1,     // delete from a
                    curr_row[j - 1] + 1, // insert from b
                )
            };
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_strings_score_100() {
        let scorer = IndelScorer;
        assert_eq!(scorer.similarity("Titanic", "Titanic"), 100.0);
        assert_eq!(scorer.similarity("", ""), 100.0);
    }

    #[test]
    fn test_disjoint_strings_score_0() {
        let scorer = IndelScorer;
        assert_eq!(scorer.similarity("abc", "xyz"), 0.0);
        assert_eq!(scorer.similarity("", "abc"), 0.0);
    }

    #[test]
    fn test_symmetry() {
        let scorer = IndelScorer;
        let ab = scorer.similarity("Shawshank", "Shwshank");
        let ba = scorer.similarity("Shwshank", "Shawshank");
        assert_eq!(ab, ba);
    }

    #[test]
    fn test_indel_distance_basic() {
        // "cat" -> "cart": one insertion.
        assert_eq!(indel_distance("cat", "cart"), 1);
        // "kitten" -> "sitting": no substitutions allowed, so each
        // differing char costs a delete + an insert.
        assert_eq!(indel_distance("kitten", "sitting"), 5);
    }

    #[test]
    fn test_indel_distance_is_char_based() {
        // Multibyte chars count as one edit, not several.
        assert_eq!(indel_distance("héllo", "hello"), 2);
    }

    #[test]
    fn test_embedded_query_scores_at_threshold() {
        // 8 of 8 query chars survive as a subsequence of the 24-char
        // title: distance 16, score 100 * (1 - 16/32) = 50.
        let scorer = IndelScorer;
        let score = scorer.similarity("Shwshank", "The Shawshank Redemption");
        assert_eq!(score, 50.0);
    }
}
