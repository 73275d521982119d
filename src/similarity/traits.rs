// Similarity scorer trait: swap-ready abstraction.
//
// The check only needs "how alike are these two texts". TF-IDF cosine is the
// default; another scorer can be dropped in without touching the matcher or
// the batch loop.

/// Scores the similarity of two texts.
pub trait SimilarityScorer {
    /// Return a similarity in [0, 1]. Must be symmetric, and must return
    /// 0.0 when either side has no scorable terms.
    fn score(&self, text_a: &str, text_b: &str) -> f64;
}
