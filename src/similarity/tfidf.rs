// Pairwise TF-IDF cosine similarity.
//
// Each call builds a two-document corpus from its inputs, so the vocabulary
// and IDF weights are local to the pair:
//
//   tf(t, d)  = raw count of t in d
//   idf(t)    = ln((1 + n) / (1 + df(t))) + 1, with n = 2
//
// A term present in both texts weighs 1.0 per occurrence, a term present in
// only one weighs ln(1.5) + 1. Terms are lowercase runs of two or more word
// characters; single characters and punctuation are ignored.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use super::traits::SimilarityScorer;
use crate::text::tokenize::words;

/// Number of documents in a pairwise corpus.
const PAIR_CORPUS_SIZE: f64 = 2.0;

/// TF-IDF cosine scorer, the default `SimilarityScorer`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TfIdfCosine;

impl SimilarityScorer for TfIdfCosine {
    fn score(&self, text_a: &str, text_b: &str) -> f64 {
        tfidf_cosine(text_a, text_b)
    }
}

/// Count vectorizer terms: lowercased word runs of at least two characters.
pub fn term_counts(text: &str) -> BTreeMap<String, usize> {
    let lower = text.to_lowercase();
    let mut counts = BTreeMap::new();
    for word in words(&lower).filter(|w| w.chars().count() >= 2) {
        *counts.entry(word.to_string()).or_insert(0) += 1;
    }
    counts
}

/// Smoothed IDF for a term appearing in `df` of the two documents.
pub fn pair_idf(df: usize) -> f64 {
    ((1.0 + PAIR_CORPUS_SIZE) / (1.0 + df as f64)).ln() + 1.0
}

/// TF-IDF weight vectors for a pair of texts over their shared vocabulary.
///
/// Both vectors are indexed by the same sorted vocabulary.
pub fn pair_vectors(text_a: &str, text_b: &str) -> (Vec<String>, Vec<f64>, Vec<f64>) {
    let counts_a = term_counts(text_a);
    let counts_b = term_counts(text_b);

    let vocabulary: BTreeSet<&String> = counts_a.keys().chain(counts_b.keys()).collect();

    let mut terms = Vec::with_capacity(vocabulary.len());
    let mut vec_a = Vec::with_capacity(vocabulary.len());
    let mut vec_b = Vec::with_capacity(vocabulary.len());

    for term in vocabulary {
        let tf_a = counts_a.get(term).copied().unwrap_or(0);
        let tf_b = counts_b.get(term).copied().unwrap_or(0);
        let df = usize::from(tf_a > 0) + usize::from(tf_b > 0);
        let idf = pair_idf(df);

        terms.push(term.clone());
        vec_a.push(tf_a as f64 * idf);
        vec_b.push(tf_b as f64 * idf);
    }

    (terms, vec_a, vec_b)
}

/// Cosine similarity of the TF-IDF vectors of two texts.
///
/// Returns exactly 0.0 when either text has no terms: the zero vector has
/// no direction, so the pair is treated as unrelated.
pub fn tfidf_cosine(text_a: &str, text_b: &str) -> f64 {
    let (_terms, vec_a, vec_b) = pair_vectors(text_a, text_b);

    let norm_sq_a: f64 = vec_a.iter().map(|x| x * x).sum();
    let norm_sq_b: f64 = vec_b.iter().map(|x| x * x).sum();

    if norm_sq_a == 0.0 || norm_sq_b == 0.0 {
        debug!(
            empty_a = norm_sq_a == 0.0,
            empty_b = norm_sq_b == 0.0,
            "Degenerate vector, similarity defaults to 0.0"
        );
        return 0.0;
    }

    let dot: f64 = vec_a.iter().zip(vec_b.iter()).map(|(a, b)| a * b).sum();

    // sqrt(a * b) keeps self-similarity at exactly 1.0
    (dot / (norm_sq_a * norm_sq_b).sqrt()).clamp(0.0, 1.0)
}
