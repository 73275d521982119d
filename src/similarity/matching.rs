// Document comparison and sentence attribution.
//
// Whole documents are compared on their normalized text. When that score
// clears the threshold, every input sentence is compared against the
// candidate's sentences, raw and unnormalized, to find which ones were
// likely copied. This is the O(n * m) part of a check.

use serde::Serialize;
use tracing::debug;

use super::traits::SimilarityScorer;
use super::Threshold;
use crate::document::Document;

/// Result of comparing the input document with one candidate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchReport {
    /// Candidate file name
    pub name: String,
    /// Whole-document similarity in [0, 1]
    pub score: f64,
    pub flagged: bool,
    /// Input sentences with at least one matching candidate sentence, in
    /// input order. Always empty when not flagged.
    pub matched_sentences: Vec<String>,
}

impl MatchReport {
    /// Score as a percentage, for display.
    pub fn percent(&self) -> f64 {
        self.score * 100.0
    }
}

/// Compare the input document against one candidate. Pure: no I/O.
pub fn compare_documents(
    input: &Document,
    candidate: &Document,
    threshold: Threshold,
    scorer: &dyn SimilarityScorer,
) -> MatchReport {
    let score = scorer.score(&input.normalized_text, &candidate.normalized_text);
    let flagged = threshold.is_met_by(score);

    debug!(
        candidate = candidate.name.as_str(),
        score,
        flagged,
        "Document-level comparison"
    );

    let matched_sentences = if flagged {
        match_sentences(&input.sentences, &candidate.sentences, threshold, scorer)
    } else {
        Vec::new()
    };

    MatchReport {
        name: candidate.name.clone(),
        score,
        flagged,
        matched_sentences,
    }
}

/// Input sentences that match at least one candidate sentence.
///
/// Each input sentence stops scanning at its first match. Which candidate
/// sentence matched is not recorded. Duplicated input sentences are
/// reported once per occurrence.
pub fn match_sentences(
    input_sentences: &[String],
    candidate_sentences: &[String],
    threshold: Threshold,
    scorer: &dyn SimilarityScorer,
) -> Vec<String> {
    input_sentences
        .iter()
        .filter(|sentence| {
            candidate_sentences.iter().any(|other| {
                threshold.is_met_by(scorer.score(sentence.as_str(), other.as_str()))
            })
        })
        .cloned()
        .collect()
}
