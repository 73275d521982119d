// Text normalizer: raw text -> canonical token string for vectorizing.
//
// Order matters: lowercase, tokenize, drop stop words, lemmatize, join.

use super::lemma::lemmatize;
use super::stopwords::is_stop_word;
use super::tokenize::words;

/// Normalize a text into space-separated lemmas with stop words removed.
///
/// Returns an empty string for text that is only stop words or punctuation.
/// Deterministic and idempotent.
pub fn normalize(text: &str) -> String {
    let lower = text.to_lowercase();
    words(&lower)
        .filter(|w| !is_stop_word(w))
        .map(lemmatize)
        .collect::<Vec<_>>()
        .join(" ")
}
