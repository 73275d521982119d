// English stop-word set.
//
// Loaded once from the `stop-words` crate and shared read-only for the rest
// of the process. The crate's `nltk` feature selects the short NLTK list;
// its default ISO list also drops content words like "world" and "year".

use std::collections::HashSet;
use std::sync::OnceLock;

use stop_words::{get, LANGUAGE};

static ENGLISH: OnceLock<HashSet<String>> = OnceLock::new();

/// The fixed English stop-word set, lowercased.
pub fn english() -> &'static HashSet<String> {
    ENGLISH.get_or_init(|| {
        get(LANGUAGE::English)
            .iter()
            .map(|w| w.to_lowercase())
            .collect()
    })
}

/// Case-insensitive stop-word membership.
pub fn is_stop_word(word: &str) -> bool {
    let set = english();
    if set.contains(word) {
        return true;
    }
    // Fast path above covers already-lowercased tokens
    word.chars().any(char::is_uppercase) && set.contains(&word.to_lowercase())
}
