// Unit tests for text preparation.
//
// Tests isolated pure functions: normalize idempotence and edge cases,
// lemmatizer behavior through the normalizer, and sentence splitting.

use plagcheck::text::lemma::lemmatize;
use plagcheck::text::stopwords::is_stop_word;
use plagcheck::text::{normalize, split_sentences};

// ============================================================
// normalize: idempotence
// ============================================================

#[test]
fn normalize_is_idempotent_on_prose() {
    let samples = [
        "The cat sat on the mat.",
        "Plagiarism detection compares documents; copied sentences are flagged!",
        "Wolves, mice, geese and children: irregular plurals everywhere.",
        "Glasses of water were placed on the tables beside the boxes.",
        "Café owners' menus list crêpes, croissants & espresso shots.",
        "",
        "   ...   ",
    ];
    for text in samples {
        let once = normalize(text);
        let twice = normalize(&once);
        assert_eq!(twice, once, "normalize not idempotent for {text:?}");
    }
}

#[test]
fn normalize_output_has_no_stop_words() {
    let out = normalize("This is the story of how the children found the boxes under the stairs.");
    for token in out.split(' ').filter(|t| !t.is_empty()) {
        assert!(!is_stop_word(token), "stop word {token:?} survived");
    }
}

// ============================================================
// normalize: edge cases
// ============================================================

#[test]
fn normalize_only_stop_words_is_empty() {
    assert_eq!(normalize("The and of the is it."), "");
}

#[test]
fn normalize_only_punctuation_is_empty() {
    assert_eq!(normalize("... !!! ??? ---"), "");
}

#[test]
fn normalize_single_spaces_between_tokens() {
    let out = normalize("  Cats\n\n\tdogs ,, horses  ");
    assert_eq!(out, "cat dog horse");
}

#[test]
fn normalize_lowercases_before_stop_word_check() {
    assert_eq!(normalize("THE CAT"), "cat");
}

#[test]
fn normalize_leaves_verb_forms_alone() {
    // Noun-mode lemmatizing: "swimming" is not reduced to "swim"
    assert_eq!(normalize("swimming"), "swimming");
}

// ============================================================
// lemmatize
// ============================================================

#[test]
fn lemmatize_plural_and_singular_agree() {
    assert_eq!(lemmatize("apples"), lemmatize("apple"));
    assert_eq!(lemmatize("churches"), lemmatize("church"));
    assert_eq!(lemmatize("geese"), "goose");
    assert_eq!(lemmatize("movies"), lemmatize("movie"));
    assert_eq!(lemmatize("buses"), lemmatize("bus"));
}

// ============================================================
// split_sentences
// ============================================================

#[test]
fn split_keeps_original_text_of_each_sentence() {
    let text = "First sentence here.  Second   one follows!\nThird? Yes.";
    assert_eq!(
        split_sentences(text),
        vec![
            "First sentence here.",
            "Second   one follows!",
            "Third?",
            "Yes."
        ]
    );
}

#[test]
fn split_handles_ellipsis() {
    assert_eq!(
        split_sentences("Wait... Then go."),
        vec!["Wait...", "Then go."]
    );
}

#[test]
fn split_trailing_fragment_without_terminator() {
    assert_eq!(
        split_sentences("Done. and then"),
        vec!["Done. and then"]
    );
    assert_eq!(
        split_sentences("Done. Then nothing"),
        vec!["Done.", "Then nothing"]
    );
}
