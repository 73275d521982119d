// Word tokenizer shared by the normalizer and the vectorizer.
//
// A word is a maximal run of alphanumeric characters or underscores.
// Everything else (whitespace, punctuation, symbols, combining marks) is a
// boundary and is dropped.

/// True for characters that can appear inside a word token.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Split text into word tokens, preserving order. Case is left untouched.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !is_word_char(c))
        .filter(|w| !w.is_empty())
}
