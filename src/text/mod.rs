// Text preparation: tokenizing, stop words, lemmatizing, sentence splitting.

pub mod lemma;
pub mod normalize;
pub mod sentences;
pub mod stopwords;
pub mod tokenize;

pub use normalize::normalize;
pub use sentences::split_sentences;
