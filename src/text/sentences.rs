// Rule-based sentence splitter.
//
// A sentence ends at a run of terminal punctuation (optionally followed by
// closing quotes or brackets) that is followed by whitespace or the end of
// the text. Periods after known abbreviations or single-letter initials do
// not end a sentence, and neither does a period followed by a lowercase word.

use std::sync::OnceLock;

use regex_lite::Regex;

/// Abbreviations (without the trailing period) that never end a sentence.
const ABBREVIATIONS: &[&str] = &[
    "approx", "apr", "aug", "co", "corp", "dec", "dept", "dr", "e.g", "etc", "feb", "fig", "i.e",
    "inc", "jan", "jr", "jul", "jun", "ltd", "mar", "mr", "mrs", "ms", "no", "nov", "oct", "p.m",
    "a.m", "prof", "sep", "sept", "sr", "st", "u.s", "vol", "vs",
];

fn boundary_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"[.!?]+["'\)\]”’]*(\s+|$)"#).expect("valid sentence regex")
    })
}

/// Split text into trimmed sentences, in order, keeping terminal punctuation.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for m in boundary_regex().find_iter(text) {
        if !ends_sentence(&text[start..m.start()], &text[m.start()..], &text[m.end()..]) {
            continue;
        }
        push_trimmed(&mut sentences, &text[start..m.end()]);
        start = m.end();
    }
    push_trimmed(&mut sentences, &text[start..]);

    sentences
}

fn push_trimmed(sentences: &mut Vec<String>, piece: &str) {
    let trimmed = piece.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}

/// Decide whether a terminator run actually closes the sentence.
///
/// `before` is the sentence text up to the terminator, `terminator` starts at
/// the terminator, `after` is the text following the boundary whitespace.
fn ends_sentence(before: &str, terminator: &str, after: &str) -> bool {
    if !terminator.starts_with('.') || terminator.starts_with("..") {
        return true;
    }

    let last_word = before
        .rsplit(char::is_whitespace)
        .next()
        .unwrap_or("")
        .trim_start_matches(|c: char| matches!(c, '"' | '\'' | '(' | '[' | '\u{201C}' | '\u{2018}'))
        .to_lowercase();

    if ABBREVIATIONS.contains(&last_word.as_str()) {
        return false;
    }

    // Single-letter initials, e.g. "J. Smith"
    let mut chars = last_word.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if c.is_alphabetic() {
            return false;
        }
    }

    !after.chars().next().is_some_and(char::is_lowercase)
}
