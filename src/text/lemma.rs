// Noun lemmatizer.
//
// Reduces plural nouns to their singular base form with a table of
// irregular plurals and a short list of suffix detachment rules. Every word
// is treated as a noun: verb and adjective inflections ("running", "faster")
// pass through unchanged.
//
// The lemmatizer only emits words that it would leave alone on a second
// pass, and never emits a stop word, so normalizing twice is a no-op.

use super::stopwords::is_stop_word;

/// Irregular plurals that no suffix rule recovers.
const IRREGULAR: &[(&str, &str)] = &[
    ("alumni", "alumnus"),
    ("analyses", "analysis"),
    ("bacteria", "bacterium"),
    ("calves", "calf"),
    ("children", "child"),
    ("criteria", "criterion"),
    ("crises", "crisis"),
    ("diagnoses", "diagnosis"),
    ("feet", "foot"),
    ("geese", "goose"),
    ("halves", "half"),
    ("hypotheses", "hypothesis"),
    ("knives", "knife"),
    ("leaves", "leaf"),
    ("lives", "life"),
    ("loaves", "loaf"),
    ("mice", "mouse"),
    ("oxen", "ox"),
    ("people", "person"),
    ("phenomena", "phenomenon"),
    ("shelves", "shelf"),
    ("teeth", "tooth"),
    ("theses", "thesis"),
    ("thieves", "thief"),
    ("wives", "wife"),
    ("wolves", "wolf"),
];

/// Words that look plural but are already base forms.
const INVARIANT: &[&str] = &[
    "abdomen", "amen", "chaos", "hymen", "lens", "lumen", "news", "omen", "regimen", "semen",
    "series", "species", "specimen", "stamen",
];

/// Nouns ending in `-ie`, whose plural would otherwise fall to `ies -> y`.
const IE_BASES: &[&str] = &[
    "auntie", "birdie", "brownie", "calorie", "cookie", "freebie", "genie", "goalie", "hippie",
    "hoodie", "lie", "magpie", "movie", "necktie", "newbie", "pie", "prairie", "rookie",
    "selfie", "smoothie", "sortie", "tie", "veggie", "zombie",
];

/// Nouns ending in `-s` that take `-es` in the plural.
const ES_BASES: &[&str] = &[
    "alias", "atlas", "bias", "bonus", "bus", "campus", "canvas", "census", "chorus", "circus",
    "focus", "gas", "iris", "lens", "status", "virus",
];

/// Suffix rules, tried in order: (suffix, replacement).
const RULES: &[(&str, &str)] = &[
    ("sses", "ss"),
    ("ses", "se"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
    ("s", ""),
];

/// Lemmatize a lowercase word as a noun.
pub fn lemmatize(word: &str) -> String {
    reduce(word).unwrap_or_else(|| word.to_string())
}

/// The base form of `word`, or `None` if the word is already a base form.
fn reduce(word: &str) -> Option<String> {
    if let Some(&(_, base)) = IRREGULAR.iter().find(|(plural, _)| *plural == word) {
        return is_acceptable(base).then(|| base.to_string());
    }
    if let Some(base) = known_base(word) {
        return Some(base.to_string());
    }
    if is_protected(word) {
        return None;
    }

    for &(suffix, replacement) in RULES {
        let Some(stem) = word.strip_suffix(suffix) else {
            continue;
        };
        let candidate = format!("{stem}{replacement}");
        if is_acceptable(&candidate) && reduce(&candidate).is_none() {
            return Some(candidate);
        }
    }
    None
}

/// Plurals of the `-ie` and `-s` nouns listed above.
fn known_base(word: &str) -> Option<&str> {
    word.strip_suffix("es")
        .filter(|stem| ES_BASES.contains(stem))
        .or_else(|| word.strip_suffix('s').filter(|stem| IE_BASES.contains(stem)))
}

/// Words no suffix rule may touch.
fn is_protected(word: &str) -> bool {
    word.chars().count() <= 3
        || word.ends_with("ss")
        || word.ends_with("us")
        || word.ends_with("is")
        || INVARIANT.contains(&word)
        || ES_BASES.contains(&word)
}

fn is_acceptable(candidate: &str) -> bool {
    candidate.chars().count() >= 3 && !is_stop_word(candidate)
}
