//! Rule-based lemmatiser for English plural nouns.
//!
//! Handles a short table of irregular plurals plus the regular suffix rules.
//! Anything it does not recognise is returned unchanged.

const IRREGULAR: &[(&str, &str)] = &[
    ("children", "child"),
    ("feet", "foot"),
    ("geese", "goose"),
    ("men", "man"),
    ("mice", "mouse"),
    ("people", "person"),
    ("teeth", "tooth"),
    ("women", "woman"),
];

/// Words ending in `s` that are already singular.
const SINGULAR_ENDINGS: &[&str] = &["ss", "us", "is", "ous"];

/// Singular form of a lowercased word.
pub fn lemmatize(word: &str) -> String {
    if let Some((_, lemma)) = IRREGULAR.iter().find(|(plural, _)| *plural == word) {
        return (*lemma).to_string();
    }
    if word.chars().count() <= 3 || !word.ends_with('s') {
        return word.to_string();
    }
    if SINGULAR_ENDINGS.iter().any(|end| word.ends_with(end)) {
        return word.to_string();
    }
    if let Some(stem) = word.strip_suffix("ies") {
        return format!("{stem}y");
    }
    for suffix in ["sses", "ches", "shes", "xes", "zes"] {
        if word.ends_with(suffix) {
            return word[..word.len() - 2].to_string();
        }
    }
    word[..word.len() - 1].to_string()
}
