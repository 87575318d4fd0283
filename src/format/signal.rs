//! Signal-word emphasis.
//!
//! Directive vocabulary gets wrapped in `<strong>` so warnings and
//! requirements stand out in rendered prose. Matching is whole-word and
//! case-sensitive. Articles also quote query-language keywords and domain
//! acronyms in uppercase; the ones that collide with signal spellings are
//! excluded so `OR` in a predicate discussion never renders as a warning.
//!
//! Both vocabularies are static tables, not derived from input.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Directive terms highlighted in article bodies. Longer spellings come
/// before their prefixes so `NOTE` is not matched as `NOT`.
pub const SIGNAL_WORDS: &[&str] = &[
    "MUST", "SHOULD", "NEVER", "ALWAYS", "WARNING", "IMPORTANT", "CAUTION", "REQUIRED", "AVOID",
    "NOTE", "NOT", "OR", "ALL",
];

/// Uppercase tokens that are operators or acronyms in this catalog's domain
/// and therefore suppress signal emphasis despite a spelling match.
pub const ACRONYM_EXCEPTIONS: &[&str] = &[
    "OR", "AND", "NOT", "XOR", "ALL", "ANY", "IN", "IS", "AS", "ON", "GET", "SET",
];

static SIGNAL: Lazy<Regex> = Lazy::new(|| {
    let alternation = SIGNAL_WORDS.join("|");
    Regex::new(&format!(r"\b({alternation})\b")).unwrap()
});

/// Wrap whole-word signal terms in `<strong>`, skipping acronym collisions.
pub fn highlight_signal_words(text: &str) -> String {
    SIGNAL
        .replace_all(text, |caps: &Captures| {
            let word = &caps[1];
            if ACRONYM_EXCEPTIONS.contains(&word) {
                word.to_string()
            } else {
                format!("<strong>{word}</strong>")
            }
        })
        .into_owned()
}
