use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

static PUNCTUATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").expect("static regex"));

/// Canonical form for all search text: lowercase, accents stripped via NFD
/// decomposition, punctuation replaced by spaces, whitespace collapsed.
pub fn normalize_text(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped: String = lowered.nfd().filter(|c| !is_combining_mark(*c)).collect();
    let spaced = PUNCTUATION.replace_all(&stripped, " ");
    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}
