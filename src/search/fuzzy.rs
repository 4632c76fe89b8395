/// Positional fuzzy match of a query term against any word of a normalized
/// text. Terms under 4 characters never fuzzy-match; words whose length
/// differs by more than 2 are skipped. Tolerance is 1 mismatched position
/// for terms up to 6 characters, 2 beyond that; only the overlapping prefix
/// is compared.
pub fn fuzzy_match(text: &str, term: &str) -> bool {
    let term_chars: Vec<char> = term.chars().collect();
    if term_chars.len() < 4 {
        return false;
    }

    let max_diff = if term_chars.len() <= 6 { 1 } else { 2 };

    text.split_whitespace().any(|word| {
        let word_chars: Vec<char> = word.chars().collect();
        if word_chars.len().abs_diff(term_chars.len()) > 2 {
            return false;
        }

        let mut differences = 0;
        for (a, b) in word_chars.iter().zip(&term_chars) {
            if a != b {
                differences += 1;
                if differences > max_diff {
                    return false;
                }
            }
        }
        true
    })
}
