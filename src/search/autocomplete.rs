use std::collections::HashSet;

use crate::{Course, Job};

use super::normalize::normalize_text;
use super::synonyms::get_synonyms;

const MIN_PREFIX_CHARS: usize = 2;
const AUTOCOMPLETE_LIMIT: usize = 8;
const RELATED_TERMS_LIMIT: usize = 5;

const STOP_WORDS: &[&str] = &[
    "o", "a", "os", "as", "de", "da", "do", "das", "dos", "em", "no", "na", "nos", "nas", "para",
    "por", "com", "um", "uma", "uns", "umas", "e", "ou", "que", "qual",
];

fn push_unique(suggestions: &mut Vec<String>, seen: &mut HashSet<String>, value: String) {
    if seen.insert(value.clone()) {
        suggestions.push(value);
    }
}

/// Completion suggestions for a partial query. Title words must extend the
/// typed prefix; tags and skills match on substring and keep their original
/// casing. First-seen order, capped at 8.
pub fn autocomplete(partial: &str, all_courses: &[Course], all_jobs: &[Job]) -> Vec<String> {
    let normalized = normalize_text(partial);
    if normalized.chars().count() < MIN_PREFIX_CHARS {
        return Vec::new();
    }

    let mut suggestions = Vec::new();
    let mut seen = HashSet::new();

    for course in all_courses {
        for word in normalize_text(&course.title).split_whitespace() {
            if word.starts_with(&normalized) && word.len() > normalized.len() {
                push_unique(&mut suggestions, &mut seen, word.to_string());
            }
        }
        for tag in &course.tags {
            if normalize_text(tag).contains(&normalized) {
                push_unique(&mut suggestions, &mut seen, tag.clone());
            }
        }
    }

    for job in all_jobs {
        for word in normalize_text(&job.title).split_whitespace() {
            if word.starts_with(&normalized) && word.len() > normalized.len() {
                push_unique(&mut suggestions, &mut seen, word.to_string());
            }
        }
        for skill in job.required_skills.iter().chain(&job.desired_skills) {
            if normalize_text(skill).contains(&normalized) {
                push_unique(&mut suggestions, &mut seen, skill.clone());
            }
        }
    }

    suggestions.truncate(AUTOCOMPLETE_LIMIT);
    suggestions
}

/// Normalized query words with Portuguese stop words and short tokens
/// removed.
pub fn extract_keywords(query: &str) -> Vec<String> {
    normalize_text(query)
        .split_whitespace()
        .filter(|w| w.chars().count() > 2 && !STOP_WORDS.contains(w))
        .map(str::to_string)
        .collect()
}

/// Up to five related terms pulled from the synonym table for the query's
/// keywords.
pub fn suggest_related_terms(query: &str) -> Vec<String> {
    let mut related = Vec::new();
    let mut seen = HashSet::new();

    for keyword in extract_keywords(query) {
        for synonym in get_synonyms(&keyword) {
            push_unique(&mut related, &mut seen, synonym);
        }
    }

    related.truncate(RELATED_TERMS_LIMIT);
    related
}
