use serde::{Deserialize, Serialize};

use crate::{Course, Job};

use super::fuzzy::fuzzy_match;
use super::normalize::normalize_text;
use super::synonyms::get_synonyms;

const DEFAULT_MIN_SCORE: f64 = 20.0;
const DEFAULT_MAX_RESULTS: usize = 20;

const EXACT_CREDIT: f64 = 1.0;
const FUZZY_CREDIT: f64 = 0.8;
const SYNONYM_CREDIT: f64 = 0.7;

/// Minimum relevance override, `PE_SEARCH_MIN_SCORE` as a float 0-100.
fn env_min_score() -> Option<f64> {
    std::env::var("PE_SEARCH_MIN_SCORE")
        .ok()
        .and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| (0.0..=100.0).contains(v))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SemanticSearchOptions {
    pub fuzzy_match: bool,
    pub synonyms: bool,
    pub min_score: f64,
    pub max_results: usize,
}

impl Default for SemanticSearchOptions {
    fn default() -> Self {
        Self {
            fuzzy_match: true,
            synonyms: true,
            min_score: env_min_score().unwrap_or(DEFAULT_MIN_SCORE),
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

/// One ranked hit. `matched_fields` names the fields that contributed, in
/// field-weight order; `highlights` carries the title when it matched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult<T> {
    pub item: T,
    pub relevance_score: u8,
    pub matched_fields: Vec<String>,
    pub highlights: Vec<String>,
}

/// Per-term credit against one normalized text field: full for a substring
/// hit, 0.8 for a fuzzy hit, 0.7 when a synonym of the term is present.
fn calculate_field_score(
    field_value: &str,
    query_terms: &[String],
    fuzzy: bool,
    synonyms: bool,
) -> f64 {
    let normalized = normalize_text(field_value);
    let mut matched = 0.0;

    for term in query_terms {
        if normalized.contains(term.as_str()) {
            matched += EXACT_CREDIT;
            continue;
        }
        if fuzzy && fuzzy_match(&normalized, term) {
            matched += FUZZY_CREDIT;
            continue;
        }
        if synonyms && get_synonyms(term).iter().any(|syn| normalized.contains(syn.as_str())) {
            matched += SYNONYM_CREDIT;
        }
    }

    matched / query_terms.len() as f64 * 100.0
}

/// Array variant: a term is credited if any element matches at that tier.
fn calculate_array_field_score(
    field_array: &[String],
    query_terms: &[String],
    fuzzy: bool,
    synonyms: bool,
) -> f64 {
    let normalized: Vec<String> = field_array.iter().map(|item| normalize_text(item)).collect();
    let mut matched = 0.0;

    for term in query_terms {
        if normalized.iter().any(|item| item.contains(term.as_str())) {
            matched += EXACT_CREDIT;
            continue;
        }
        if fuzzy && normalized.iter().any(|item| fuzzy_match(item, term)) {
            matched += FUZZY_CREDIT;
            continue;
        }
        if synonyms {
            let related = get_synonyms(term);
            if normalized
                .iter()
                .any(|item| related.iter().any(|syn| item.contains(syn.as_str())))
            {
                matched += SYNONYM_CREDIT;
            }
        }
    }

    matched / query_terms.len() as f64 * 100.0
}

fn query_terms(query: &str) -> Vec<String> {
    normalize_text(query)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

fn rank<T>(mut results: Vec<SearchResult<T>>, options: &SemanticSearchOptions) -> Vec<SearchResult<T>> {
    results.retain(|r| r.relevance_score as f64 >= options.min_score);
    results.sort_by(|a, b| b.relevance_score.cmp(&a.relevance_score));
    results.truncate(options.max_results);
    results
}

/// Weighted multi-field course search. Title 40%, description 25%, tags 20%,
/// category 15%, instructor 10% (exact matches only).
pub fn search_courses(
    query: &str,
    all_courses: &[Course],
    options: &SemanticSearchOptions,
) -> Vec<SearchResult<Course>> {
    let terms = query_terms(query);
    if terms.is_empty() {
        return Vec::new();
    }

    let results = all_courses
        .iter()
        .map(|course| {
            let mut score = 0.0;
            let mut matched_fields = Vec::new();
            let mut highlights = Vec::new();

            let title = calculate_field_score(&course.title, &terms, options.fuzzy_match, options.synonyms);
            if title > 0.0 {
                score += title * 0.40;
                matched_fields.push("título".to_string());
                highlights.push(course.title.clone());
            }

            let description =
                calculate_field_score(&course.description, &terms, options.fuzzy_match, options.synonyms);
            if description > 0.0 {
                score += description * 0.25;
                matched_fields.push("descrição".to_string());
            }

            let tags =
                calculate_array_field_score(&course.tags, &terms, options.fuzzy_match, options.synonyms);
            if tags > 0.0 {
                score += tags * 0.20;
                matched_fields.push("tags".to_string());
            }

            let category =
                calculate_field_score(&course.category, &terms, options.fuzzy_match, options.synonyms);
            if category > 0.0 {
                score += category * 0.15;
                matched_fields.push("categoria".to_string());
            }

            let instructor = calculate_field_score(&course.instructor, &terms, false, false);
            if instructor > 0.0 {
                score += instructor * 0.10;
                matched_fields.push("instrutor".to_string());
            }

            SearchResult {
                item: course.clone(),
                relevance_score: score.round().min(100.0) as u8,
                matched_fields,
                highlights,
            }
        })
        .collect();

    let ranked = rank(results, options);
    tracing::debug!(query, hits = ranked.len(), "course search ranked");
    ranked
}

/// Weighted multi-field job search. Title 35%, description 20%, required
/// skills 25%, desired skills 10%, category 10%, location 10% (exact only).
pub fn search_jobs(
    query: &str,
    all_jobs: &[Job],
    options: &SemanticSearchOptions,
) -> Vec<SearchResult<Job>> {
    let terms = query_terms(query);
    if terms.is_empty() {
        return Vec::new();
    }

    let results = all_jobs
        .iter()
        .map(|job| {
            let mut score = 0.0;
            let mut matched_fields = Vec::new();
            let mut highlights = Vec::new();

            let title = calculate_field_score(&job.title, &terms, options.fuzzy_match, options.synonyms);
            if title > 0.0 {
                score += title * 0.35;
                matched_fields.push("título".to_string());
                highlights.push(job.title.clone());
            }

            let description =
                calculate_field_score(&job.description, &terms, options.fuzzy_match, options.synonyms);
            if description > 0.0 {
                score += description * 0.20;
                matched_fields.push("descrição".to_string());
            }

            let required = calculate_array_field_score(
                &job.required_skills,
                &terms,
                options.fuzzy_match,
                options.synonyms,
            );
            if required > 0.0 {
                score += required * 0.25;
                matched_fields.push("habilidades obrigatórias".to_string());
            }

            let desired = calculate_array_field_score(
                &job.desired_skills,
                &terms,
                options.fuzzy_match,
                options.synonyms,
            );
            if desired > 0.0 {
                score += desired * 0.10;
                matched_fields.push("habilidades desejadas".to_string());
            }

            let category =
                calculate_field_score(&job.category, &terms, options.fuzzy_match, options.synonyms);
            if category > 0.0 {
                score += category * 0.10;
                matched_fields.push("categoria".to_string());
            }

            let location = calculate_field_score(&job.location, &terms, false, false);
            if location > 0.0 {
                score += location * 0.10;
                matched_fields.push("localização".to_string());
            }

            SearchResult {
                item: job.clone(),
                relevance_score: score.round().min(100.0) as u8,
                matched_fields,
                highlights,
            }
        })
        .collect();

    let ranked = rank(results, options);
    tracing::debug!(query, hits = ranked.len(), "job search ranked");
    ranked
}
