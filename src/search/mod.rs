pub mod autocomplete;
pub mod engine;
pub mod fuzzy;
pub mod intent;
pub mod normalize;
pub mod synonyms;

pub use autocomplete::{autocomplete, extract_keywords, suggest_related_terms};
pub use engine::{search_courses, search_jobs, SearchResult, SemanticSearchOptions};
pub use intent::{analyze_search_intent, IntentAnalysis, SearchIntent};
pub use normalize::normalize_text;
pub use synonyms::get_synonyms;
