use serde::{Deserialize, Serialize};

use crate::{Candidate, Course, CourseProgress, Priority};

use super::score::{recommend_courses, RecommendationScore};

const ROADMAP_POOL_SIZE: usize = 12;
const IMMEDIATE_SLOTS: usize = 3;
const SHORT_TERM_SLOTS: usize = 4;
const LONG_TERM_SLOTS: usize = 5;

/// Recommended courses split into time horizons by priority.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LearningPath {
    pub immediate: Vec<RecommendationScore>,
    pub short_term: Vec<RecommendationScore>,
    pub long_term: Vec<RecommendationScore>,
}

/// Buckets the top recommendations by priority tier. Within a bucket the
/// ranking order is preserved.
pub fn build_learning_path(
    candidate: &Candidate,
    courses: &[Course],
    progress: &[CourseProgress],
) -> LearningPath {
    let pool = recommend_courses(candidate, courses, progress, ROADMAP_POOL_SIZE);

    let mut path = LearningPath::default();
    for rec in pool {
        let (bucket, slots) = match rec.priority {
            Priority::High => (&mut path.immediate, IMMEDIATE_SLOTS),
            Priority::Medium => (&mut path.short_term, SHORT_TERM_SLOTS),
            Priority::Low => (&mut path.long_term, LONG_TERM_SLOTS),
        };
        if bucket.len() < slots {
            bucket.push(rec);
        }
    }

    path
}
