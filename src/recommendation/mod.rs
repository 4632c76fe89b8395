pub mod areas;
pub mod roadmap;
pub mod score;

pub use roadmap::{build_learning_path, LearningPath};
pub use score::{recommend_courses, score_course, RecommendationScore, DEFAULT_RECOMMENDATION_LIMIT};
