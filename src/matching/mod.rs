pub mod baseline;
pub mod enhanced;
pub mod geo;
pub mod weights;

pub use baseline::{calculate_match_score, MatchResult};
pub use enhanced::{calculate_enhanced_match, Confidence, EnhancedMatchResult, MatchInsights};
