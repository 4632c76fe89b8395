pub mod breakdown;
pub mod gaps;
pub mod insights;
pub mod roadmap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{Candidate, Course, CourseProgress, Job};

pub use breakdown::{overall_score, score_breakdown, ScoreBreakdown};
pub use gaps::{
    assess_market_readiness, identify_knowledge_gaps, KnowledgeGap, MarketReadiness,
    ReadinessLevel, Severity,
};
pub use insights::{
    generate_suggestions, identify_strengths, identify_weaknesses, ProfileSuggestion,
    SuggestionCategory,
};
pub use roadmap::{build_development_roadmap, CareerLevel, DevelopmentRoadmap, Milestone};

/// Full profile analysis bundle returned by [`analyze_profile`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileAnalysis {
    pub overall_score: u8,
    pub score_breakdown: ScoreBreakdown,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub suggestions: Vec<ProfileSuggestion>,
    pub knowledge_gaps: Vec<KnowledgeGap>,
    pub development_roadmap: DevelopmentRoadmap,
    pub market_readiness: MarketReadiness,
}

/// Runs every profile analyzer over one candidate. `market_jobs` may be
/// empty; the skill-relevance factor then falls back to a neutral default.
pub fn analyze_profile(
    candidate: &Candidate,
    all_courses: &[Course],
    progress: &[CourseProgress],
    market_jobs: &[Job],
    today: NaiveDate,
) -> ProfileAnalysis {
    let score_breakdown = score_breakdown(candidate, progress, today);
    let overall = overall_score(&score_breakdown);

    let weaknesses = identify_weaknesses(candidate, progress, today);
    let knowledge_gaps = identify_knowledge_gaps(candidate, all_courses, market_jobs);

    tracing::debug!(
        candidate_id = %candidate.id,
        overall,
        gaps = knowledge_gaps.len(),
        "profile analyzed"
    );

    ProfileAnalysis {
        overall_score: overall,
        strengths: identify_strengths(candidate, progress, today),
        suggestions: generate_suggestions(candidate, progress),
        development_roadmap: build_development_roadmap(
            candidate,
            progress,
            &knowledge_gaps,
            today,
        ),
        market_readiness: assess_market_readiness(candidate, market_jobs, today),
        score_breakdown,
        weaknesses,
        knowledge_gaps,
    }
}
