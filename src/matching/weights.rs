/// Baseline scorer weights. These are absolute point budgets, not fractions:
/// a full certification match is worth 60 of the final 100 points.
pub const BASELINE_CERTIFICATION_POINTS: f64 = 60.0;
pub const BASELINE_SKILLS_POINTS: f64 = 30.0;
pub const BASELINE_GEO_POINTS: f64 = 10.0;

/// Enhanced scorer weights (fractions, sum to 1.0).
/// Certification coverage dominates because port-complex jobs are gated by
/// regulatory NR certifications before anything else.
pub const ENHANCED_WEIGHTS: InsightWeights = InsightWeights {
    skill_alignment: 0.25,
    experience_match: 0.20,
    certification_match: 0.30,
    location_score: 0.15,
    cultural_fit: 0.10,
};

/// Success-prediction blend (fractions, sum to 1.0). Unlike the match score
/// it folds in profile completeness, the strongest observed predictor of a
/// candidate actually following through on an application.
pub const SUCCESS_WEIGHTS: SuccessWeights = SuccessWeights {
    skills: 0.30,
    certifications: 0.25,
    experience: 0.20,
    profile: 0.15,
    location: 0.10,
};

#[derive(Debug, Clone, Copy)]
pub struct InsightWeights {
    pub skill_alignment: f64,
    pub experience_match: f64,
    pub certification_match: f64,
    pub location_score: f64,
    pub cultural_fit: f64,
}

impl InsightWeights {
    pub fn sum(&self) -> f64 {
        self.skill_alignment
            + self.experience_match
            + self.certification_match
            + self.location_score
            + self.cultural_fit
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SuccessWeights {
    pub skills: f64,
    pub certifications: f64,
    pub experience: f64,
    pub profile: f64,
    pub location: f64,
}

impl SuccessWeights {
    pub fn sum(&self) -> f64 {
        self.skills + self.certifications + self.experience + self.profile + self.location
    }
}
