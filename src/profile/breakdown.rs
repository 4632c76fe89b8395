use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::certification::is_unexpired;
use crate::{Candidate, CourseProgress, ProgressStatus};

/// Weights blending the five breakdown axes into the overall profile score.
pub struct ProfileWeights {
    pub completeness: f64,
    pub skills: f64,
    pub experience: f64,
    pub certifications: f64,
    pub engagement: f64,
}

pub const PROFILE_WEIGHTS: ProfileWeights = ProfileWeights {
    completeness: 0.25,
    skills: 0.20,
    experience: 0.20,
    certifications: 0.25,
    engagement: 0.10,
};

impl ProfileWeights {
    pub fn sum(&self) -> f64 {
        self.completeness + self.skills + self.experience + self.certifications + self.engagement
    }
}

/// Per-axis profile scores, each 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub completeness: f64,
    pub skills: f64,
    pub experience: f64,
    pub certifications: f64,
    pub engagement: f64,
}

/// Saturation targets: 10 skills, 5 positions, 3 valid certifications,
/// 5 completed courses all map to 100 on their axis.
pub fn score_breakdown(
    candidate: &Candidate,
    progress: &[CourseProgress],
    today: NaiveDate,
) -> ScoreBreakdown {
    let valid_certs = candidate
        .certifications
        .iter()
        .filter(|cert| is_unexpired(cert, today))
        .count() as f64;

    let completed = progress
        .iter()
        .filter(|p| p.status == ProgressStatus::Completed)
        .count() as f64;
    let active = progress.iter().filter(|p| p.status.is_active()).count() as f64;

    ScoreBreakdown {
        completeness: candidate.profile_completeness as f64,
        skills: (candidate.skills.len() as f64 / 10.0 * 100.0).min(100.0),
        experience: (candidate.experience.len() as f64 / 5.0 * 100.0).min(100.0),
        certifications: (valid_certs / 3.0 * 100.0).min(100.0),
        engagement: (completed * 20.0 + active * 10.0).min(100.0),
    }
}

pub fn overall_score(breakdown: &ScoreBreakdown) -> u8 {
    let w = PROFILE_WEIGHTS;
    (breakdown.completeness * w.completeness
        + breakdown.skills * w.skills
        + breakdown.experience * w.experience
        + breakdown.certifications * w.certifications
        + breakdown.engagement * w.engagement)
        .round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CandidateCertification;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn cert(days_to_expiry: i64) -> CandidateCertification {
        CandidateCertification {
            certification_id: "nr-11".into(),
            issue_date: today() - Duration::days(365),
            expiry_date: today() + Duration::days(days_to_expiry),
            verified: true,
        }
    }

    fn progress(status: ProgressStatus) -> CourseProgress {
        CourseProgress {
            status,
            ..CourseProgress::default()
        }
    }

    #[test]
    fn weights_sum_to_one() {
        assert!((PROFILE_WEIGHTS.sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn axes_saturate_at_one_hundred() {
        let candidate = Candidate {
            profile_completeness: 100,
            skills: (0..15).map(|i| format!("skill-{i}")).collect(),
            experience: vec![Default::default(); 8],
            certifications: vec![cert(100); 5],
            ..Candidate::default()
        };
        let progress: Vec<CourseProgress> = (0..8)
            .map(|_| progress(ProgressStatus::Completed))
            .collect();

        let b = score_breakdown(&candidate, &progress, today());
        assert_eq!(b.skills, 100.0);
        assert_eq!(b.experience, 100.0);
        assert_eq!(b.certifications, 100.0);
        assert_eq!(b.engagement, 100.0);
        assert_eq!(overall_score(&b), 100);
    }

    #[test]
    fn expired_certifications_do_not_count() {
        let candidate = Candidate {
            certifications: vec![cert(100), cert(-10), cert(-200)],
            ..Candidate::default()
        };

        let b = score_breakdown(&candidate, &[], today());
        assert!((b.certifications - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn engagement_counts_completed_and_active() {
        let entries = vec![
            progress(ProgressStatus::Completed),
            progress(ProgressStatus::Completed),
            progress(ProgressStatus::InProgress),
            progress(ProgressStatus::Enrolled),
            progress(ProgressStatus::Dropped),
        ];

        let b = score_breakdown(&Candidate::default(), &entries, today());
        // 2 * 20 + 2 * 10, the dropped course contributes nothing.
        assert_eq!(b.engagement, 60.0);
    }

    #[test]
    fn overall_blends_per_weights() {
        let b = ScoreBreakdown {
            completeness: 80.0,
            skills: 50.0,
            experience: 40.0,
            certifications: 100.0,
            engagement: 20.0,
        };
        // 20 + 10 + 8 + 25 + 2 = 65.
        assert_eq!(overall_score(&b), 65);
    }
}
