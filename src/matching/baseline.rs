use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::CertificationCatalog;
use crate::certification::{is_unexpired, is_valid};
use crate::text::contains_either;
use crate::{Candidate, Job};

use super::geo::proximity_points;
use super::weights::{BASELINE_CERTIFICATION_POINTS, BASELINE_SKILLS_POINTS};

/// Compatibility estimate between one candidate and one job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// 0-100, rounded.
    pub score: u8,
    /// Display names of required certifications the candidate lacks.
    /// Ids absent from the catalog are skipped.
    pub missing_certifications: Vec<String>,
    pub missing_skills: Vec<String>,
    /// True when any of the candidate's certifications is past its expiry,
    /// matched against this job or not.
    pub has_expired_certifications: bool,
}

/// Baseline weighted match score: certifications 60, skills 30, proximity 10.
///
/// Pure function of its inputs; `today` is the injected reference date for
/// expiry checks.
pub fn calculate_match_score(
    candidate: &Candidate,
    job: &Job,
    catalog: &CertificationCatalog,
    today: NaiveDate,
) -> MatchResult {
    let mut score = 0.0;
    let mut missing_certifications = Vec::new();
    let mut missing_skills = Vec::new();

    // Only verified, unexpired certifications count toward the match, but an
    // expired record anywhere in the profile raises the flag.
    let has_expired_certifications = candidate
        .certifications
        .iter()
        .any(|cert| !is_unexpired(cert, today));

    let active_cert_ids: Vec<&str> = candidate
        .certifications
        .iter()
        .filter(|cert| is_valid(cert, today))
        .map(|cert| cert.certification_id.as_str())
        .collect();

    if job.required_certifications.is_empty() {
        score += BASELINE_CERTIFICATION_POINTS;
    } else {
        let mut matched = 0usize;
        for required in &job.required_certifications {
            if active_cert_ids.contains(&required.as_str()) {
                matched += 1;
            } else if let Some(info) = catalog.get(required) {
                missing_certifications.push(info.name.clone());
            }
        }
        score += matched as f64 / job.required_certifications.len() as f64
            * BASELINE_CERTIFICATION_POINTS;
    }

    if job.required_skills.is_empty() {
        score += BASELINE_SKILLS_POINTS;
    } else {
        let mut matched = 0usize;
        for required in &job.required_skills {
            if candidate
                .skills
                .iter()
                .any(|skill| contains_either(skill, required))
            {
                matched += 1;
            } else {
                missing_skills.push(required.clone());
            }
        }
        score += matched as f64 / job.required_skills.len() as f64 * BASELINE_SKILLS_POINTS;
    }

    score += proximity_points(candidate.location.coordinates);

    let result = MatchResult {
        score: score.round() as u8,
        missing_certifications,
        missing_skills,
        has_expired_certifications,
    };

    tracing::debug!(
        candidate_id = %candidate.id,
        job_id = %job.id,
        score = result.score,
        missing_certs = result.missing_certifications.len(),
        missing_skills = result.missing_skills.len(),
        "baseline match scored"
    );

    result
}
