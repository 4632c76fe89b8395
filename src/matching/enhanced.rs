use std::collections::HashMap;
use std::sync::LazyLock;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::certification::is_unexpired;
use crate::text::contains_either;
use crate::{Candidate, Job};

use super::weights::{ENHANCED_WEIGHTS, SUCCESS_WEIGHTS};

/// Related-term table for the enhanced skill analysis. A candidate skill that
/// only matches through this table earns half credit against a required
/// skill. Keys are lowercase as typed by recruiters (accents included).
static RELATED_SKILLS: LazyLock<HashMap<&'static str, &'static [&'static str]>> =
    LazyLock::new(|| {
        let entries: &[(&str, &[&str])] = &[
            (
                "empilhadeira",
                &["reach stacker", "operação", "logística", "armazenagem"],
            ),
            ("excel", &["planilhas", "office", "dados", "relatórios"]),
            ("comunicação", &["atendimento", "relacionamento", "equipe"]),
            ("liderança", &["gestão", "coordenação", "supervisão"]),
            ("elétrica", &["manutenção", "instalações", "circuitos"]),
        ];
        entries.iter().copied().collect()
    });

/// Per-signal scores (each 0-100) feeding the enhanced match.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchInsights {
    pub skill_alignment: f64,
    pub experience_match: f64,
    pub certification_match: f64,
    pub location_score: f64,
    pub cultural_fit: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::Low => "low",
        }
    }

    fn from_score(score: u8) -> Self {
        if score >= 80 {
            Confidence::High
        } else if score >= 60 {
            Confidence::Medium
        } else {
            Confidence::Low
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnhancedMatchResult {
    /// 0-100, rounded weighted blend of the five insights.
    pub score: u8,
    pub confidence: Confidence,
    pub strengths: Vec<String>,
    pub gaps: Vec<String>,
    pub recommendations: Vec<String>,
    /// 0-100 estimated probability of a successful application.
    pub success_prediction: u8,
    pub insights: MatchInsights,
}

/// Enhanced candidate-job match with five weighted signals, per-signal
/// explanations and a success-probability estimate.
pub fn calculate_enhanced_match(
    candidate: &Candidate,
    job: &Job,
    today: NaiveDate,
) -> EnhancedMatchResult {
    let insights = MatchInsights {
        skill_alignment: analyze_skill_alignment(candidate, job),
        experience_match: analyze_experience_match(candidate, job),
        certification_match: analyze_certification_match(candidate, job, today),
        location_score: analyze_location_compatibility(candidate, job),
        cultural_fit: analyze_cultural_fit(candidate, job),
    };

    let w = ENHANCED_WEIGHTS;
    let score = (insights.skill_alignment * w.skill_alignment
        + insights.experience_match * w.experience_match
        + insights.certification_match * w.certification_match
        + insights.location_score * w.location_score
        + insights.cultural_fit * w.cultural_fit)
        .round() as u8;

    let strengths = identify_strengths(candidate, &insights);
    let (gaps, recommendations) = identify_gaps(candidate, &insights);
    let success_prediction = predict_success_rate(&insights, candidate);

    tracing::debug!(
        candidate_id = %candidate.id,
        job_id = %job.id,
        score,
        success_prediction,
        "enhanced match scored"
    );

    EnhancedMatchResult {
        score,
        confidence: Confidence::from_score(score),
        strengths,
        gaps,
        recommendations,
        success_prediction,
        insights,
    }
}

/// Required skills give up to 70 points (half credit for related-term-only
/// matches), desired skills the remaining 30. Empty requirement lists award
/// their full share.
fn analyze_skill_alignment(candidate: &Candidate, job: &Job) -> f64 {
    let candidate_skills: Vec<String> = candidate.skills.iter().map(|s| s.to_lowercase()).collect();

    let mut matched_required = 0.0;
    for required in &job.required_skills {
        let req_lower = required.to_lowercase();
        let exact = candidate_skills
            .iter()
            .any(|cs| cs.contains(&req_lower) || req_lower.contains(cs.as_str()));

        if exact {
            matched_required += 1.0;
        } else if let Some(related) = RELATED_SKILLS.get(req_lower.as_str()) {
            let semantic = candidate_skills
                .iter()
                .any(|cs| related.iter().any(|r| cs.contains(r) || r.contains(cs.as_str())));
            if semantic {
                matched_required += 0.5;
            }
        }
    }

    let mut matched_desired = 0usize;
    for desired in &job.desired_skills {
        let des_lower = desired.to_lowercase();
        if candidate_skills
            .iter()
            .any(|cs| cs.contains(&des_lower) || des_lower.contains(cs.as_str()))
        {
            matched_desired += 1;
        }
    }

    let required_score = if job.required_skills.is_empty() {
        70.0
    } else {
        matched_required / job.required_skills.len() as f64 * 70.0
    };
    let desired_score = if job.desired_skills.is_empty() {
        30.0
    } else {
        matched_desired as f64 / job.desired_skills.len() as f64 * 30.0
    };

    (required_score + desired_score).round().min(100.0)
}

/// Experience positions count as a proxy for years; partial credit is linear
/// against the job minimum, guarded against a zero denominator.
fn analyze_experience_match(candidate: &Candidate, job: &Job) -> f64 {
    let positions = candidate.experience.len() as f64;
    let minimum = job.restrictions.min_experience as f64;

    if positions >= minimum {
        return 100.0;
    }

    let ratio = positions / minimum.max(1.0);
    (ratio * 100.0).round().min(100.0)
}

/// Unexpired certification ids matched case-insensitively against the job's
/// required ids. Unlike the baseline scorer, the `verified` flag is not
/// consulted here; the two scorers intentionally disagree on this.
fn analyze_certification_match(candidate: &Candidate, job: &Job, today: NaiveDate) -> f64 {
    if job.required_certifications.is_empty() {
        return 100.0;
    }

    let valid_ids: Vec<String> = candidate
        .certifications
        .iter()
        .filter(|cert| is_unexpired(cert, today))
        .map(|cert| cert.certification_id.to_lowercase())
        .collect();

    let matched = job
        .required_certifications
        .iter()
        .filter(|req| valid_ids.contains(&req.to_lowercase()))
        .count();

    (matched as f64 / job.required_certifications.len() as f64 * 100.0).round()
}

/// 100 on a direct city/state containment match, 70 when both sides sit in
/// the reference state (CE), 40 otherwise.
fn analyze_location_compatibility(candidate: &Candidate, job: &Job) -> f64 {
    let candidate_location = format!(
        "{}, {}",
        candidate.location.city, candidate.location.state
    )
    .to_lowercase();
    let job_location = job.location.to_lowercase();

    if candidate_location.contains(&job_location) || job_location.contains(&candidate_location) {
        return 100.0;
    }

    if candidate.location.state == "CE" && job_location.contains("ce") {
        return 70.0;
    }

    40.0
}

/// Base 50, +30 for a main-area/category relation, +20 for a PCD candidate
/// on a PCD-exclusive opening, capped at 100.
fn analyze_cultural_fit(candidate: &Candidate, job: &Job) -> f64 {
    let mut score: f64 = 50.0;

    if contains_either(&candidate.main_area, &job.category) {
        score += 30.0;
    }

    if candidate.is_pcd && job.restrictions.pcd_exclusive {
        score += 20.0;
    }

    score.min(100.0)
}

fn identify_strengths(candidate: &Candidate, insights: &MatchInsights) -> Vec<String> {
    let mut strengths = Vec::new();

    if insights.certification_match >= 80.0 {
        strengths.push("Todas as certificações necessárias em dia".to_string());
    }
    if insights.skill_alignment >= 80.0 {
        strengths.push("Forte alinhamento de habilidades".to_string());
    }
    if insights.experience_match == 100.0 {
        strengths.push("Experiência acima do requisito mínimo".to_string());
    }
    if insights.location_score == 100.0 {
        strengths.push("Localização ideal".to_string());
    }
    if candidate.profile_completeness >= 90 {
        strengths.push("Perfil muito completo".to_string());
    }

    strengths
}

/// Each gap carries its remediation; both lists stay aligned with the same
/// threshold conditions.
fn identify_gaps(candidate: &Candidate, insights: &MatchInsights) -> (Vec<String>, Vec<String>) {
    let mut gaps = Vec::new();
    let mut recommendations = Vec::new();

    if insights.certification_match < 100.0 {
        gaps.push("Faltam algumas certificações obrigatórias".to_string());
        recommendations
            .push("Complete os cursos de certificação necessários na plataforma".to_string());
    }
    if insights.skill_alignment < 70.0 {
        gaps.push("Algumas habilidades importantes estão faltando".to_string());
        recommendations.push("Adicione mais habilidades relevantes ao seu perfil".to_string());
    }
    if insights.experience_match < 100.0 {
        gaps.push("Experiência abaixo do requisito mínimo".to_string());
        recommendations
            .push("Destaque projetos e realizações na sua experiência profissional".to_string());
    }
    if candidate.profile_completeness < 70 {
        gaps.push("Perfil incompleto - adicione mais informações".to_string());
        recommendations
            .push("Complete todas as seções do seu perfil para melhorar o match".to_string());
    }

    if recommendations.is_empty() {
        recommendations.push("Seu perfil está ótimo! Candidate-se com confiança".to_string());
    }

    (gaps, recommendations)
}

fn predict_success_rate(insights: &MatchInsights, candidate: &Candidate) -> u8 {
    let w = SUCCESS_WEIGHTS;
    let prediction = insights.skill_alignment * w.skills
        + insights.certification_match * w.certifications
        + insights.experience_match * w.experience
        + candidate.profile_completeness as f64 * w.profile
        + insights.location_score * w.location;

    prediction.round().min(100.0) as u8
}
