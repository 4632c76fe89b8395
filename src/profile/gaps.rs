use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::certification::is_unexpired;
use crate::{Candidate, Course, Job};

const MARKET_SKILL_POOL: usize = 10;
const SUGGESTED_COURSE_LIMIT: usize = 3;
const KNOWLEDGE_GAP_LIMIT: usize = 5;

/// Fallback relevance when no market jobs are supplied.
const DEFAULT_SKILL_RELEVANCE: f64 = 70.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Severity {
    Critical,
    Important,
    NiceToHave,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::Important => "important",
            Severity::NiceToHave => "nice-to-have",
        }
    }
}

/// A market-demanded skill the candidate lacks, with courses that cover it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeGap {
    pub area: String,
    pub description: String,
    pub severity: Severity,
    pub suggested_courses: Vec<String>,
    pub estimated_time_to_fill: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReadinessLevel {
    #[serde(rename = "altamente competitivo")]
    HighlyCompetitive,
    #[serde(rename = "pronto")]
    Ready,
    #[serde(rename = "preparação")]
    Preparing,
    #[serde(rename = "não pronto")]
    NotReady,
}

impl ReadinessLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadinessLevel::HighlyCompetitive => "altamente competitivo",
            ReadinessLevel::Ready => "pronto",
            ReadinessLevel::Preparing => "preparação",
            ReadinessLevel::NotReady => "não pronto",
        }
    }

    fn from_score(score: u8) -> Self {
        if score >= 80 {
            ReadinessLevel::HighlyCompetitive
        } else if score >= 60 {
            ReadinessLevel::Ready
        } else if score >= 40 {
            ReadinessLevel::Preparing
        } else {
            ReadinessLevel::NotReady
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReadinessFactors {
    pub profile_quality: f64,
    pub skill_relevance: f64,
    pub certification_status: f64,
    pub experience_level: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketReadiness {
    pub score: u8,
    pub level: ReadinessLevel,
    pub factors: ReadinessFactors,
    pub recommendations: Vec<String>,
}

/// Demand count per lowercase skill across required and desired lists.
/// Insertion order is preserved so that equal demands rank deterministically.
fn market_skill_demand(market_jobs: &[Job]) -> Vec<(String, u32)> {
    let mut demand: Vec<(String, u32)> = Vec::new();
    for job in market_jobs {
        for skill in job.required_skills.iter().chain(&job.desired_skills) {
            let skill_lower = skill.to_lowercase();
            match demand.iter_mut().find(|(s, _)| *s == skill_lower) {
                Some((_, count)) => *count += 1,
                None => demand.push((skill_lower, 1)),
            }
        }
    }
    demand
}

/// Top market skills the candidate does not cover, each backed by at least
/// one catalog course. Capped at five gaps, plus a certification gap when
/// the candidate holds none.
pub fn identify_knowledge_gaps(
    candidate: &Candidate,
    all_courses: &[Course],
    market_jobs: &[Job],
) -> Vec<KnowledgeGap> {
    let candidate_skills: Vec<String> =
        candidate.skills.iter().map(|s| s.to_lowercase()).collect();

    let mut demand = market_skill_demand(market_jobs);
    demand.sort_by(|a, b| b.1.cmp(&a.1));
    demand.truncate(MARKET_SKILL_POOL);

    let mut gaps = Vec::new();
    for (skill, count) in &demand {
        let covered = candidate_skills
            .iter()
            .any(|cs| cs.contains(skill.as_str()) || skill.contains(cs.as_str()));
        if covered {
            continue;
        }

        let related_courses: Vec<String> = all_courses
            .iter()
            .filter(|course| {
                course.title.to_lowercase().contains(skill.as_str())
                    || course
                        .tags
                        .iter()
                        .any(|tag| tag.to_lowercase().contains(skill.as_str()))
            })
            .map(|course| course.title.clone())
            .take(SUGGESTED_COURSE_LIMIT)
            .collect();

        if related_courses.is_empty() {
            continue;
        }

        gaps.push(KnowledgeGap {
            area: skill.clone(),
            description: format!("Habilidade muito demandada no mercado ({count} vagas)"),
            severity: if *count > 5 {
                Severity::Critical
            } else if *count > 2 {
                Severity::Important
            } else {
                Severity::NiceToHave
            },
            estimated_time_to_fill: estimate_time_to_fill(related_courses.len()),
            suggested_courses: related_courses,
        });
    }

    if candidate.certifications.is_empty() {
        gaps.push(KnowledgeGap {
            area: "Certificações Profissionais".to_string(),
            description: "Sem certificações que validem suas competências".to_string(),
            severity: Severity::Important,
            suggested_courses: all_courses
                .iter()
                .filter(|c| c.category == candidate.main_area)
                .take(SUGGESTED_COURSE_LIMIT)
                .map(|c| c.title.clone())
                .collect(),
            estimated_time_to_fill: "1-2 meses".to_string(),
        });
    }

    gaps.truncate(KNOWLEDGE_GAP_LIMIT);
    gaps
}

pub(crate) fn estimate_time_to_fill(courses_needed: usize) -> String {
    if courses_needed <= 1 {
        "2-4 semanas".to_string()
    } else if courses_needed <= 2 {
        "1-2 meses".to_string()
    } else {
        "2-3 meses".to_string()
    }
}

/// Share of the candidate's skills that appear in market demand.
fn skill_relevance(candidate: &Candidate, market_jobs: &[Job]) -> f64 {
    if market_jobs.is_empty() {
        return DEFAULT_SKILL_RELEVANCE;
    }

    let market_skills: Vec<String> = market_jobs
        .iter()
        .flat_map(|job| job.required_skills.iter().chain(&job.desired_skills))
        .map(|s| s.to_lowercase())
        .collect();

    let matching = candidate
        .skills
        .iter()
        .map(|s| s.to_lowercase())
        .filter(|cs| {
            market_skills
                .iter()
                .any(|ms| cs.contains(ms.as_str()) || ms.contains(cs.as_str()))
        })
        .count() as f64;

    (matching / (candidate.skills.len().max(1) as f64) * 100.0).min(100.0)
}

pub fn assess_market_readiness(
    candidate: &Candidate,
    market_jobs: &[Job],
    today: NaiveDate,
) -> MarketReadiness {
    let valid_certs = candidate
        .certifications
        .iter()
        .filter(|cert| is_unexpired(cert, today))
        .count() as f64;

    let factors = ReadinessFactors {
        profile_quality: candidate.profile_completeness as f64,
        skill_relevance: skill_relevance(candidate, market_jobs),
        certification_status: (valid_certs / 3.0 * 100.0).min(100.0),
        experience_level: (candidate.experience.len() as f64 / 5.0 * 100.0).min(100.0),
    };

    let score = (factors.profile_quality * 0.25
        + factors.skill_relevance * 0.30
        + factors.certification_status * 0.25
        + factors.experience_level * 0.20)
        .round() as u8;

    MarketReadiness {
        score,
        level: ReadinessLevel::from_score(score),
        recommendations: readiness_recommendations(score, &factors),
        factors,
    }
}

fn readiness_recommendations(score: u8, factors: &ReadinessFactors) -> Vec<String> {
    let mut recommendations = Vec::new();

    if factors.profile_quality < 80.0 {
        recommendations.push("Complete seu perfil para aumentar sua visibilidade".to_string());
    }
    if factors.skill_relevance < 70.0 {
        recommendations.push("Adicione habilidades mais demandadas pelo mercado".to_string());
    }
    if factors.certification_status < 60.0 {
        recommendations
            .push("Obtenha certificações para validar suas competências".to_string());
    }
    if factors.experience_level < 60.0 {
        recommendations
            .push("Ganhe mais experiência através de projetos e estágios".to_string());
    }

    if score >= 80 {
        recommendations
            .push("Você está pronto! Candidate-se às melhores oportunidades".to_string());
    } else if score >= 60 {
        recommendations
            .push("Continue se desenvolvendo para se destacar ainda mais".to_string());
    } else {
        recommendations
            .push("Foque em desenvolvimento contínuo antes de se candidatar".to_string());
    }

    recommendations
}
