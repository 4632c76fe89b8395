use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::certification::is_unexpired;
use crate::{Candidate, CourseProgress, ProgressStatus};

use super::gaps::{KnowledgeGap, Severity};

const ROADMAP_COURSE_LIMIT: usize = 3;
const MONTHS_PER_PHASE: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CareerLevel {
    #[serde(rename = "iniciante")]
    Iniciante,
    #[serde(rename = "intermediário")]
    Intermediario,
    #[serde(rename = "avançado")]
    Avancado,
    #[serde(rename = "especialista")]
    Especialista,
}

impl CareerLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            CareerLevel::Iniciante => "iniciante",
            CareerLevel::Intermediario => "intermediário",
            CareerLevel::Avancado => "avançado",
            CareerLevel::Especialista => "especialista",
        }
    }

    pub fn next_level(&self) -> &'static str {
        match self {
            CareerLevel::Iniciante => "intermediário",
            CareerLevel::Intermediario => "avançado",
            CareerLevel::Avancado => "especialista",
            CareerLevel::Especialista => "líder/mentor",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub phase: u32,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub objectives: Vec<String>,
    pub courses: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DevelopmentRoadmap {
    pub current_level: CareerLevel,
    pub next_level: String,
    pub timeline_months: u32,
    pub milestones: Vec<Milestone>,
    pub recommended_actions: Vec<String>,
}

/// Career level from completed courses (10 pts each), valid certifications
/// (15 pts) and registered positions (10 pts).
pub fn assess_current_level(
    candidate: &Candidate,
    progress: &[CourseProgress],
    today: NaiveDate,
) -> CareerLevel {
    let completed = progress
        .iter()
        .filter(|p| p.status == ProgressStatus::Completed)
        .count();
    let valid_certs = candidate
        .certifications
        .iter()
        .filter(|cert| is_unexpired(cert, today))
        .count();

    let score = completed * 10 + valid_certs * 15 + candidate.experience.len() * 10;

    if score >= 80 {
        CareerLevel::Especialista
    } else if score >= 50 {
        CareerLevel::Avancado
    } else if score >= 25 {
        CareerLevel::Intermediario
    } else {
        CareerLevel::Iniciante
    }
}

/// Phased plan: a fundamentals phase only for beginners, a development phase
/// for everyone, a specialization phase only past beginner level. Each phase
/// pulls suggested courses from gaps of one severity tier.
pub fn build_development_roadmap(
    candidate: &Candidate,
    progress: &[CourseProgress],
    gaps: &[KnowledgeGap],
    today: NaiveDate,
) -> DevelopmentRoadmap {
    let current_level = assess_current_level(candidate, progress, today);
    let mut milestones = Vec::new();

    if current_level == CareerLevel::Iniciante {
        milestones.push(Milestone {
            phase: 1,
            title: "Construir Fundamentos Sólidos".to_string(),
            description: "Estabelecer base de conhecimento e completar perfil".to_string(),
            duration: "0-2 meses".to_string(),
            objectives: vec![
                "Completar perfil para 90%+".to_string(),
                "Adicionar pelo menos 8 habilidades".to_string(),
                "Concluir 2-3 cursos básicos".to_string(),
                "Obter primeira certificação".to_string(),
            ],
            courses: gap_courses(gaps, Severity::Critical),
        });
    }

    milestones.push(Milestone {
        phase: milestones.len() as u32 + 1,
        title: "Desenvolver Competências Avançadas".to_string(),
        description: "Aprofundar conhecimento e ganhar experiência prática".to_string(),
        duration: "2-4 meses".to_string(),
        objectives: vec![
            "Concluir 3-5 cursos intermediários".to_string(),
            "Obter 2-3 certificações relevantes".to_string(),
            "Aplicar conhecimento em projetos práticos".to_string(),
            "Expandir network profissional".to_string(),
        ],
        courses: gap_courses(gaps, Severity::Important),
    });

    if current_level != CareerLevel::Iniciante {
        milestones.push(Milestone {
            phase: milestones.len() as u32 + 1,
            title: "Especializar e Destacar-se".to_string(),
            description: "Tornar-se referência na sua área".to_string(),
            duration: "4-6 meses".to_string(),
            objectives: vec![
                "Concluir cursos avançados".to_string(),
                "Obter certificações de especialista".to_string(),
                "Contribuir com a comunidade".to_string(),
                "Buscar posições de liderança".to_string(),
            ],
            courses: gap_courses(gaps, Severity::NiceToHave),
        });
    }

    DevelopmentRoadmap {
        next_level: current_level.next_level().to_string(),
        timeline_months: milestones.len() as u32 * MONTHS_PER_PHASE,
        recommended_actions: recommended_actions(current_level, gaps),
        current_level,
        milestones,
    }
}

fn gap_courses(gaps: &[KnowledgeGap], severity: Severity) -> Vec<String> {
    gaps.iter()
        .filter(|g| g.severity == severity)
        .flat_map(|g| g.suggested_courses.iter().cloned())
        .take(ROADMAP_COURSE_LIMIT)
        .collect()
}

fn recommended_actions(level: CareerLevel, gaps: &[KnowledgeGap]) -> Vec<String> {
    let mut actions = Vec::new();

    if level == CareerLevel::Iniciante {
        actions.push("Foque em completar seu perfil e obter certificações básicas".to_string());
        actions.push("Matricule-se em cursos fundamentais da sua área".to_string());
    }

    if gaps.iter().any(|g| g.severity == Severity::Critical) {
        actions.push("Priorize cursos que preencham gaps críticos identificados".to_string());
    }

    actions.push("Mantenha-se ativo: complete pelo menos 1 curso por mês".to_string());
    actions.push("Aplique o conhecimento em projetos práticos".to_string());
    actions.push("Atualize regularmente suas habilidades e experiências".to_string());

    actions
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

    fn completed(n: usize) -> Vec<CourseProgress> {
        (0..n)
            .map(|_| CourseProgress {
                status: ProgressStatus::Completed,
                ..CourseProgress::default()
            })
            .collect()
    }

    fn gap(severity: Severity, courses: &[&str]) -> KnowledgeGap {
        KnowledgeGap {
            area: "soldagem".into(),
            description: String::new(),
            severity,
            suggested_courses: courses.iter().map(|c| c.to_string()).collect(),
            estimated_time_to_fill: String::new(),
        }
    }

    #[test]
    fn level_thresholds() {
        let empty = Candidate::default();
        assert_eq!(assess_current_level(&empty, &[], today()), CareerLevel::Iniciante);

        // 2 completed + 1 valid cert = 35 points.
        let candidate = Candidate {
            certifications: vec![cert(100)],
            ..Candidate::default()
        };
        assert_eq!(
            assess_current_level(&candidate, &completed(2), today()),
            CareerLevel::Intermediario
        );

        // 3 completed + 1 cert + 1 position = 55 points.
        let candidate = Candidate {
            certifications: vec![cert(100)],
            experience: vec![Default::default()],
            ..Candidate::default()
        };
        assert_eq!(
            assess_current_level(&candidate, &completed(3), today()),
            CareerLevel::Avancado
        );

        // 4 completed + 2 certs + 1 position = 80 points.
        let candidate = Candidate {
            certifications: vec![cert(100), cert(200)],
            experience: vec![Default::default()],
            ..Candidate::default()
        };
        assert_eq!(
            assess_current_level(&candidate, &completed(4), today()),
            CareerLevel::Especialista
        );
    }

    #[test]
    fn expired_certifications_do_not_raise_the_level() {
        let candidate = Candidate {
            certifications: vec![cert(-10), cert(-20)],
            ..Candidate::default()
        };
        assert_eq!(
            assess_current_level(&candidate, &completed(2), today()),
            CareerLevel::Iniciante
        );
    }

    #[test]
    fn beginner_roadmap_has_two_phases() {
        let gaps = vec![
            gap(Severity::Critical, &["Soldagem Industrial"]),
            gap(Severity::Important, &["Caldeiraria"]),
        ];
        let roadmap = build_development_roadmap(&Candidate::default(), &[], &gaps, today());

        assert_eq!(roadmap.current_level, CareerLevel::Iniciante);
        assert_eq!(roadmap.next_level, "intermediário");
        assert_eq!(roadmap.milestones.len(), 2);
        assert_eq!(roadmap.timeline_months, 4);
        assert_eq!(roadmap.milestones[0].phase, 1);
        assert_eq!(
            roadmap.milestones[0].courses,
            vec!["Soldagem Industrial".to_string()]
        );
        assert_eq!(roadmap.milestones[1].phase, 2);
        assert_eq!(roadmap.milestones[1].courses, vec!["Caldeiraria".to_string()]);
        assert!(roadmap
            .recommended_actions
            .contains(&"Priorize cursos que preencham gaps críticos identificados".to_string()));
    }

    #[test]
    fn advanced_roadmap_skips_fundamentals_and_adds_specialization() {
        let candidate = Candidate {
            certifications: vec![cert(100)],
            experience: vec![Default::default()],
            ..Candidate::default()
        };
        let roadmap =
            build_development_roadmap(&candidate, &completed(3), &[], today());

        assert_eq!(roadmap.current_level, CareerLevel::Avancado);
        assert_eq!(roadmap.next_level, "especialista");
        assert_eq!(roadmap.milestones.len(), 2);
        assert_eq!(roadmap.milestones[0].title, "Desenvolver Competências Avançadas");
        assert_eq!(roadmap.milestones[1].title, "Especializar e Destacar-se");
        assert_eq!(roadmap.recommended_actions.len(), 3);
    }
}
