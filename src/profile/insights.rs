use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::certification::is_unexpired;
use crate::{Candidate, CourseProgress, Priority, ProgressStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionCategory {
    Profile,
    Skills,
    Experience,
    Certifications,
    Courses,
}

/// Actionable improvement suggestion shown on the profile dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSuggestion {
    pub category: SuggestionCategory,
    pub priority: Priority,
    pub title: String,
    pub description: String,
    pub action: String,
    /// Estimated effect on profile performance, 0-100.
    pub impact: u8,
}

pub fn identify_strengths(
    candidate: &Candidate,
    progress: &[CourseProgress],
    today: NaiveDate,
) -> Vec<String> {
    let mut strengths = Vec::new();

    if candidate.profile_completeness >= 90 {
        strengths.push("Perfil muito completo e bem estruturado".to_string());
    }

    if candidate.skills.len() >= 8 {
        strengths.push(format!(
            "Conjunto amplo de habilidades ({} skills)",
            candidate.skills.len()
        ));
    }

    let valid_certs = candidate
        .certifications
        .iter()
        .filter(|cert| is_unexpired(cert, today))
        .count();
    if valid_certs >= 3 {
        strengths.push(format!("Bem certificado ({valid_certs} certificações válidas)"));
    }

    if candidate.experience.len() >= 3 {
        strengths.push(format!(
            "Experiência sólida ({} posições)",
            candidate.experience.len()
        ));
    }

    let completed = completed_count(progress);
    if completed >= 5 {
        strengths.push(format!(
            "Alto engajamento em capacitação ({completed} cursos concluídos)"
        ));
    }

    if active_count(progress) >= 2 {
        strengths.push("Ativamente em desenvolvimento contínuo".to_string());
    }

    if candidate.is_pcd {
        strengths.push("Elegível para vagas exclusivas PCD".to_string());
    }

    strengths
}

pub fn identify_weaknesses(
    candidate: &Candidate,
    progress: &[CourseProgress],
    today: NaiveDate,
) -> Vec<String> {
    let mut weaknesses = Vec::new();

    if candidate.profile_completeness < 70 {
        weaknesses.push("Perfil incompleto - faltam informações importantes".to_string());
    }

    if candidate.skills.len() < 5 {
        weaknesses.push("Poucas habilidades cadastradas no perfil".to_string());
    }

    if candidate.certifications.is_empty() {
        weaknesses.push("Sem certificações profissionais".to_string());
    }

    let expired = candidate
        .certifications
        .iter()
        .filter(|cert| !is_unexpired(cert, today))
        .count();
    if expired > 0 {
        weaknesses.push(format!("{expired} certificação(ões) expirada(s)"));
    }

    if candidate.experience.len() < 2 {
        weaknesses.push("Pouca experiência profissional registrada".to_string());
    }

    if completed_count(progress) == 0 {
        weaknesses.push("Nenhum curso concluído ainda".to_string());
    }

    if active_count(progress) == 0 {
        weaknesses.push("Sem cursos em andamento no momento".to_string());
    }

    weaknesses
}

/// Suggestions ordered by priority, then impact, both descending.
pub fn generate_suggestions(
    candidate: &Candidate,
    progress: &[CourseProgress],
) -> Vec<ProfileSuggestion> {
    let mut suggestions = Vec::new();

    if candidate.profile_completeness < 100 {
        suggestions.push(ProfileSuggestion {
            category: SuggestionCategory::Profile,
            priority: if candidate.profile_completeness < 70 {
                Priority::High
            } else {
                Priority::Medium
            },
            title: "Complete seu perfil".to_string(),
            description: format!(
                "Seu perfil está {}% completo. Perfis completos têm 3x mais visibilidade.",
                candidate.profile_completeness
            ),
            action: "Acesse \"Meu Perfil\" e preencha todas as seções".to_string(),
            impact: 85,
        });
    }

    if candidate.skills.len() < 8 {
        suggestions.push(ProfileSuggestion {
            category: SuggestionCategory::Skills,
            priority: if candidate.skills.len() < 5 {
                Priority::High
            } else {
                Priority::Medium
            },
            title: "Adicione mais habilidades".to_string(),
            description: "Candidatos com 8+ habilidades têm 40% mais chances de match."
                .to_string(),
            action: "Liste todas as suas competências técnicas e comportamentais".to_string(),
            impact: 70,
        });
    }

    if candidate.certifications.is_empty() {
        suggestions.push(ProfileSuggestion {
            category: SuggestionCategory::Certifications,
            priority: Priority::High,
            title: "Obtenha certificações".to_string(),
            description: "Certificações validam suas habilidades e aumentam credibilidade."
                .to_string(),
            action: "Complete cursos na plataforma para obter certificações".to_string(),
            impact: 90,
        });
    }

    if candidate.experience.len() < 3 {
        suggestions.push(ProfileSuggestion {
            category: SuggestionCategory::Experience,
            priority: Priority::Medium,
            title: "Detalhe suas experiências".to_string(),
            description: "Adicione todas as suas experiências profissionais relevantes."
                .to_string(),
            action: "Inclua projetos, estágios e trabalhos anteriores".to_string(),
            impact: 75,
        });
    }

    let completed = completed_count(progress);
    if completed < 3 {
        suggestions.push(ProfileSuggestion {
            category: SuggestionCategory::Courses,
            priority: if completed == 0 {
                Priority::High
            } else {
                Priority::Medium
            },
            title: "Complete mais cursos".to_string(),
            description: "Cada curso concluído aumenta suas qualificações.".to_string(),
            action: "Matricule-se em cursos relacionados à sua área".to_string(),
            impact: 80,
        });
    }

    suggestions.sort_by(|a, b| {
        b.priority
            .rank()
            .cmp(&a.priority.rank())
            .then(b.impact.cmp(&a.impact))
    });
    suggestions
}

fn completed_count(progress: &[CourseProgress]) -> usize {
    progress
        .iter()
        .filter(|p| p.status == ProgressStatus::Completed)
        .count()
}

fn active_count(progress: &[CourseProgress]) -> usize {
    progress.iter().filter(|p| p.status.is_active()).count()
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
            .map(|i| CourseProgress {
                course_id: format!("c{i}"),
                status: ProgressStatus::Completed,
                ..CourseProgress::default()
            })
            .collect()
    }

    #[test]
    fn strong_profile_collects_all_strengths() {
        let candidate = Candidate {
            profile_completeness: 95,
            skills: (0..9).map(|i| format!("s{i}")).collect(),
            certifications: vec![cert(100), cert(200), cert(300)],
            experience: vec![Default::default(); 3],
            is_pcd: true,
            ..Candidate::default()
        };
        let mut progress = completed(5);
        progress.push(CourseProgress {
            status: ProgressStatus::InProgress,
            ..CourseProgress::default()
        });
        progress.push(CourseProgress {
            status: ProgressStatus::Enrolled,
            ..CourseProgress::default()
        });

        let strengths = identify_strengths(&candidate, &progress, today());
        assert_eq!(strengths.len(), 7);
        assert!(strengths.contains(&"Conjunto amplo de habilidades (9 skills)".to_string()));
        assert!(strengths.contains(&"Elegível para vagas exclusivas PCD".to_string()));
    }

    #[test]
    fn empty_profile_collects_all_weaknesses() {
        let weaknesses = identify_weaknesses(&Candidate::default(), &[], today());
        assert_eq!(weaknesses.len(), 6);
        assert!(!weaknesses
            .iter()
            .any(|w| w.contains("expirada")));
    }

    #[test]
    fn expired_certifications_are_counted() {
        let candidate = Candidate {
            certifications: vec![cert(-10), cert(-20), cert(100)],
            ..Candidate::default()
        };
        let weaknesses = identify_weaknesses(&candidate, &[], today());
        assert!(weaknesses.contains(&"2 certificação(ões) expirada(s)".to_string()));
        assert!(!weaknesses.contains(&"Sem certificações profissionais".to_string()));
    }

    #[test]
    fn suggestions_sort_by_priority_then_impact() {
        let candidate = Candidate {
            profile_completeness: 40,
            ..Candidate::default()
        };
        let suggestions = generate_suggestions(&candidate, &[]);

        // Four high-priority entries sorted by impact, then the medium one.
        let impacts: Vec<u8> = suggestions.iter().map(|s| s.impact).collect();
        assert_eq!(impacts, vec![90, 85, 80, 70, 75]);
        assert_eq!(suggestions[0].category, SuggestionCategory::Certifications);
        assert_eq!(suggestions[4].priority, Priority::Medium);
    }

    #[test]
    fn complete_profile_gets_no_profile_suggestion() {
        let candidate = Candidate {
            profile_completeness: 100,
            skills: (0..8).map(|i| format!("s{i}")).collect(),
            certifications: vec![cert(100)],
            experience: vec![Default::default(); 3],
            ..Candidate::default()
        };
        let suggestions = generate_suggestions(&candidate, &completed(3));
        assert!(suggestions.is_empty());
    }
}
