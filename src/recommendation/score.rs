use serde::{Deserialize, Serialize};

use crate::{Candidate, Course, CourseLevel, CourseProgress, Priority, ProgressStatus};

use super::areas::keywords_for_area;

pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 6;

const AREA_POINTS_PER_KEYWORD: u32 = 10;
const AREA_POINTS_CAP: u32 = 30;
const CERT_GAP_POINTS: u32 = 25;
const SKILL_POINTS_PER_MATCH: u32 = 7;
const SKILL_POINTS_CAP: u32 = 20;
const LEVEL_FIT_POINTS: u32 = 15;
const LEVEL_NEUTRAL_POINTS: u32 = 5;
const PROGRESSION_POINTS: u32 = 10;

const HIGH_PRIORITY_THRESHOLD: u32 = 70;
const MEDIUM_PRIORITY_THRESHOLD: u32 = 40;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationScore {
    pub course: Course,
    pub score: u32,
    pub reasons: Vec<String>,
    pub priority: Priority,
}

/// Additive relevance score for a single course. Enrollment in the course,
/// in any status, zeroes it out.
pub fn score_course(
    candidate: &Candidate,
    course: &Course,
    progress: &[CourseProgress],
) -> RecommendationScore {
    if progress.iter().any(|p| p.course_id == course.id) {
        return RecommendationScore {
            course: course.clone(),
            score: 0,
            reasons: vec!["Já matriculado".to_string()],
            priority: Priority::Low,
        };
    }

    let mut score = 0u32;
    let mut reasons = Vec::new();

    let course_text = format!(
        "{} {} {}",
        course.title,
        course.description,
        course.tags.join(" ")
    )
    .to_lowercase();

    let area_hits = keywords_for_area(&candidate.main_area)
        .iter()
        .filter(|kw| course_text.contains(*kw))
        .count() as u32;
    if area_hits > 0 {
        score += (area_hits * AREA_POINTS_PER_KEYWORD).min(AREA_POINTS_CAP);
        reasons.push(format!("Alinhado com sua área: {}", candidate.main_area));
    }

    if has_certification_gap(candidate, course) {
        score += CERT_GAP_POINTS;
        reasons.push("Certificação que você ainda não possui".to_string());
    }

    let description_lower = course.description.to_lowercase();
    let complementary: Vec<&String> = candidate
        .skills
        .iter()
        .filter(|skill| description_lower.contains(&skill.to_lowercase()))
        .collect();
    if let Some(first) = complementary.first() {
        score += (complementary.len() as u32 * SKILL_POINTS_PER_MATCH).min(SKILL_POINTS_CAP);
        reasons.push(format!("Complementa suas habilidades em {first}"));
    }

    if candidate.profile_completeness < 70 && course.level == CourseLevel::Basico {
        score += LEVEL_FIT_POINTS;
        reasons.push("Curso básico ideal para começar".to_string());
    } else if candidate.profile_completeness >= 80 && course.level == CourseLevel::Avancado {
        score += LEVEL_FIT_POINTS;
        reasons.push("Nível avançado adequado ao seu perfil".to_string());
    } else {
        score += LEVEL_NEUTRAL_POINTS;
    }

    let completed = progress
        .iter()
        .filter(|p| p.user_id == candidate.id && p.status == ProgressStatus::Completed)
        .count();

    // At most one of these fires for a given course; a course has one level.
    if completed > 0 && course.level == CourseLevel::Intermediario {
        score += PROGRESSION_POINTS;
        reasons.push("Próximo passo na sua progressão".to_string());
    }
    if completed > 2 && course.level == CourseLevel::Avancado {
        score += PROGRESSION_POINTS;
        reasons.push("Evolução natural dos seus estudos".to_string());
    }

    RecommendationScore {
        course: course.clone(),
        score,
        reasons,
        priority: priority_for(score),
    }
}

/// Certification-bearing tags are those naming an NR norm or mentioning
/// "certificação". A gap exists when the candidate holds no certification
/// whose id contains such a tag.
fn has_certification_gap(candidate: &Candidate, course: &Course) -> bool {
    course
        .tags
        .iter()
        .filter(|tag| {
            tag.to_uppercase().contains("NR-") || tag.to_lowercase().contains("certificação")
        })
        .any(|tag| {
            let tag_lower = tag.to_lowercase();
            !candidate
                .certifications
                .iter()
                .any(|cert| cert.certification_id.to_lowercase().contains(&tag_lower))
        })
}

fn priority_for(score: u32) -> Priority {
    if score >= HIGH_PRIORITY_THRESHOLD {
        Priority::High
    } else if score >= MEDIUM_PRIORITY_THRESHOLD {
        Priority::Medium
    } else {
        Priority::Low
    }
}

/// Score every course, drop zero scores, rank by score descending. Ties keep
/// catalog order.
pub fn recommend_courses(
    candidate: &Candidate,
    courses: &[Course],
    progress: &[CourseProgress],
    limit: usize,
) -> Vec<RecommendationScore> {
    let mut scored: Vec<RecommendationScore> = courses
        .iter()
        .map(|course| score_course(candidate, course, progress))
        .filter(|rec| rec.score > 0)
        .collect();

    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(limit);

    tracing::debug!(
        candidate_id = %candidate.id,
        candidates = courses.len(),
        returned = scored.len(),
        "course recommendations ranked"
    );

    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CandidateCertification, CourseMode};
    use chrono::NaiveDate;

    fn base_candidate() -> Candidate {
        Candidate {
            id: "cand-1".into(),
            main_area: "Operação de Equipamentos".into(),
            profile_completeness: 85,
            skills: vec!["Logística".into()],
            ..Candidate::default()
        }
    }

    fn course(id: &str, title: &str, level: CourseLevel, tags: &[&str]) -> Course {
        Course {
            id: id.into(),
            title: title.into(),
            description: format!("Curso de {title}"),
            category: "Operação de Equipamentos".into(),
            level,
            mode: CourseMode::Presencial,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            ..Course::default()
        }
    }

    fn enrolled(course_id: &str, status: ProgressStatus) -> CourseProgress {
        CourseProgress {
            user_id: "cand-1".into(),
            course_id: course_id.into(),
            status,
            ..CourseProgress::default()
        }
    }

    #[test]
    fn enrolled_course_is_zeroed_in_any_status() {
        let candidate = base_candidate();
        let c = course("c1", "Empilhadeira", CourseLevel::Basico, &[]);

        for status in [
            ProgressStatus::Enrolled,
            ProgressStatus::InProgress,
            ProgressStatus::Completed,
            ProgressStatus::Dropped,
        ] {
            let rec = score_course(&candidate, &c, &[enrolled("c1", status)]);
            assert_eq!(rec.score, 0);
            assert_eq!(rec.reasons, vec!["Já matriculado".to_string()]);
            assert_eq!(rec.priority, Priority::Low);
        }
    }

    #[test]
    fn area_points_cap_at_thirty() {
        let candidate = base_candidate();
        // Title and tags hit all four area keywords.
        let c = course(
            "c1",
            "Operação de Empilhadeira e Logística",
            CourseLevel::Basico,
            &["equipamentos"],
        );

        let rec = score_course(&candidate, &c, &[]);
        assert!(rec
            .reasons
            .contains(&"Alinhado com sua área: Operação de Equipamentos".to_string()));
        // 30 (capped) + 5 (neutral level) + skill complement via "logística"
        // in the generated description (1 * 7).
        assert_eq!(rec.score, 42);
        assert_eq!(rec.priority, Priority::Medium);
    }

    #[test]
    fn certification_gap_awards_points() {
        let candidate = base_candidate();
        let c = course("c1", "Segurança Elétrica", CourseLevel::Basico, &["NR-10"]);

        let rec = score_course(&candidate, &c, &[]);
        assert!(rec
            .reasons
            .contains(&"Certificação que você ainda não possui".to_string()));
        assert_eq!(rec.score, CERT_GAP_POINTS + LEVEL_NEUTRAL_POINTS);
    }

    #[test]
    fn held_certification_closes_the_gap() {
        let mut candidate = base_candidate();
        candidate.certifications = vec![CandidateCertification {
            certification_id: "nr-10".into(),
            issue_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            expiry_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            verified: true,
        }];
        let c = course("c1", "Segurança Elétrica", CourseLevel::Basico, &["NR-10"]);

        let rec = score_course(&candidate, &c, &[]);
        assert!(!rec
            .reasons
            .contains(&"Certificação que você ainda não possui".to_string()));
    }

    #[test]
    fn level_fit_matches_profile_completeness() {
        let mut candidate = base_candidate();
        candidate.main_area = "Aviação".into();
        candidate.skills.clear();

        candidate.profile_completeness = 50;
        let basic = course("c1", "Introdução", CourseLevel::Basico, &[]);
        let rec = score_course(&candidate, &basic, &[]);
        assert_eq!(rec.score, LEVEL_FIT_POINTS);
        assert!(rec
            .reasons
            .contains(&"Curso básico ideal para começar".to_string()));

        candidate.profile_completeness = 85;
        let advanced = course("c2", "Especialização", CourseLevel::Avancado, &[]);
        let rec = score_course(&candidate, &advanced, &[]);
        assert_eq!(rec.score, LEVEL_FIT_POINTS);
        assert!(rec
            .reasons
            .contains(&"Nível avançado adequado ao seu perfil".to_string()));

        let mid = course("c3", "Intermediário", CourseLevel::Intermediario, &[]);
        let rec = score_course(&candidate, &mid, &[]);
        assert_eq!(rec.score, LEVEL_NEUTRAL_POINTS);
    }

    #[test]
    fn progression_rules_follow_completed_count() {
        let mut candidate = base_candidate();
        candidate.main_area = "Aviação".into();
        candidate.skills.clear();

        let done: Vec<CourseProgress> = (0..3)
            .map(|i| enrolled(&format!("done-{i}"), ProgressStatus::Completed))
            .collect();

        let mid = course("c1", "Intermediário", CourseLevel::Intermediario, &[]);
        let rec = score_course(&candidate, &mid, &done[..1]);
        assert!(rec
            .reasons
            .contains(&"Próximo passo na sua progressão".to_string()));

        let advanced = course("c2", "Especialização", CourseLevel::Avancado, &[]);
        let rec = score_course(&candidate, &advanced, &done[..2]);
        assert!(!rec
            .reasons
            .contains(&"Evolução natural dos seus estudos".to_string()));
        let rec = score_course(&candidate, &advanced, &done);
        assert!(rec
            .reasons
            .contains(&"Evolução natural dos seus estudos".to_string()));
    }

    #[test]
    fn ranking_filters_zeroes_and_keeps_catalog_order_on_ties() {
        let candidate = base_candidate();
        let strong = course(
            "strong",
            "Operação de Empilhadeira e Logística",
            CourseLevel::Basico,
            &["NR-11", "equipamentos"],
        );
        let tied_a = course("tied-a", "Gestão", CourseLevel::Basico, &[]);
        let tied_b = course("tied-b", "Finanças", CourseLevel::Basico, &[]);
        let enrolled_course = course("enrolled", "Empilhadeira", CourseLevel::Basico, &[]);

        let recs = recommend_courses(
            &candidate,
            &[tied_a, strong, tied_b, enrolled_course],
            &[enrolled("enrolled", ProgressStatus::Completed)],
            DEFAULT_RECOMMENDATION_LIMIT,
        );

        let ids: Vec<&str> = recs.iter().map(|r| r.course.id.as_str()).collect();
        assert_eq!(ids, vec!["strong", "tied-a", "tied-b"]);
    }

    #[test]
    fn limit_truncates_results() {
        let candidate = base_candidate();
        let courses: Vec<Course> = (0..10)
            .map(|i| course(&format!("c{i}"), "Gestão", CourseLevel::Basico, &[]))
            .collect();

        let recs = recommend_courses(&candidate, &courses, &[], 4);
        assert_eq!(recs.len(), 4);
    }
}
