use serde::{Deserialize, Serialize};

use super::normalize::normalize_text;

// Keyword lists are stored pre-normalized so accented forms in the query
// ("capacitação", "competência") resolve against the normalized text.
const COURSE_KEYWORDS: &[&str] = &[
    "curso",
    "aula",
    "aprender",
    "estudar",
    "capacitacao",
    "treinamento",
];
const JOB_KEYWORDS: &[&str] = &["vaga", "emprego", "trabalho", "oportunidade", "contratacao"];
const SKILL_KEYWORDS: &[&str] = &["habilidade", "skill", "competencia", "saber"];
const CERT_KEYWORDS: &[&str] = &["certificado", "certificacao", "diploma"];

const CONFIDENCE_PER_HIT: u32 = 40;
const GENERAL_CONFIDENCE: u8 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchIntent {
    Course,
    Job,
    Skill,
    Certification,
    General,
}

impl SearchIntent {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchIntent::Course => "course",
            SearchIntent::Job => "job",
            SearchIntent::Skill => "skill",
            SearchIntent::Certification => "certification",
            SearchIntent::General => "general",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentAnalysis {
    pub intent: SearchIntent,
    /// 0-100, 40 points per keyword hit.
    pub confidence: u8,
}

fn keyword_hits(normalized: &str, keywords: &[&str]) -> u32 {
    keywords.iter().filter(|k| normalized.contains(*k)).count() as u32
}

/// Classifies what the user is looking for. Ties resolve in the order
/// course, job, certification, skill.
pub fn analyze_search_intent(query: &str) -> IntentAnalysis {
    let normalized = normalize_text(query);

    let course = keyword_hits(&normalized, COURSE_KEYWORDS);
    let job = keyword_hits(&normalized, JOB_KEYWORDS);
    let skill = keyword_hits(&normalized, SKILL_KEYWORDS);
    let cert = keyword_hits(&normalized, CERT_KEYWORDS);

    let max = course.max(job).max(skill).max(cert);
    if max == 0 {
        return IntentAnalysis {
            intent: SearchIntent::General,
            confidence: GENERAL_CONFIDENCE,
        };
    }

    let (intent, hits) = if course == max {
        (SearchIntent::Course, course)
    } else if job == max {
        (SearchIntent::Job, job)
    } else if cert == max {
        (SearchIntent::Certification, cert)
    } else {
        (SearchIntent::Skill, skill)
    };

    IntentAnalysis {
        intent,
        confidence: (hits * CONFIDENCE_PER_HIT).min(100) as u8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_queries_are_detected() {
        let analysis = analyze_search_intent("curso de empilhadeira");
        assert_eq!(analysis.intent, SearchIntent::Course);
        assert_eq!(analysis.confidence, 40);
    }

    #[test]
    fn accented_keywords_count() {
        let analysis = analyze_search_intent("capacitação e treinamento em solda");
        assert_eq!(analysis.intent, SearchIntent::Course);
        assert_eq!(analysis.confidence, 80);
    }

    #[test]
    fn job_queries_are_detected() {
        let analysis = analyze_search_intent("vagas de emprego no porto");
        assert_eq!(analysis.intent, SearchIntent::Job);
        assert_eq!(analysis.confidence, 80);
    }

    #[test]
    fn certification_wins_ties_over_skill() {
        let analysis = analyze_search_intent("certificado de habilidade");
        assert_eq!(analysis.intent, SearchIntent::Certification);
    }

    #[test]
    fn course_wins_ties_over_job() {
        let analysis = analyze_search_intent("curso para conseguir uma vaga");
        assert_eq!(analysis.intent, SearchIntent::Course);
    }

    #[test]
    fn unrelated_queries_fall_back_to_general() {
        let analysis = analyze_search_intent("empilhadeira pecem");
        assert_eq!(analysis.intent, SearchIntent::General);
        assert_eq!(analysis.confidence, 50);
    }

    #[test]
    fn confidence_caps_at_one_hundred() {
        let analysis =
            analyze_search_intent("curso aula aprender estudar capacitação treinamento");
        assert_eq!(analysis.intent, SearchIntent::Course);
        assert_eq!(analysis.confidence, 100);
    }
}
