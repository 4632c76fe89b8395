pub mod catalog;
pub mod certification;
pub mod logging;
pub mod matching;
pub mod profile;
pub mod recommendation;
pub mod search;

mod text;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// Commonly used data models for the scoring engines. All of these are
// read-only snapshots supplied by external providers; the engines never
// mutate them.

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub state: String,
    pub coordinates: Coordinates,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateCertification {
    pub certification_id: String,
    pub issue_date: NaiveDate,
    pub expiry_date: NaiveDate,
    pub verified: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub position: String,
    pub company: String,
    pub period: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    pub location: Location,
    pub is_pcd: bool,
    pub gender: Option<String>,
    pub main_area: String,
    /// 0-100, maintained by the profile UI.
    pub profile_completeness: u8,
    pub certifications: Vec<CandidateCertification>,
    pub experience: Vec<Experience>,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobRestrictions {
    pub pcd_exclusive: bool,
    pub women_exclusive: bool,
    pub no_color_blindness: bool,
    pub min_experience: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Salary {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub location: String,
    pub required_certifications: Vec<String>,
    pub required_skills: Vec<String>,
    pub desired_skills: Vec<String>,
    pub restrictions: JobRestrictions,
    pub salary: Salary,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseLevel {
    #[default]
    Basico,
    Intermediario,
    Avancado,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseMode {
    #[default]
    Ead,
    Presencial,
    Hibrido,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub level: CourseLevel,
    pub mode: CourseMode,
    pub instructor: String,
    /// Total duration in hours.
    pub duration_hours: u32,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressStatus {
    #[default]
    Enrolled,
    InProgress,
    Completed,
    Dropped,
}

impl ProgressStatus {
    /// Enrolled and in-progress records both count as active engagement.
    pub fn is_active(&self) -> bool {
        matches!(self, ProgressStatus::Enrolled | ProgressStatus::InProgress)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseProgress {
    pub user_id: String,
    pub course_id: String,
    pub status: ProgressStatus,
    pub progress_percentage: u8,
    pub certificate_issued: bool,
}

/// Priority tier derived from a numeric score via fixed thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    /// Rank for descending sorts (higher priority first).
    pub fn rank(&self) -> u8 {
        match self {
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_level_uses_lowercase_wire_names() {
        let level: CourseLevel = serde_json::from_str("\"intermediario\"").unwrap();
        assert_eq!(level, CourseLevel::Intermediario);
        assert_eq!(serde_json::to_string(&CourseLevel::Avancado).unwrap(), "\"avancado\"");
    }

    #[test]
    fn progress_status_uses_snake_case_wire_names() {
        let status: ProgressStatus = serde_json::from_str("\"in_progress\"").unwrap();
        assert_eq!(status, ProgressStatus::InProgress);
        assert!(status.is_active());
        assert!(!ProgressStatus::Dropped.is_active());
    }

    #[test]
    fn priority_ranks_descending() {
        assert!(Priority::High.rank() > Priority::Medium.rank());
        assert!(Priority::Medium.rank() > Priority::Low.rank());
    }
}
