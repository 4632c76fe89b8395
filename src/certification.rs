use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::CandidateCertification;

/// Temporal status of a certification record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CertificationStatus {
    /// Expiry date is at least 60 days away.
    Active,
    /// Expires within the next 60 days (today included).
    Expiring,
    /// Expiry date already passed.
    Expired,
}

impl CertificationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CertificationStatus::Active => "active",
            CertificationStatus::Expiring => "expiring",
            CertificationStatus::Expired => "expired",
        }
    }
}

/// Days until the certification expires, negative once past due.
/// `today` is injected so expiry logic stays deterministic under test.
pub fn days_until_expiry(cert: &CandidateCertification, today: NaiveDate) -> i64 {
    (cert.expiry_date - today).num_days()
}

/// Classify a certification by how close it is to its expiry date.
///
/// The three intervals partition the whole day axis with no overlap:
/// `(-inf, 0)` expired, `[0, 60)` expiring, `[60, inf)` active.
pub fn certification_status(
    cert: &CandidateCertification,
    today: NaiveDate,
) -> CertificationStatus {
    let days = days_until_expiry(cert, today);

    if days < 0 {
        CertificationStatus::Expired
    } else if days < 60 {
        CertificationStatus::Expiring
    } else {
        CertificationStatus::Active
    }
}

/// Certification still counts toward expiry-sensitive checks: the expiry
/// date lies strictly after `today`.
pub fn is_unexpired(cert: &CandidateCertification, today: NaiveDate) -> bool {
    cert.expiry_date > today
}

/// Certification counts toward the baseline matching: unexpired AND verified.
/// The enhanced scorer deliberately uses [`is_unexpired`] instead; the two
/// scorers diverge here on purpose.
pub fn is_valid(cert: &CandidateCertification, today: NaiveDate) -> bool {
    is_unexpired(cert, today) && cert.verified
}
