use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Reference data for one certification, as published by the catalog owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertificationInfo {
    pub id: String,
    pub name: String,
    pub issuing_body: String,
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("invalid certification catalog payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),
}

/// Read-only lookup of certification ids to their display metadata.
///
/// The catalog is owned externally; the scorers only use it to render
/// human-readable names for missing certifications and degrade gracefully
/// (skip the name) when an id is absent.
#[derive(Debug, Clone, Default)]
pub struct CertificationCatalog {
    by_id: HashMap<String, CertificationInfo>,
}

impl CertificationCatalog {
    pub fn new(entries: Vec<CertificationInfo>) -> Self {
        let by_id = entries
            .into_iter()
            .map(|info| (info.id.clone(), info))
            .collect();
        Self { by_id }
    }

    /// Build a catalog from the JSON array the platform ships as reference data.
    pub fn from_json(payload: &str) -> Result<Self, CatalogError> {
        let entries: Vec<CertificationInfo> = serde_json::from_str(payload)?;
        Ok(Self::new(entries))
    }

    pub fn get(&self, id: &str) -> Option<&CertificationInfo> {
        self.by_id.get(id)
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }
}
