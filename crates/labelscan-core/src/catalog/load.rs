//! Catalog wire format and loading
//!
//! The source document is a JSON array of records using the knowledge
//! base's field names (`fssai_status`, `interaction_warnings`). Those
//! map onto the engine's [`AdditiveRecord`] on load, where the enum
//! fields are validated against their closed sets.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::error::{LoadError, LoadResult};
use super::record::{AdditiveRecord, RegulatoryStatus, RiskLevel};
use super::Catalog;

/// One record as it appears in the source document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceRecord {
    pub id: String,
    pub name: String,
    pub risk_level: String,
    pub fssai_status: String,
    #[serde(default)]
    pub impact: f64,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub interaction_warnings: Vec<String>,
}

impl SourceRecord {
    fn into_record(self) -> LoadResult<AdditiveRecord> {
        let risk_level =
            RiskLevel::from_wire(&self.risk_level).ok_or_else(|| LoadError::InvalidEnum {
                id: self.id.clone(),
                field: "risk_level",
                value: self.risk_level.clone(),
            })?;
        let regulatory_status =
            RegulatoryStatus::from_wire(&self.fssai_status).ok_or_else(|| {
                LoadError::InvalidEnum {
                    id: self.id.clone(),
                    field: "fssai_status",
                    value: self.fssai_status.clone(),
                }
            })?;

        Ok(AdditiveRecord {
            id: self.id,
            name: self.name,
            risk_level,
            regulatory_status,
            impact: self.impact,
            category: self.category,
            description: self.description,
            tags: self.tags,
            interaction_partners: self.interaction_warnings,
        })
    }
}

impl Catalog {
    /// Strict load from a JSON source document.
    pub fn from_json(source: &str) -> LoadResult<Self> {
        let raw: Vec<SourceRecord> = serde_json::from_str(source)?;
        Self::from_source(raw)
    }

    /// Strict load from already-parsed source records.
    pub fn from_source(raw: Vec<SourceRecord>) -> LoadResult<Self> {
        let records = raw
            .into_iter()
            .map(SourceRecord::into_record)
            .collect::<LoadResult<Vec<_>>>()?;
        Self::from_records(records)
    }

    /// Load a source document, degrading to the built-in fallback
    /// catalog on any load error.
    ///
    /// The engine must never refuse to start because the knowledge
    /// base is malformed; callers can observe the degradation through
    /// [`Catalog::is_fallback`] and [`Catalog::len`].
    pub fn load_or_fallback(source: &str) -> Self {
        match Self::from_json(source) {
            Ok(catalog) => catalog,
            Err(err) => {
                warn!(%err, "catalog load failed; using built-in fallback catalog");
                Self::fallback()
            }
        }
    }

    /// Minimal built-in catalog: the two best-known high-risk
    /// flavor-enhancer/preservative entries.
    pub fn fallback() -> Self {
        let records = vec![
            AdditiveRecord {
                id: "INS 621".to_string(),
                name: "MSG".to_string(),
                risk_level: RiskLevel::Red,
                regulatory_status: RegulatoryStatus::Restricted,
                impact: -3.5,
                category: "Flavour Enhancer".to_string(),
                description: "Flavor enhancer.".to_string(),
                tags: Vec::new(),
                interaction_partners: Vec::new(),
            },
            AdditiveRecord {
                id: "INS 319".to_string(),
                name: "TBHQ".to_string(),
                risk_level: RiskLevel::Red,
                regulatory_status: RegulatoryStatus::Restricted,
                impact: -3.0,
                category: "Antioxidant".to_string(),
                description: "Preservative.".to_string(),
                tags: Vec::new(),
                interaction_partners: Vec::new(),
            },
        ];

        // The fallback entries are well-formed by construction
        Self::from_records(records)
            .unwrap_or_else(|err| unreachable!("fallback catalog invalid: {err}"))
            .mark_fallback()
    }
}
