//! Additive catalog: immutable, indexed knowledge base
//!
//! The catalog is built once from a structured source document and is
//! read-only for its lifetime. Live reload replaces the whole value
//! through [`crate::engine::SharedEngine`]; nothing mutates a catalog
//! in place.

mod error;
mod load;
mod record;

pub use error::{LoadError, LoadResult};
pub use load::SourceRecord;
pub use record::{AdditiveRecord, RegulatoryStatus, RiskLevel};

use ahash::{AHashMap, AHasher};
use std::hash::{Hash, Hasher};
use tracing::warn;

/// Immutable, indexed additive knowledge base.
///
/// Validated on construction:
/// - every record has a non-empty id, unique across the catalog;
/// - `interaction_partners` entries that reference unknown ids are
///   logged and left out of the interaction index (the record itself
///   is kept).
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<AdditiveRecord>,
    by_id: AHashMap<String, usize>,
    interactions: AHashMap<String, Vec<String>>,
    fingerprint: String,
    fallback: bool,
}

impl Catalog {
    /// Build a catalog from validated-shape records.
    pub fn from_records(records: Vec<AdditiveRecord>) -> LoadResult<Self> {
        let mut by_id = AHashMap::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            if record.id.trim().is_empty() {
                return Err(LoadError::EmptyId { index });
            }
            if by_id.insert(record.id.clone(), index).is_some() {
                return Err(LoadError::DuplicateId(record.id.clone()));
            }
        }

        let interactions = build_interaction_index(&records, &by_id);
        let fingerprint = compute_fingerprint(&records);

        Ok(Self {
            records,
            by_id,
            interactions,
            fingerprint,
            fallback: false,
        })
    }

    /// Number of records in the catalog.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether this is the built-in fallback catalog rather than a
    /// successfully loaded source document.
    pub fn is_fallback(&self) -> bool {
        self.fallback
    }

    /// All records, in source order.
    pub fn records(&self) -> &[AdditiveRecord] {
        &self.records
    }

    /// Look up a record by id.
    pub fn get(&self, id: &str) -> Option<&AdditiveRecord> {
        self.by_id.get(id).map(|&idx| &self.records[idx])
    }

    /// Resolved interaction partners for an id. Dangling references
    /// from the source document are already filtered out.
    pub fn partners(&self, id: &str) -> &[String] {
        self.interactions
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Ids that have at least one resolved interaction partner.
    pub fn interaction_index(&self) -> &AHashMap<String, Vec<String>> {
        &self.interactions
    }

    /// Content fingerprint over record ids and names.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    pub(crate) fn mark_fallback(mut self) -> Self {
        self.fallback = true;
        self
    }
}

/// Pre-build the id -> partners map so interaction lookup is
/// proportional to the detected set, not the catalog size.
fn build_interaction_index(
    records: &[AdditiveRecord],
    by_id: &AHashMap<String, usize>,
) -> AHashMap<String, Vec<String>> {
    let mut index = AHashMap::new();
    for record in records {
        let mut resolved = Vec::new();
        for partner in &record.interaction_partners {
            if by_id.contains_key(partner) {
                resolved.push(partner.clone());
            } else {
                warn!(
                    id = %record.id,
                    partner = %partner,
                    "interaction partner not found in catalog; reference ignored"
                );
            }
        }
        if !resolved.is_empty() {
            index.insert(record.id.clone(), resolved);
        }
    }
    index
}

fn compute_fingerprint(records: &[AdditiveRecord]) -> String {
    let mut hasher = AHasher::default();
    for record in records {
        record.id.hash(&mut hasher);
        record.name.hash(&mut hasher);
    }
    format!("{:016x}", hasher.finish())
}
