//! AliasMatcher - detection of catalog additives in free-form text

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::patterns;
use crate::catalog::{Catalog, RegulatoryStatus, RiskLevel};

/// A catalog record confirmed present in one input text.
///
/// Carries the raw id alongside the formatted label, plus a snapshot
/// of the record's risk fields at detection time — a later catalog
/// reload does not retroactively change an already-returned result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionEntry {
    /// Canonical catalog id
    pub id: String,
    /// Display label, `"Name (ID)"`
    pub label: String,
    pub risk_level: RiskLevel,
    pub regulatory_status: RegulatoryStatus,
    pub category: String,
    /// Knowledge-base description of why this additive matters
    pub reason: String,
    pub tags: Vec<String>,
}

/// Result of one detection pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Detections {
    /// Deduplicated detections, in catalog order
    pub entries: Vec<DetectionEntry>,
    /// Sum of each detected record's impact contribution
    pub total_impact: f64,
}

impl Detections {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Detected catalog ids, in detection order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.id.as_str())
    }
}

/// One record's compiled pattern plus the snapshot it produces on a hit.
struct CompiledEntry {
    entry: DetectionEntry,
    impact: f64,
    regex: Regex,
}

/// Alias matcher with patterns precompiled at construction.
///
/// One case-insensitive alternation regex per catalog record, built
/// once when the catalog is loaded, never per `detect` call. A record
/// is detected when any of its surface forms matches; because each
/// record contributes exactly one compiled entry evaluated once, all
/// synonymous mentions of a record deduplicate structurally to a
/// single [`DetectionEntry`].
pub struct AliasMatcher {
    compiled: Vec<CompiledEntry>,
}

impl AliasMatcher {
    /// Compile patterns for every usable record in the catalog.
    ///
    /// Malformed records (no usable surface form, uncompilable
    /// pattern) are skipped with a warning, never a failure.
    pub fn new(catalog: &Catalog) -> Self {
        let mut compiled = Vec::with_capacity(catalog.len());

        for record in catalog.records() {
            let Some(pattern) = patterns::pattern_for(record) else {
                warn!(id = %record.id, "catalog record has no usable surface form; skipped");
                continue;
            };

            let regex = match RegexBuilder::new(&pattern).case_insensitive(true).build() {
                Ok(regex) => regex,
                Err(err) => {
                    warn!(id = %record.id, %err, "catalog record pattern failed to compile; skipped");
                    continue;
                }
            };

            compiled.push(CompiledEntry {
                entry: DetectionEntry {
                    id: record.id.clone(),
                    label: record.display_label(),
                    risk_level: record.risk_level,
                    regulatory_status: record.regulatory_status,
                    category: record.category.clone(),
                    reason: record.description.clone(),
                    tags: record.tags.clone(),
                },
                impact: record.impact,
                regex,
            });
        }

        Self { compiled }
    }

    /// Find every catalog record with at least one surface form in
    /// `text`. Total function over any string; empty text yields an
    /// empty result with zero impact.
    pub fn detect(&self, text: &str) -> Detections {
        let mut entries = Vec::new();
        let mut total_impact = 0.0;

        for compiled in &self.compiled {
            if compiled.regex.is_match(text) {
                entries.push(compiled.entry.clone());
                total_impact += compiled.impact;
            }
        }

        Detections {
            entries,
            total_impact,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::AdditiveRecord;
    use pretty_assertions::assert_eq;

    fn make_record(id: &str, name: &str, impact: f64) -> AdditiveRecord {
        AdditiveRecord {
            id: id.to_string(),
            name: name.to_string(),
            risk_level: RiskLevel::Red,
            regulatory_status: RegulatoryStatus::Restricted,
            impact,
            category: String::new(),
            description: String::new(),
            tags: Vec::new(),
            interaction_partners: Vec::new(),
        }
    }

    fn test_matcher() -> AliasMatcher {
        let catalog = Catalog::from_records(vec![
            make_record("INS 102", "Tartrazine", -3.0),
            make_record("INS 621", "MSG (Monosodium Glutamate)", -3.5),
            make_record("INS 211", "Sodium Benzoate", -1.5),
        ])
        .unwrap();
        AliasMatcher::new(&catalog)
    }

    #[test]
    fn name_and_code_dedupe_to_one_entry() {
        let matcher = test_matcher();
        let result = matcher.detect("Ingredients: Water, Sugar, INS 102, Tartrazine.");

        assert_eq!(result.len(), 1);
        assert_eq!(result.entries[0].id, "INS 102");
        assert_eq!(result.entries[0].label, "Tartrazine (INS 102)");
        assert_eq!(result.total_impact, -3.0);
    }

    #[test]
    fn all_aliases_dedupe() {
        let matcher = test_matcher();
        for text in [
            "Tartrazine, E102, INS-102 and 102 as colour",
            "tartrazine only",
            "colour 102 only",
        ] {
            let result = matcher.detect(text);
            assert_eq!(result.len(), 1, "text: {text}");
        }
    }

    #[test]
    fn short_name_alias_matches() {
        let matcher = test_matcher();
        let result = matcher.detect("Contains MSG for flavour.");
        assert_eq!(result.len(), 1);
        assert_eq!(result.entries[0].id, "INS 621");
    }

    #[test]
    fn bare_code_does_not_match_longer_numbers() {
        let matcher = test_matcher();
        let result = matcher.detect("Sodium content 1021mg per serving, batch 62100.");
        assert!(result.is_empty());
        assert_eq!(result.total_impact, 0.0);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let matcher = test_matcher();
        let result = matcher.detect("SODIUM BENZOATE and ins 621");
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn empty_text_is_empty_result() {
        let matcher = test_matcher();
        let result = matcher.detect("");
        assert!(result.is_empty());
        assert_eq!(result.total_impact, 0.0);
    }

    #[test]
    fn catalog_order_is_preserved() {
        let matcher = test_matcher();
        let result = matcher.detect("Sodium Benzoate first in text, then Tartrazine.");
        let ids: Vec<&str> = result.ids().collect();
        assert_eq!(ids, ["INS 102", "INS 211"]);
    }

    #[test]
    fn impact_accumulates_once_per_record() {
        let matcher = test_matcher();
        let result = matcher.detect("Tartrazine (INS 102), MSG, Sodium Benzoate");
        assert_eq!(result.len(), 3);
        assert_eq!(result.total_impact, -8.0);
    }

    #[test]
    fn malformed_record_skipped_without_failure() {
        let catalog = Catalog::from_records(vec![
            make_record("CUSTOM-1", "  ", 0.0), // no name, no INS code
            make_record("INS 102", "Tartrazine", -3.0),
        ])
        .unwrap();
        let matcher = AliasMatcher::new(&catalog);
        let result = matcher.detect("Tartrazine");
        assert_eq!(result.len(), 1);
    }
}
