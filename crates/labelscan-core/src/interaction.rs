//! Interaction resolution between co-occurring additives
//!
//! The catalog documents adverse pairings in each record's
//! `interaction_partners`. Given the additives detected in one text,
//! the resolver reports every documented pair that co-occurs, at most
//! once per unordered pair.

use ahash::{AHashMap, AHashSet};

use crate::catalog::Catalog;
use crate::detect::DetectionEntry;

/// Resolves documented adverse interactions among detected additives.
///
/// Built from the catalog's load-time interaction index, so lookup
/// cost is proportional to the detected set and its partner lists,
/// not to the catalog size.
pub struct InteractionResolver {
    partners: AHashMap<String, Vec<String>>,
    labels: AHashMap<String, String>,
}

impl InteractionResolver {
    pub fn new(catalog: &Catalog) -> Self {
        let partners = catalog.interaction_index().clone();
        let labels = catalog
            .records()
            .iter()
            .map(|r| (r.id.clone(), r.display_label()))
            .collect();
        Self { partners, labels }
    }

    /// Warning strings for every documented pair present in
    /// `detected`, in detection order. Each unordered pair is
    /// reported exactly once regardless of which side is seen first.
    pub fn resolve(&self, detected: &[DetectionEntry]) -> Vec<String> {
        let detected_ids: AHashSet<&str> = detected.iter().map(|e| e.id.as_str()).collect();
        let mut seen_pairs: AHashSet<(String, String)> = AHashSet::new();
        let mut warnings = Vec::new();

        for entry in detected {
            let Some(partners) = self.partners.get(&entry.id) else {
                continue;
            };
            for partner in partners {
                if partner == &entry.id || !detected_ids.contains(partner.as_str()) {
                    continue;
                }
                let (first, second) = canonical_pair(&entry.id, partner);
                if !seen_pairs.insert((first.to_string(), second.to_string())) {
                    continue;
                }
                warnings.push(format!(
                    "{} + {}: documented adverse interaction. Consuming these together may produce harmful compounds.",
                    self.label(&entry.id),
                    self.label(partner),
                ));
            }
        }

        warnings
    }

    fn label<'a>(&'a self, id: &'a str) -> &'a str {
        self.labels.get(id).map(String::as_str).unwrap_or(id)
    }
}

fn canonical_pair<'a>(a: &'a str, b: &'a str) -> (&'a str, &'a str) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
