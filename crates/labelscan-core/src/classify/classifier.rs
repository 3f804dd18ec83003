//! Risk classifier
//!
//! Applies a deterministic, ordered decision policy over detected
//! additives and interaction warnings. The first matching rule wins;
//! later rules are not evaluated once one fires.

use serde::{Deserialize, Serialize};

use super::types::{RiskSummary, RiskTier};
use crate::catalog::{RegulatoryStatus, RiskLevel};
use crate::detect::DetectionEntry;

/// Configurable tier thresholds.
///
/// Operators tune sensitivity here; the decision order itself is
/// fixed policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// RED detections at or above this count classify as HIGH_RISK (default: 3)
    pub high_risk_red_count: usize,
    /// RED detections at or above this count classify as MODERATE_RISK (default: 1)
    pub moderate_risk_red_count: usize,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            high_risk_red_count: 3,
            moderate_risk_red_count: 1,
        }
    }
}

/// Classifies a product's additive profile into a risk tier.
pub struct RiskClassifier {
    config: ClassifierConfig,
}

impl RiskClassifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Compute the risk summary for one set of detections and their
    /// interaction warnings.
    pub fn classify(
        &self,
        detected: &[DetectionEntry],
        interaction_warnings: Vec<String>,
    ) -> RiskSummary {
        let mut red_count = 0;
        let mut orange_count = 0;
        let mut banned_substances = Vec::new();
        let mut restricted_substances = Vec::new();
        let mut watchlist_substances = Vec::new();

        for entry in detected {
            match entry.risk_level {
                RiskLevel::Red => red_count += 1,
                RiskLevel::Orange => orange_count += 1,
                RiskLevel::Yellow | RiskLevel::Green => {}
            }
            match entry.regulatory_status {
                RegulatoryStatus::Banned => banned_substances.push(entry.label.clone()),
                RegulatoryStatus::Restricted => restricted_substances.push(entry.label.clone()),
                RegulatoryStatus::Watchlist => watchlist_substances.push(entry.label.clone()),
                RegulatoryStatus::Permitted => {}
            }
        }

        // Ordered policy: first matching rule wins
        let tier = if !banned_substances.is_empty() {
            RiskTier::Critical
        } else if red_count >= self.config.high_risk_red_count || !interaction_warnings.is_empty() {
            RiskTier::HighRisk
        } else if red_count >= self.config.moderate_risk_red_count {
            RiskTier::ModerateRisk
        } else if orange_count > 0 {
            RiskTier::LowRisk
        } else {
            RiskTier::Safe
        };

        let recommendation = recommendation(tier, red_count, orange_count, &banned_substances);

        RiskSummary {
            tier,
            red_count,
            orange_count,
            total_detected: detected.len(),
            banned_substances,
            restricted_substances,
            watchlist_substances,
            interaction_warnings,
            recommendation,
        }
    }
}

/// Tier-to-message mapping, parameterized only by already-computed
/// counts and names.
fn recommendation(
    tier: RiskTier,
    red_count: usize,
    orange_count: usize,
    banned: &[String],
) -> String {
    match tier {
        RiskTier::Critical => format!(
            "[CRITICAL] This product contains BANNED substance(s): {}. \
             These are illegal under FSSAI regulations. Do NOT consume. \
             Report to FSSAI if found in market.",
            banned.join(", ")
        ),
        RiskTier::HighRisk => format!(
            "[HIGH RISK] {red_count} high-risk additive(s) detected. \
             Frequent consumption may pose serious health risks. \
             Consider switching to cleaner alternatives."
        ),
        RiskTier::ModerateRisk => format!(
            "[MODERATE RISK] {red_count} concerning additive(s) found. \
             Occasional consumption is acceptable, but long-term intake should be limited."
        ),
        RiskTier::LowRisk => format!(
            "[LOW RISK] {orange_count} mildly concerning additive(s). \
             Generally safe for occasional consumption."
        ),
        RiskTier::Safe => {
            "[SAFE] No concerning additives detected. This product has a clean label.".to_string()
        }
    }
}
