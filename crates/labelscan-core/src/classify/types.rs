//! Risk classification types

use serde::{Deserialize, Serialize};

/// Ordered severity classification of a product's additive profile.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[repr(u8)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskTier {
    /// No concerning additives detected
    #[default]
    Safe = 0,
    /// Mildly concerning additives only
    LowRisk = 1,
    /// At least one high-concern additive
    ModerateRisk = 2,
    /// Many high-concern additives or a documented interaction
    HighRisk = 3,
    /// Contains a banned substance
    Critical = 4,
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Safe => write!(f, "SAFE"),
            Self::LowRisk => write!(f, "LOW_RISK"),
            Self::ModerateRisk => write!(f, "MODERATE_RISK"),
            Self::HighRisk => write!(f, "HIGH_RISK"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Structured risk assessment for one set of detections.
///
/// Derived fresh on every call; it has no independent lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskSummary {
    pub tier: RiskTier,
    pub red_count: usize,
    pub orange_count: usize,
    pub total_detected: usize,
    /// Display labels of banned detections
    pub banned_substances: Vec<String>,
    pub restricted_substances: Vec<String>,
    pub watchlist_substances: Vec<String>,
    pub interaction_warnings: Vec<String>,
    /// Human-readable guidance, a stable function of the tier and the
    /// counts/names above
    pub recommendation: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_ordering() {
        assert!(RiskTier::Critical > RiskTier::HighRisk);
        assert!(RiskTier::HighRisk > RiskTier::ModerateRisk);
        assert!(RiskTier::ModerateRisk > RiskTier::LowRisk);
        assert!(RiskTier::LowRisk > RiskTier::Safe);
    }

    #[test]
    fn tier_wire_form() {
        assert_eq!(
            serde_json::to_string(&RiskTier::ModerateRisk).unwrap(),
            "\"MODERATE_RISK\""
        );
        assert_eq!(RiskTier::HighRisk.to_string(), "HIGH_RISK");
    }
}
