//! Catalog record types

use serde::{Deserialize, Serialize};

/// Risk level assigned to an additive by the regulatory knowledge base.
///
/// Ordered by ascending severity. Severity comparisons use the enum
/// order, never string comparison.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[repr(u8)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    /// No known concern at permitted levels
    #[default]
    Green = 0,
    /// Minor concern for sensitive groups
    Yellow = 1,
    /// Moderate concern, limit intake
    Orange = 2,
    /// High concern (highest severity)
    Red = 3,
}

impl RiskLevel {
    /// Parse the knowledge-base wire form (`GREEN`/`YELLOW`/`ORANGE`/`RED`).
    pub fn from_wire(value: &str) -> Option<Self> {
        match value.trim().to_uppercase().as_str() {
            "GREEN" => Some(Self::Green),
            "YELLOW" => Some(Self::Yellow),
            "ORANGE" => Some(Self::Orange),
            "RED" => Some(Self::Red),
            _ => None,
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Green => write!(f, "GREEN"),
            Self::Yellow => write!(f, "YELLOW"),
            Self::Orange => write!(f, "ORANGE"),
            Self::Red => write!(f, "RED"),
        }
    }
}

/// Legal standing of an additive under the regulatory regime.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[repr(u8)]
#[serde(rename_all = "lowercase")]
pub enum RegulatoryStatus {
    /// Allowed without restriction
    #[default]
    Permitted = 0,
    /// Allowed with usage limits
    Restricted = 1,
    /// Under review, flagged for monitoring
    Watchlist = 2,
    /// Not permitted for sale
    Banned = 3,
}

impl RegulatoryStatus {
    /// Parse the knowledge-base wire form (`permitted`/`restricted`/`watchlist`/`banned`).
    pub fn from_wire(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "permitted" => Some(Self::Permitted),
            "restricted" => Some(Self::Restricted),
            "watchlist" => Some(Self::Watchlist),
            "banned" => Some(Self::Banned),
            _ => None,
        }
    }
}

impl std::fmt::Display for RegulatoryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Permitted => write!(f, "permitted"),
            Self::Restricted => write!(f, "restricted"),
            Self::Watchlist => write!(f, "watchlist"),
            Self::Banned => write!(f, "banned"),
        }
    }
}

/// One row of the additive knowledge base.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdditiveRecord {
    /// Canonical identifier, unique across the catalog (e.g. "INS 102")
    pub id: String,
    /// Canonical display name
    pub name: String,
    pub risk_level: RiskLevel,
    pub regulatory_status: RegulatoryStatus,
    /// Signed contribution to a downstream health score; accumulated
    /// and passed through, never interpreted here
    #[serde(default)]
    pub impact: f64,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Ids of additives with a documented adverse interaction
    #[serde(default)]
    pub interaction_partners: Vec<String>,
}

impl AdditiveRecord {
    /// Display label shown to callers: `"Name (ID)"`.
    ///
    /// Detections carry the raw id alongside this label, so nothing
    /// ever parses the id back out of it.
    pub fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.id)
    }
}
