//! Risk tier classification
//!
//! Deterministic decision policy over detections and interaction
//! warnings, with operator-tunable thresholds.

mod classifier;
mod types;

pub use classifier::{ClassifierConfig, RiskClassifier};
pub use types::{RiskSummary, RiskTier};
