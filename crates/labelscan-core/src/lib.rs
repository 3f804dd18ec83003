//! labelscan Core Engine
//!
//! Additive detection and risk assessment over OCR'd ingredient text:
//! load a curated additive knowledge base, find every known additive
//! in a text despite aliasing and inconsistent formatting, surface
//! documented adverse interactions between co-occurring additives,
//! and classify the product into an ordered risk tier.
//!
//! The catalog is immutable after load and every analysis operation
//! is a pure function of its inputs plus that read-only catalog, so
//! the engine is safe for concurrent use without locking. Live reload
//! goes through [`engine::SharedEngine`], which publishes a whole new
//! engine atomically.
//!
//! # Example
//!
//! ```rust
//! use labelscan_core::catalog::Catalog;
//! use labelscan_core::engine::Engine;
//! use labelscan_core::classify::RiskTier;
//!
//! let source = r#"[
//!     {"id": "INS 102", "name": "Tartrazine", "risk_level": "RED", "fssai_status": "restricted", "impact": -3.0}
//! ]"#;
//! let engine = Engine::new(Catalog::load_or_fallback(source));
//!
//! let detections = engine.analyze("Ingredients: Water, Sugar, INS 102, Tartrazine.");
//! assert_eq!(detections.len(), 1); // name and code dedupe to one detection
//!
//! let summary = engine.summarize(&detections.entries);
//! assert_eq!(summary.tier, RiskTier::ModerateRisk);
//! ```

pub mod catalog;
pub mod classify;
pub mod detect;
pub mod engine;
pub mod interaction;

// Re-export main types at crate root
pub use catalog::{
    AdditiveRecord, Catalog, LoadError, LoadResult, RegulatoryStatus, RiskLevel, SourceRecord,
};
pub use classify::{ClassifierConfig, RiskClassifier, RiskSummary, RiskTier};
pub use detect::{AliasMatcher, DetectionEntry, Detections};
pub use engine::{analyze_report, AnalyzeInput, AnalyzeOutput, Engine, SharedEngine};
pub use interaction::InteractionResolver;
