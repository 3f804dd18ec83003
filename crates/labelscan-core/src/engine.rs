//! Engine facade
//!
//! Composes the catalog, alias matcher, interaction resolver and risk
//! classifier into the two operations the surrounding application
//! consumes: `analyze` and `summarize`. All stages are pure functions
//! of their inputs plus the read-only catalog, so one engine may be
//! shared freely across threads.

use std::sync::Arc;

use arc_swap::ArcSwap;
use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, SourceRecord};
use crate::classify::{ClassifierConfig, RiskClassifier, RiskSummary};
use crate::detect::{AliasMatcher, DetectionEntry, Detections};
use crate::interaction::InteractionResolver;

/// Additive detection and risk assessment engine.
///
/// Owns an immutable catalog snapshot and the stages compiled from
/// it. Construction does all the expensive work (validation, pattern
/// compilation, interaction indexing); `analyze` and `summarize` are
/// lock-free reads.
pub struct Engine {
    catalog: Arc<Catalog>,
    matcher: AliasMatcher,
    resolver: InteractionResolver,
    classifier: RiskClassifier,
}

impl Engine {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_config(catalog, ClassifierConfig::default())
    }

    pub fn with_config(catalog: Catalog, config: ClassifierConfig) -> Self {
        let matcher = AliasMatcher::new(&catalog);
        let resolver = InteractionResolver::new(&catalog);
        Self {
            catalog: Arc::new(catalog),
            matcher,
            resolver,
            classifier: RiskClassifier::new(config),
        }
    }

    /// Detect catalog additives in free-form ingredient text.
    ///
    /// Total over any string: empty or unmatchable text yields an
    /// empty result with zero impact, never an error.
    pub fn analyze(&self, text: &str) -> Detections {
        self.matcher.detect(text)
    }

    /// Compute the risk summary for a set of detections, including
    /// documented interaction warnings among them.
    pub fn summarize(&self, detected: &[DetectionEntry]) -> RiskSummary {
        let warnings = self.resolver.resolve(detected);
        self.classifier.classify(detected, warnings)
    }

    /// The catalog snapshot this engine was built from.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn classifier_config(&self) -> &ClassifierConfig {
        self.classifier.config()
    }
}

/// Atomically swappable engine handle for live catalog reload.
///
/// `reload` builds a complete new engine from the new catalog and
/// publishes it as a single pointer store; readers that already hold
/// a snapshot keep using it. No partial-update visibility.
pub struct SharedEngine {
    inner: ArcSwap<Engine>,
}

impl SharedEngine {
    pub fn new(engine: Engine) -> Self {
        Self {
            inner: ArcSwap::from_pointee(engine),
        }
    }

    /// Current engine snapshot.
    pub fn current(&self) -> Arc<Engine> {
        self.inner.load_full()
    }

    /// Replace the published engine with one built from `catalog`,
    /// keeping the current classifier configuration.
    pub fn reload(&self, catalog: Catalog) {
        let config = self.current().classifier_config().clone();
        self.inner.store(Arc::new(Engine::with_config(catalog, config)));
    }
}

/// Input for [`analyze_report`]: catalog records in wire form, the
/// text to analyze, and optional classifier thresholds.
#[derive(Debug, Deserialize)]
pub struct AnalyzeInput {
    pub records: Vec<SourceRecord>,
    pub text: String,
    #[serde(default)]
    pub config: ClassifierConfig,
}

/// Output of [`analyze_report`]: the full analysis in one payload.
#[derive(Debug, Serialize)]
pub struct AnalyzeOutput {
    pub detections: Vec<DetectionEntry>,
    pub total_impact: f64,
    pub summary: RiskSummary,
}

/// Top-level function: analyze ingredient text from JSON input,
/// return the report as JSON. Never panics; malformed input or an
/// unloadable catalog produce an `{"error": ...}` payload.
pub fn analyze_report(input: &str) -> String {
    let parsed: AnalyzeInput = match serde_json::from_str(input) {
        Ok(v) => v,
        Err(e) => {
            return format!(
                r#"{{"error":"invalid analyze input: {}"}}"#,
                e.to_string().replace('"', "\\\"")
            );
        }
    };

    let catalog = match Catalog::from_source(parsed.records) {
        Ok(c) => c,
        Err(e) => {
            return format!(
                r#"{{"error":"catalog load failed: {}"}}"#,
                e.to_string().replace('"', "\\\"")
            );
        }
    };

    let engine = Engine::with_config(catalog, parsed.config);
    let detections = engine.analyze(&parsed.text);
    let summary = engine.summarize(&detections.entries);

    let output = AnalyzeOutput {
        total_impact: detections.total_impact,
        detections: detections.entries,
        summary,
    };

    match serde_json::to_string(&output) {
        Ok(json) => json,
        Err(e) => format!(r#"{{"error":"serialization failed: {}"}}"#, e),
    }
}
