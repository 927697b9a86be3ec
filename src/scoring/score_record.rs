use crate::artifact::ArtifactDescriptor;
use crate::metrics::{MetricId, MetricResult};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// The complete scoring outcome for one artifact: its identity, the weighted
/// net score with its aggregation latency, the eight per-metric results in
/// canonical order, and the end-to-end wall-clock latency.
///
/// Immutable once constructed. Serializes as a flat object whose keys appear
/// in report order: identity first, then `net_score`/`net_score_latency`,
/// then each metric score immediately followed by its latency, then
/// `overall_latency`.
#[derive(Debug, Clone)]
pub struct ScoreRecord {
    artifact: ArtifactDescriptor,
    net_score: f64,
    net_score_latency_ms: u64,
    metrics: [MetricResult; MetricId::COUNT],
    overall_latency_ms: u64,
}

impl ScoreRecord {
    #[must_use]
    pub const fn new(
        artifact: ArtifactDescriptor,
        net_score: f64,
        net_score_latency_ms: u64,
        metrics: [MetricResult; MetricId::COUNT],
        overall_latency_ms: u64,
    ) -> Self {
        Self {
            artifact,
            net_score,
            net_score_latency_ms,
            metrics,
            overall_latency_ms,
        }
    }

    #[must_use]
    pub const fn artifact(&self) -> &ArtifactDescriptor {
        &self.artifact
    }

    #[must_use]
    pub const fn net_score(&self) -> f64 {
        self.net_score
    }

    #[must_use]
    pub const fn net_score_latency_ms(&self) -> u64 {
        self.net_score_latency_ms
    }

    /// All eight metric results, in canonical metric order.
    #[must_use]
    pub const fn metrics(&self) -> &[MetricResult; MetricId::COUNT] {
        &self.metrics
    }

    /// The result for one metric.
    #[must_use]
    pub const fn metric(&self, id: MetricId) -> &MetricResult {
        &self.metrics[id.index()]
    }

    #[must_use]
    pub const fn overall_latency_ms(&self) -> u64 {
        self.overall_latency_ms
    }
}

impl Serialize for ScoreRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;

        map.serialize_entry("name", self.artifact.name())?;
        map.serialize_entry("category", &self.artifact.category())?;
        map.serialize_entry("url", self.artifact.url())?;
        map.serialize_entry("net_score", &self.net_score)?;
        map.serialize_entry("net_score_latency", &self.net_score_latency_ms)?;

        for result in &self.metrics {
            map.serialize_entry(&result.id.to_string(), &result.score)?;
            map.serialize_entry(&format!("{}_latency", result.id), &result.latency_ms)?;
        }

        map.serialize_entry("overall_latency", &self.overall_latency_ms)?;
        map.end()
    }
}
