use super::orchestrator::{Orchestrator, millis};
use super::{ScoreRecord, aggregate};
use crate::artifact::ArtifactDescriptor;
use crate::facts::{ArtifactFacts, Collector};
use crate::metrics::{CategoryWeights, EvalContext, METRIC_DEFINITIONS, MetricDef, MetricId, MetricResult};
use core::time::Duration;
use std::sync::Arc;
use tokio::time::Instant;

/// The scoring engine: routes an artifact to its category's weight table,
/// fetches its metadata snapshot, runs the applicable metrics through the
/// orchestrator, and aggregates the weighted net score.
///
/// Metrics with zero weight for the category are not run; their slots are
/// filled with neutral defaults (score 0.0, latency 0) so every record keeps
/// the fixed eight-metric shape.
#[derive(Debug)]
pub struct Dispatcher {
    collector: Collector,
    weights: CategoryWeights,
    orchestrator: Orchestrator,
}

impl Dispatcher {
    /// Create a dispatcher with validated weight tables and an optional
    /// per-artifact time budget.
    #[must_use]
    pub fn new(collector: Collector, weights: CategoryWeights, global_timeout: Option<Duration>) -> Self {
        Self {
            collector,
            weights,
            orchestrator: Orchestrator::new(global_timeout),
        }
    }

    /// Score one artifact end to end: fetch its metadata, run the metrics,
    /// aggregate. The record's overall latency covers the fetch as well.
    pub async fn score(&self, artifact: &ArtifactDescriptor) -> ScoreRecord {
        let started = Instant::now();
        let facts = self.collector.fetch(artifact).await;
        self.score_from(artifact, facts, started).await
    }

    /// Score an artifact from an already-fetched metadata snapshot. The
    /// record's overall latency covers only metric execution and aggregation.
    pub async fn score_snapshot(&self, artifact: &ArtifactDescriptor, facts: ArtifactFacts) -> ScoreRecord {
        self.score_from(artifact, facts, Instant::now()).await
    }

    async fn score_from(&self, artifact: &ArtifactDescriptor, facts: ArtifactFacts, started: Instant) -> ScoreRecord {
        let table = self.weights.table(artifact.category());
        let ctx = Arc::new(EvalContext::new(artifact.clone(), facts));

        let applicable: Vec<&'static MetricDef> = METRIC_DEFINITIONS.iter().filter(|def| table.is_applicable(def.id)).collect();
        let computed = self.orchestrator.run(&applicable, &ctx).await;

        // Zero-weight slots keep their neutral defaults.
        let mut metrics = MetricId::ALL.map(|id| MetricResult::defaulted(id, 0));
        for result in computed {
            metrics[result.id.index()] = result;
        }

        let overall_latency_ms = millis(started.elapsed());
        aggregate(artifact.clone(), table, metrics, overall_latency_ms)
    }
}
