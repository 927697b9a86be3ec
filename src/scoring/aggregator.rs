use super::ScoreRecord;
use super::orchestrator::millis;
use crate::artifact::ArtifactDescriptor;
use crate::metrics::{MetricId, MetricResult, WeightTable};
use std::time::Instant;

/// Fold a complete metric result set into a [`ScoreRecord`].
///
/// The weighted sum always iterates in canonical metric order, so the same
/// inputs produce bit-for-bit identical net scores regardless of the order
/// the metrics finished in. The time spent summing is recorded separately as
/// the net-score latency.
#[must_use]
pub fn aggregate(
    artifact: ArtifactDescriptor,
    table: &WeightTable,
    metrics: [MetricResult; MetricId::COUNT],
    overall_latency_ms: u64,
) -> ScoreRecord {
    let start = Instant::now();

    let mut net_score = 0.0;
    for id in MetricId::ALL {
        net_score += metrics[id.index()].score * table.weight(id);
    }

    // Rounding in the sum can nudge the total a hair past 1.0.
    let net_score = net_score.clamp(0.0, 1.0);
    let net_score_latency_ms = millis(start.elapsed());

    ScoreRecord::new(artifact, net_score, net_score_latency_ms, metrics, overall_latency_ms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::Category;
    use crate::metrics::CategoryWeights;

    fn model_artifact() -> ArtifactDescriptor {
        ArtifactDescriptor::new("https://huggingface.co/org/model", Category::Model, "org/model")
    }

    #[test]
    fn test_uniform_scores_yield_that_score() {
        let weights = CategoryWeights::builtin().unwrap();
        let metrics = MetricId::ALL.map(|id| MetricResult::clamped(id, 0.5, 1));

        let record = aggregate(model_artifact(), &weights.model, metrics, 10);

        // Weights sum to 1.0, so a uniform 0.5 across all metrics nets 0.5.
        assert!((record.net_score() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_zero_weight_metrics_do_not_contribute() {
        let weights = CategoryWeights::builtin().unwrap();
        let metrics = MetricId::ALL.map(|id| {
            let score = if id == MetricId::CodeQuality { 1.0 } else { 0.0 };
            MetricResult::clamped(id, score, 1)
        });

        // The dataset table gives code_quality zero weight.
        let record = aggregate(model_artifact(), &weights.dataset, metrics, 10);
        assert_eq!(record.net_score(), 0.0);
    }

    #[test]
    fn test_aggregation_is_deterministic() {
        let weights = CategoryWeights::builtin().unwrap();
        let metrics = MetricId::ALL.map(|id| {
            #[expect(clippy::cast_precision_loss, reason = "metric index is at most seven")]
            let score = 0.1 + 0.09 * id.index() as f64;
            MetricResult::clamped(id, score, 1)
        });

        let first = aggregate(model_artifact(), &weights.model, metrics, 10);
        let second = aggregate(model_artifact(), &weights.model, metrics, 10);

        assert_eq!(first.net_score().to_bits(), second.net_score().to_bits());
    }

    #[test]
    fn test_net_score_never_exceeds_one() {
        let weights = CategoryWeights::builtin().unwrap();
        let metrics = MetricId::ALL.map(|id| MetricResult::clamped(id, 1.0, 1));

        let record = aggregate(model_artifact(), &weights.model, metrics, 10);
        assert!(record.net_score() <= 1.0);
    }

    #[test]
    fn test_latencies_are_carried_through() {
        let weights = CategoryWeights::builtin().unwrap();
        let metrics = MetricId::ALL.map(|id| MetricResult::clamped(id, 0.5, 42));

        let record = aggregate(model_artifact(), &weights.model, metrics, 999);
        assert_eq!(record.overall_latency_ms(), 999);
        assert_eq!(record.metric(MetricId::BusFactor).latency_ms, 42);
    }
}
