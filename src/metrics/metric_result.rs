use super::MetricId;

/// The outcome of one metric invocation: a score in `[0, 1]` and the
/// wall-clock latency of the computation in milliseconds.
///
/// Every orchestration produces exactly one of these per registered metric.
/// When a metric fails internally or misses the global deadline, a defaulted
/// result (score 0.0) stands in; results are never omitted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricResult {
    pub id: MetricId,
    pub score: f64,
    pub latency_ms: u64,
}

impl MetricResult {
    /// Build a result from a raw score, clamping it into `[0, 1]`.
    /// Non-finite scores collapse to 0.0.
    #[must_use]
    pub fn clamped(id: MetricId, score: f64, latency_ms: u64) -> Self {
        let score = if score.is_finite() { score.clamp(0.0, 1.0) } else { 0.0 };
        Self { id, score, latency_ms }
    }

    /// The substitute result for a failed or unfinished metric.
    #[must_use]
    pub const fn defaulted(id: MetricId, latency_ms: u64) -> Self {
        Self {
            id,
            score: 0.0,
            latency_ms,
        }
    }
}
