use super::Throttler;
use crate::metrics::{EvalContext, MetricDef, MetricResult};
use core::time::Duration;
use ohno::app_err;
use std::num::NonZero;
use std::sync::Arc;
use std::thread::available_parallelism;
use tokio::sync::mpsc;
use tokio::time::Instant;

/// Hard ceiling on the number of concurrently running metrics. There are
/// never more metrics in flight than the registry holds, so a larger pool
/// would sit idle.
pub const MAX_WORKERS: usize = crate::metrics::MetricId::COUNT;

/// The worker-pool size for this host: twice the available cores, capped at
/// [`MAX_WORKERS`].
#[must_use]
pub fn worker_limit() -> usize {
    let cores = available_parallelism().map_or(1, NonZero::get);
    MAX_WORKERS.min(cores.saturating_mul(2))
}

/// Runs a set of metrics concurrently and collects one result per metric.
///
/// Every dispatched metric yields exactly one [`MetricResult`]: a clamped
/// score on success, a defaulted (0.0) result when the metric errors, panics,
/// or misses the global deadline. Individual metric failures never abort the
/// orchestration.
#[derive(Debug)]
pub struct Orchestrator {
    throttler: Arc<Throttler>,
    global_timeout: Option<Duration>,
}

impl Orchestrator {
    /// Create an orchestrator sized for this host via [`worker_limit`].
    #[must_use]
    pub fn new(global_timeout: Option<Duration>) -> Self {
        Self {
            throttler: Throttler::new(worker_limit()),
            global_timeout,
        }
    }

    /// Create an orchestrator with an explicit worker-pool size.
    ///
    /// # Errors
    ///
    /// Returns an error if `workers` is zero, since no metric could ever
    /// acquire a slot.
    pub fn with_workers(workers: usize, global_timeout: Option<Duration>) -> crate::Result<Self> {
        if workers == 0 {
            return Err(app_err!("worker pool size must be at least 1"));
        }

        Ok(Self {
            throttler: Throttler::new(workers),
            global_timeout,
        })
    }

    /// Run every metric in `defs` against the shared context.
    ///
    /// Results come back in the same order as `defs`. Metric bodies run on
    /// the blocking pool since they may do CPU-bound work; the throttler caps
    /// how many run at once.
    pub async fn run(&self, defs: &[&'static MetricDef], ctx: &Arc<EvalContext>) -> Vec<MetricResult> {
        let started = Instant::now();
        let deadline = self.global_timeout.map(|budget| started + budget);
        let (tx, mut rx) = mpsc::unbounded_channel();

        for (slot, def) in defs.iter().enumerate() {
            let tx = tx.clone();
            let throttler = Arc::clone(&self.throttler);
            let ctx = Arc::clone(ctx);
            let def = *def;
            drop(tokio::spawn(async move {
                let _permit = throttler.acquire().await;
                let start = Instant::now();
                let outcome = tokio::task::spawn_blocking(move || (def.compute)(&ctx)).await;
                let latency_ms = millis(start.elapsed());

                let result = match outcome {
                    Ok(Ok(score)) => MetricResult::clamped(def.id, score, latency_ms),
                    Ok(Err(e)) => {
                        log::debug!("metric '{}' failed ({e:#}), scoring 0.0", def.id);
                        MetricResult::defaulted(def.id, latency_ms)
                    }
                    Err(e) => {
                        log::debug!("metric '{}' aborted ({e}), scoring 0.0", def.id);
                        MetricResult::defaulted(def.id, latency_ms)
                    }
                };

                _ = tx.send((slot, result));
            }));
        }
        drop(tx);

        let mut slots: Vec<Option<MetricResult>> = vec![None; defs.len()];
        let mut received = 0;
        while received < defs.len() {
            let next = match deadline {
                Some(deadline) => match tokio::time::timeout_at(deadline, rx.recv()).await {
                    Ok(next) => next,
                    Err(_) => break,
                },
                None => rx.recv().await,
            };

            let Some((slot, result)) = next else { break };
            slots[slot] = Some(result);
            received += 1;
        }

        let elapsed_ms = millis(started.elapsed());
        defs.iter()
            .zip(slots)
            .map(|(def, slot)| {
                slot.unwrap_or_else(|| {
                    log::warn!("metric '{}' missed the global deadline, scoring 0.0", def.id);
                    MetricResult::defaulted(def.id, elapsed_ms)
                })
            })
            .collect()
    }
}

/// Saturating millisecond conversion for latency reporting.
pub(crate) fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::{ArtifactDescriptor, Category};
    use crate::facts::ArtifactFacts;
    use crate::metrics::MetricId;
    use ohno::app_err;

    static FAST: MetricDef = MetricDef {
        id: MetricId::RampUpTime,
        description: "immediate fixed score",
        compute: |_| Ok(0.5),
    };

    static SLOW: MetricDef = MetricDef {
        id: MetricId::BusFactor,
        description: "sleeps 50ms, then scores",
        compute: |_| {
            std::thread::sleep(Duration::from_millis(50));
            Ok(1.0)
        },
    };

    static VERY_SLOW: MetricDef = MetricDef {
        id: MetricId::License,
        description: "sleeps well past any test deadline",
        compute: |_| {
            std::thread::sleep(Duration::from_millis(1500));
            Ok(1.0)
        },
    };

    static FAILING: MetricDef = MetricDef {
        id: MetricId::CodeQuality,
        description: "always errors",
        compute: |_| Err(app_err!("no data")),
    };

    static OUT_OF_RANGE: MetricDef = MetricDef {
        id: MetricId::DatasetQuality,
        description: "scores above the valid range",
        compute: |_| Ok(3.5),
    };

    fn test_context() -> Arc<EvalContext> {
        let artifact = ArtifactDescriptor::new("https://huggingface.co/org/model", Category::Model, "org/model");
        Arc::new(EvalContext::new(artifact, ArtifactFacts::default()))
    }

    #[test]
    fn test_worker_limit_is_bounded() {
        let limit = worker_limit();
        assert!(limit >= 1);
        assert!(limit <= MAX_WORKERS);
    }

    #[test]
    fn test_zero_workers_is_rejected() {
        assert!(Orchestrator::with_workers(0, None).is_err());
    }

    #[tokio::test]
    async fn test_one_result_per_metric_in_order() {
        let orchestrator = Orchestrator::new(None);
        let defs: Vec<&'static MetricDef> = vec![&FAST, &SLOW, &FAILING];

        let results = orchestrator.run(&defs, &test_context()).await;

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].id, MetricId::RampUpTime);
        assert_eq!(results[1].id, MetricId::BusFactor);
        assert_eq!(results[2].id, MetricId::CodeQuality);
    }

    #[tokio::test]
    async fn test_failing_metric_defaults_to_zero() {
        let orchestrator = Orchestrator::new(None);
        let results = orchestrator.run(&[&FAST, &FAILING], &test_context()).await;

        assert_eq!(results[0].score, 0.5);
        assert_eq!(results[1].score, 0.0);
    }

    #[tokio::test]
    async fn test_out_of_range_score_is_clamped() {
        let orchestrator = Orchestrator::new(None);
        let results = orchestrator.run(&[&OUT_OF_RANGE], &test_context()).await;

        assert_eq!(results[0].score, 1.0);
    }

    #[tokio::test]
    async fn test_metrics_run_in_parallel() {
        let orchestrator = Orchestrator::with_workers(8, None).unwrap();
        let defs: Vec<&'static MetricDef> = vec![&SLOW; 4];

        let start = Instant::now();
        let results = orchestrator.run(&defs, &test_context()).await;
        let elapsed = start.elapsed();

        assert_eq!(results.len(), 4);
        // Four 50ms metrics run concurrently, so the wall-clock time must be
        // well under the 200ms a sequential run would take.
        assert!(elapsed < Duration::from_millis(150), "took {elapsed:?}");
    }

    #[tokio::test]
    async fn test_deadline_degrades_unfinished_metrics() {
        let orchestrator = Orchestrator::new(Some(Duration::from_millis(100)));
        let results = orchestrator.run(&[&FAST, &VERY_SLOW], &test_context()).await;

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].score, 0.5);
        assert_eq!(results[1].id, MetricId::License);
        assert_eq!(results[1].score, 0.0);
        assert!(results[1].latency_ms >= 100);
    }

    #[tokio::test]
    async fn test_single_worker_still_completes_all_metrics() {
        let orchestrator = Orchestrator::with_workers(1, None).unwrap();
        let defs: Vec<&'static MetricDef> = vec![&FAST, &SLOW, &OUT_OF_RANGE];

        let results = orchestrator.run(&defs, &test_context()).await;
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|r| r.score > 0.0));
    }

    #[tokio::test]
    async fn test_empty_metric_set_yields_no_results() {
        let orchestrator = Orchestrator::new(None);
        let results = orchestrator.run(&[], &test_context()).await;
        assert!(results.is_empty());
    }
}
