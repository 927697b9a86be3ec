//! Parallel metric orchestration and score aggregation
//!
//! This module is the engine of the tool: it fans the registered metric
//! functions out across a bounded worker pool, collects their results under
//! an optional global time budget, and folds the weighted scores into one
//! deterministic net score with per-metric latency accounting.
//!
//! # Implementation Model
//!
//! The [`Dispatcher`] is the entry point: given an artifact and its metadata
//! snapshot, it picks the weight table for the artifact's category, runs the
//! applicable metrics through the [`Orchestrator`], and hands the complete
//! result set to the aggregator, producing a [`ScoreRecord`].
//!
//! The orchestrator dispatches every metric at once; a [`Throttler`] caps how
//! many run simultaneously at `min(8, 2 x available cores)`. Metric bodies
//! run on the blocking pool since they may legitimately block. Collection
//! waits for all dispatched metrics; a global timeout degrades unfinished
//! metrics to defaulted results instead of failing the request, so every
//! orchestration returns exactly one result per registered metric.

mod aggregator;
mod dispatcher;
mod orchestrator;
mod score_record;
mod throttler;

pub use aggregator::aggregate;
pub use dispatcher::Dispatcher;
pub use orchestrator::{MAX_WORKERS, Orchestrator, worker_limit};
pub use score_record::ScoreRecord;
pub use throttler::Throttler;
