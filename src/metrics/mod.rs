//! Metric definitions and per-category weight tables
//!
//! This module defines the eight trustworthiness metrics, the static registry
//! that maps each metric id to its compute function, and the weight tables
//! that determine how metric scores combine into a net score per artifact
//! category.
//!
//! # Implementation Model
//!
//! Each metric is a pure function over an [`EvalContext`] (the artifact's
//! descriptor plus its read-only metadata snapshot) returning a raw score.
//! Metric functions never see each other's state and may be invoked in any
//! order or concurrently. Failures inside a metric are represented as `Err`
//! and absorbed by the orchestrator, which substitutes a defaulted
//! [`MetricResult`]; scores outside `[0, 1]` are clamped, not errored.
//!
//! Metric definitions are statically registered in `metric_def.rs` in the
//! canonical metric order, which is also the order metric results appear in
//! every score record regardless of completion order.

mod eval_context;
mod metric_def;
mod metric_id;
mod metric_result;
mod weights;

pub use eval_context::EvalContext;
pub use metric_def::{METRIC_DEFINITIONS, MetricDef, metric_def};
pub use metric_id::MetricId;
pub use metric_result::MetricResult;
pub use weights::{CategoryWeights, WEIGHT_EPSILON, WeightTable};
