//! Core library for artifact-rank
//!
//! This library consolidates all functionality for the artifact-rank tool, which
//! computes trustworthiness scores for machine-learning artifacts (models,
//! datasets, and code repositories) referenced by URL.
//!
//! # Module Organization
//!
//! - [`artifact`]: Artifact identity, category detection, and URL-file parsing
//! - [`commands`]: Command-line interface and orchestration
//! - [`config`]: Weight-table configuration loading and validation
//! - [`facts`]: Metadata collection from Hugging Face and GitHub
//! - [`metrics`]: Metric definitions and per-category weight tables
//! - [`reports`]: NDJSON output and console summary generation
//! - [`scoring`]: Parallel metric orchestration and score aggregation

/// Result type alias using `ohno::AppError` as the default error type.
pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

pub mod artifact;
pub mod commands;
pub mod config;
pub mod facts;
pub mod metrics;
pub mod reports;
pub mod scoring;
