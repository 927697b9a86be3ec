//! Metadata collection for artifacts
//!
//! This module gathers the raw material the metrics evaluate: downloads,
//! likes, license, tags, README content, file listings, contributors, and
//! repository statistics. Models and datasets come from the Hugging Face API;
//! code repositories come from the GitHub API.
//!
//! # Implementation Model
//!
//! Each category has a provider method that issues its sub-requests (info,
//! file tree / contributors, README) concurrently and folds them into one
//! [`ArtifactFacts`] snapshot. The top-level info request is classified as
//! Found / NotFound / Error via [`FetchOutcome`]; secondary requests degrade
//! to defaults on failure so that partial data availability never aborts a
//! scoring request.
//!
//! Facts are request-local: every scoring request owns its own snapshot,
//! passed read-only to each metric. Nothing here is cached or shared across
//! requests.

mod artifact_facts;
mod collector;
mod fetch_outcome;
mod github;
mod huggingface;
pub(crate) mod resilient_http;

pub use artifact_facts::{ArtifactFacts, FileEntry, extract_license};
pub use collector::Collector;
pub use fetch_outcome::FetchOutcome;
pub use github::GitHubClient;
pub use huggingface::HuggingFaceClient;
