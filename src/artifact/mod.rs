//! Artifact identity and classification
//!
//! An artifact is a model, dataset, or code repository referenced by URL.
//! This module determines which [`Category`] a URL belongs to, extracts a
//! display name from the URL shape, and parses URL files (one artifact per
//! line) into [`ArtifactDescriptor`] values that the rest of the system
//! operates on.

mod category;
mod descriptor;
mod url_file;

pub use category::Category;
pub use descriptor::{ArtifactDescriptor, LinkedArtifacts};
pub use url_file::parse_url_file;
