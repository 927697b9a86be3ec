use std::sync::Arc;

/// The classified result of a provider fetch.
#[derive(Debug, Clone)]
pub enum FetchOutcome<T> {
    /// The artifact exists and its metadata was fetched.
    Found(T),

    /// The artifact was not found at its source (404).
    NotFound,

    /// An error occurred while fetching this artifact's metadata.
    Error(Arc<ohno::AppError>),
}
