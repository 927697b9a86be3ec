use super::{ArtifactFacts, FetchOutcome, GitHubClient, HuggingFaceClient, github, huggingface};
use crate::artifact::{ArtifactDescriptor, Category};

/// Collector for gathering artifact metadata from its source.
///
/// Routes each artifact to the provider matching its category and degrades
/// to a default (empty) snapshot when the source is unavailable, so that a
/// scoring request always has facts to evaluate against.
#[derive(Debug, Clone)]
pub struct Collector {
    hf: HuggingFaceClient,
    gh: GitHubClient,
}

impl Collector {
    /// Create a collector talking to the production Hugging Face and GitHub
    /// endpoints.
    pub fn new(hf_token: Option<&str>, github_token: Option<&str>) -> crate::Result<Self> {
        Ok(Self {
            hf: HuggingFaceClient::new(hf_token, huggingface::DEFAULT_BASE_URL)?,
            gh: GitHubClient::new(github_token, github::DEFAULT_API_URL, github::DEFAULT_RAW_URL)?,
        })
    }

    /// Create a collector with explicit clients (used to point at test
    /// servers).
    #[must_use]
    pub const fn with_clients(hf: HuggingFaceClient, gh: GitHubClient) -> Self {
        Self { hf, gh }
    }

    /// Fetch the metadata snapshot for one artifact.
    ///
    /// Never fails: a missing artifact or provider error is logged and
    /// yields default facts, which score as untrustworthy rather than
    /// aborting the request.
    pub async fn fetch(&self, artifact: &ArtifactDescriptor) -> ArtifactFacts {
        let outcome = match artifact.category() {
            Category::Model => self.hf.model_facts(artifact.id()).await,
            Category::Dataset => self.hf.dataset_facts(artifact.id()).await,
            Category::Code => self.gh.repo_facts(artifact.id()).await,
        };

        match outcome {
            FetchOutcome::Found(facts) => facts,
            FetchOutcome::NotFound => {
                log::warn!("{artifact}: not found at its source, scoring with default facts");
                ArtifactFacts::default()
            }
            FetchOutcome::Error(e) => {
                log::warn!("{artifact}: metadata fetch failed ({e:#}), scoring with default facts");
                ArtifactFacts::default()
            }
        }
    }
}
