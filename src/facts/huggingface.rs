//! Hugging Face API client
//!
//! Minimal client for fetching model and dataset metadata: the info record,
//! the repository file tree, and the raw README.

use super::resilient_http::resilient_get;
use super::{ArtifactFacts, FetchOutcome, FileEntry, extract_license};
use chrono::{DateTime, Utc};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::Deserialize;
use std::sync::Arc;

/// Production Hugging Face base URL.
pub const DEFAULT_BASE_URL: &str = "https://huggingface.co";

/// Info record for a model or dataset, with only the fields we need.
#[derive(Debug, Deserialize)]
struct RepoInfo {
    #[serde(default)]
    downloads: u64,
    #[serde(default)]
    likes: u64,
    description: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
    license: Option<String>,
    author: Option<String>,
    #[serde(rename = "lastModified")]
    last_modified: Option<DateTime<Utc>>,
}

/// One entry of a repository tree listing.
#[derive(Debug, Deserialize)]
struct TreeEntry {
    path: String,
    #[serde(default)]
    size: u64,
}

/// Hugging Face API client for models and datasets.
#[derive(Debug, Clone)]
pub struct HuggingFaceClient {
    client: reqwest::Client,
    base_url: String,
}

impl HuggingFaceClient {
    /// Create a new client with an optional API token and base URL.
    pub fn new(token: Option<&str>, base_url: impl Into<String>) -> crate::Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent("artifact-rank");

        if let Some(t) = token {
            let mut auth_val = HeaderValue::from_str(&format!("Bearer {t}"))?;
            auth_val.set_sensitive(true);

            let mut headers = HeaderMap::new();
            let _ = headers.insert(AUTHORIZATION, auth_val);
            builder = builder.default_headers(headers);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: base_url.into(),
        })
    }

    /// Fetch the facts for a model repository.
    pub async fn model_facts(&self, id: &str) -> FetchOutcome<ArtifactFacts> {
        self.repo_facts(id, &format!("{}/api/models/{id}", self.base_url), &format!("{}/{id}", self.base_url))
            .await
    }

    /// Fetch the facts for a dataset repository.
    pub async fn dataset_facts(&self, id: &str) -> FetchOutcome<ArtifactFacts> {
        self.repo_facts(
            id,
            &format!("{}/api/datasets/{id}", self.base_url),
            &format!("{}/datasets/{id}", self.base_url),
        )
        .await
    }

    /// Shared fetch path for models and datasets. The info request decides
    /// Found / NotFound / Error; the tree and README requests degrade to
    /// defaults on failure.
    async fn repo_facts(&self, id: &str, api_url: &str, repo_url: &str) -> FetchOutcome<ArtifactFacts> {
        let tree_url = format!("{api_url}/tree/main");
        let readme_url = format!("{repo_url}/raw/main/README.md");

        let (info, files, readme) = tokio::join!(self.fetch_info(api_url), self.fetch_tree(&tree_url), self.fetch_readme(&readme_url));

        let info = match info {
            FetchOutcome::Found(info) => info,
            FetchOutcome::NotFound => return FetchOutcome::NotFound,
            FetchOutcome::Error(e) => return FetchOutcome::Error(e),
        };

        let license = extract_license(&info.tags, info.license.as_deref(), &readme);

        // The info record names a single author; fall back to the namespace
        // prefix of the repository id.
        let contributors = info
            .author
            .or_else(|| id.split('/').next().map(ToString::to_string))
            .map(|author| vec![author])
            .unwrap_or_default();

        FetchOutcome::Found(ArtifactFacts {
            downloads: info.downloads,
            likes: info.likes,
            description: info.description,
            tags: info.tags,
            license,
            readme,
            files,
            contributors,
            last_modified: info.last_modified,
            ..ArtifactFacts::default()
        })
    }

    async fn fetch_info(&self, url: &str) -> FetchOutcome<RepoInfo> {
        let resp = match resilient_get(&self.client, url).await {
            Ok(resp) => resp,
            Err(e) => return FetchOutcome::Error(Arc::new(e)),
        };

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return FetchOutcome::NotFound;
        }
        if !resp.status().is_success() {
            return FetchOutcome::Error(Arc::new(ohno::app_err!("unexpected HTTP status {} from {url}", resp.status())));
        }

        match resp.json::<RepoInfo>().await {
            Ok(info) => FetchOutcome::Found(info),
            Err(e) => FetchOutcome::Error(Arc::new(e.into())),
        }
    }

    async fn fetch_tree(&self, url: &str) -> Vec<FileEntry> {
        let entries: Vec<TreeEntry> = match resilient_get(&self.client, url).await {
            Ok(resp) if resp.status().is_success() => resp.json().await.unwrap_or_default(),
            Ok(resp) => {
                log::debug!("tree listing unavailable at {url}: HTTP {}", resp.status());
                Vec::new()
            }
            Err(e) => {
                log::debug!("tree listing failed at {url}: {e:#}");
                Vec::new()
            }
        };

        entries
            .into_iter()
            .map(|entry| FileEntry {
                path: entry.path,
                size: entry.size,
            })
            .collect()
    }

    async fn fetch_readme(&self, url: &str) -> String {
        match resilient_get(&self.client, url).await {
            Ok(resp) if resp.status().is_success() => resp.text().await.unwrap_or_default(),
            Ok(resp) => {
                log::debug!("README unavailable at {url}: HTTP {}", resp.status());
                String::new()
            }
            Err(e) => {
                log::debug!("README fetch failed at {url}: {e:#}");
                String::new()
            }
        }
    }
}
