//! GitHub API client
//!
//! Minimal client for fetching repository metadata, contributors, and the
//! raw README.

use super::resilient_http::resilient_get;
use super::{ArtifactFacts, FetchOutcome};
use chrono::{DateTime, Utc};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::Deserialize;
use std::sync::Arc;

/// Production GitHub API base URL.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Production base URL for raw repository content.
pub const DEFAULT_RAW_URL: &str = "https://raw.githubusercontent.com";

/// Number of contributors to consider for the bus factor.
const CONTRIBUTOR_LIMIT: usize = 10;

#[derive(Debug, Deserialize)]
struct Repository {
    #[serde(default)]
    stargazers_count: u64,
    #[serde(default)]
    forks_count: u64,
    description: Option<String>,
    license: Option<RepoLicense>,
    language: Option<String>,
    updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
struct RepoLicense {
    spdx_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Contributor {
    login: Option<String>,
}

/// GitHub API client for code repositories.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: reqwest::Client,
    api_url: String,
    raw_url: String,
}

impl GitHubClient {
    /// Create a new client with an optional access token and base URLs.
    pub fn new(token: Option<&str>, api_url: impl Into<String>, raw_url: impl Into<String>) -> crate::Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent("artifact-rank");

        if let Some(t) = token {
            let mut auth_val = HeaderValue::from_str(&format!("token {t}"))?;
            auth_val.set_sensitive(true);

            let mut headers = HeaderMap::new();
            let _ = headers.insert(AUTHORIZATION, auth_val);
            builder = builder.default_headers(headers);
        }

        Ok(Self {
            client: builder.build()?,
            api_url: api_url.into(),
            raw_url: raw_url.into(),
        })
    }

    /// Fetch the facts for a repository identified as `owner/repo`.
    ///
    /// The repo info request decides Found / NotFound / Error; contributor
    /// and README requests degrade to defaults on failure.
    pub async fn repo_facts(&self, id: &str) -> FetchOutcome<ArtifactFacts> {
        let info_url = format!("{}/repos/{id}", self.api_url);
        let contributors_url = format!("{}/repos/{id}/contributors", self.api_url);
        let readme_url = format!("{}/{id}/HEAD/README.md", self.raw_url);

        let (info, contributors, readme) = tokio::join!(
            self.fetch_info(&info_url),
            self.fetch_contributors(&contributors_url),
            self.fetch_readme(&readme_url),
        );

        let info = match info {
            FetchOutcome::Found(info) => info,
            FetchOutcome::NotFound => return FetchOutcome::NotFound,
            FetchOutcome::Error(e) => return FetchOutcome::Error(e),
        };

        let license = info.license.and_then(|l| l.spdx_id).filter(|spdx| !spdx.is_empty() && spdx != "NOASSERTION");

        FetchOutcome::Found(ArtifactFacts {
            stars: info.stargazers_count,
            forks: info.forks_count,
            description: info.description,
            license,
            language: info.language,
            readme,
            contributors,
            last_modified: info.updated_at,
            ..ArtifactFacts::default()
        })
    }

    async fn fetch_info(&self, url: &str) -> FetchOutcome<Repository> {
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

        match resp.json::<Repository>().await {
            Ok(info) => FetchOutcome::Found(info),
            Err(e) => FetchOutcome::Error(Arc::new(e.into())),
        }
    }

    async fn fetch_contributors(&self, url: &str) -> Vec<String> {
        let contributors: Vec<Contributor> = match resilient_get(&self.client, url).await {
            Ok(resp) if resp.status().is_success() => resp.json().await.unwrap_or_default(),
            Ok(resp) => {
                log::debug!("contributors unavailable at {url}: HTTP {}", resp.status());
                Vec::new()
            }
            Err(e) => {
                log::debug!("contributor fetch failed at {url}: {e:#}");
                Vec::new()
            }
        };

        contributors
            .into_iter()
            .filter_map(|c| c.login)
            .take(CONTRIBUTOR_LIMIT)
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
