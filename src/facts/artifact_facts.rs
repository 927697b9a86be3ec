use chrono::{DateTime, Utc};
use regex::Regex;
use std::sync::LazyLock;

/// Default artifact size assumed when no file listing is available.
/// Conservative: large enough to penalize constrained deployment targets.
const DEFAULT_SIZE_MB: f64 = 1000.0;

static README_LICENSE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)license:\s*([^\n]+)").expect("license pattern is valid"));

/// One entry in an artifact's file listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileEntry {
    pub path: String,
    pub size: u64,
}

/// The request-local metadata snapshot for one artifact.
///
/// Fields default to empty/zero when the corresponding source is unavailable;
/// metrics degrade around missing data rather than failing.
#[derive(Debug, Clone, Default)]
pub struct ArtifactFacts {
    pub downloads: u64,
    pub likes: u64,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub license: Option<String>,
    pub readme: String,
    pub files: Vec<FileEntry>,
    pub contributors: Vec<String>,
    pub stars: u64,
    pub forks: u64,
    pub language: Option<String>,
    pub last_modified: Option<DateTime<Utc>>,
}

impl ArtifactFacts {
    /// Total size of the artifact's files in megabytes, falling back to a
    /// conservative default when no file listing was fetched.
    #[must_use]
    pub fn model_size_mb(&self) -> f64 {
        if self.files.is_empty() {
            return DEFAULT_SIZE_MB;
        }

        let total_bytes: u64 = self.files.iter().map(|f| f.size).sum();
        #[expect(clippy::cast_precision_loss, reason = "artifact sizes are far below 2^52 bytes")]
        let total = total_bytes as f64;
        total / (1024.0 * 1024.0)
    }
}

/// Extract a license identifier using three strategies, in order:
/// `license:` tags, the direct license field, and a `license:` line in the
/// README (the format Hugging Face model cards embed in front matter).
#[must_use]
pub fn extract_license(tags: &[String], field: Option<&str>, readme: &str) -> Option<String> {
    for tag in tags {
        if let Some(value) = tag.strip_prefix("license:") {
            let value = value.trim();
            if !value.is_empty() {
                return Some(value.to_string());
            }
        }
    }

    if let Some(value) = field {
        let value = value.trim();
        if !value.is_empty() {
            return Some(value.to_string());
        }
    }

    README_LICENSE_RE
        .captures(readme)
        .map(|captures| captures[1].trim().to_string())
        .filter(|value| !value.is_empty())
}
