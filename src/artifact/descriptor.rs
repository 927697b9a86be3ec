use super::Category;
use core::fmt::{Display, Formatter, Result as FmtResult};
use ohno::app_err;
use regex::Regex;
use std::sync::{Arc, LazyLock};

static DATASET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"huggingface\.co/datasets/([\w.-]+(?:/[\w.-]+)?)").expect("dataset pattern is valid")
});

static MODEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"huggingface\.co/([\w.-]+/[\w.-]+)").expect("model pattern is valid"));

static CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"github\.com/([\w.-]+)/([\w.-]+)").expect("code pattern is valid"));

/// URLs of artifacts associated with a primary artifact, such as the dataset a
/// model was trained on and the repository holding its training code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkedArtifacts {
    pub dataset_url: Option<Arc<str>>,
    pub code_url: Option<Arc<str>>,
}

impl LinkedArtifacts {
    /// Returns `true` if no linked artifacts are recorded.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.dataset_url.is_none() && self.code_url.is_none()
    }
}

/// Identifies one scored entity: its URL, category, display name, and any
/// linked artifacts. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactDescriptor {
    url: Arc<str>,
    category: Category,
    name: Arc<str>,
    linked: LinkedArtifacts,
}

impl ArtifactDescriptor {
    /// Classify a URL and derive the artifact's name from its shape.
    ///
    /// Hugging Face dataset URLs are checked before model URLs since the model
    /// pattern also matches `huggingface.co/datasets/owner/name`.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not a recognizable model, dataset, or
    /// code URL.
    pub fn from_url(url: &str) -> crate::Result<Self> {
        let parsed = url::Url::parse(url).map_err(|e| app_err!("invalid URL '{url}': {e}"))?;
        if parsed.host_str().is_none() {
            return Err(app_err!("URL '{url}' has no host"));
        }

        if let Some(captures) = DATASET_RE.captures(url) {
            return Ok(Self::new(url, Category::Dataset, &captures[1]));
        }

        if let Some(captures) = CODE_RE.captures(url) {
            let name = format!("{}/{}", &captures[1], &captures[2]);
            return Ok(Self::new(url, Category::Code, &name));
        }

        if let Some(captures) = MODEL_RE.captures(url) {
            return Ok(Self::new(url, Category::Model, &captures[1]));
        }

        Err(app_err!("URL '{url}' is not a model, dataset, or code URL"))
    }

    /// Create a descriptor with an explicit category and name.
    #[must_use]
    pub fn new(url: &str, category: Category, name: &str) -> Self {
        Self {
            url: Arc::from(url),
            category,
            name: Arc::from(name),
            linked: LinkedArtifacts::default(),
        }
    }

    /// Attach linked artifacts, consuming and returning the descriptor.
    #[must_use]
    pub fn with_linked(mut self, linked: LinkedArtifacts) -> Self {
        self.linked = linked;
        self
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn linked(&self) -> &LinkedArtifacts {
        &self.linked
    }

    /// The repository-path portion of the name (e.g. `google/gemma-3-270m`),
    /// used when building API request paths.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.name
    }
}

impl Display for ArtifactDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} ({})", self.name, self.category)
    }
}
