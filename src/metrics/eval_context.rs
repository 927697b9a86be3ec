use crate::artifact::{ArtifactDescriptor, Category};
use crate::facts::ArtifactFacts;

/// The read-only view a metric function evaluates against: the artifact's
/// identity plus its request-local metadata snapshot.
///
/// One context is built per scoring request and shared (behind an `Arc`)
/// across all concurrently running metric functions. Nothing in it is
/// mutable, so metrics cannot interfere with their siblings.
#[derive(Debug, Clone)]
pub struct EvalContext {
    pub artifact: ArtifactDescriptor,
    pub facts: ArtifactFacts,
}

impl EvalContext {
    #[must_use]
    pub const fn new(artifact: ArtifactDescriptor, facts: ArtifactFacts) -> Self {
        Self { artifact, facts }
    }

    #[must_use]
    pub const fn category(&self) -> Category {
        self.artifact.category()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.artifact.name()
    }
}
