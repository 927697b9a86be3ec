use super::{ArtifactDescriptor, Category, LinkedArtifacts};
use ohno::IntoAppError;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Parse a URL file into artifact descriptors.
///
/// The file contains one artifact per line. A line is either a single URL, or
/// a comma-separated group of URLs where the last URL is the primary artifact
/// and the preceding ones are its linked dataset/code artifacts. Blank lines
/// are skipped; lines that don't classify as any artifact category are
/// reported via the log and skipped, per the graceful-degradation contract.
///
/// # Errors
///
/// Returns an error if the file cannot be read. Unparseable individual lines
/// are never fatal.
pub fn parse_url_file(path: impl AsRef<Path>) -> crate::Result<Vec<ArtifactDescriptor>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).into_app_err_with(|| format!("unable to read URL file '{}'", path.display()))?;

    let mut artifacts = Vec::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match parse_line(line) {
            Ok(descriptor) => artifacts.push(descriptor),
            Err(e) => log::warn!("skipping line '{line}': {e:#}"),
        }
    }

    Ok(artifacts)
}

fn parse_line(line: &str) -> crate::Result<ArtifactDescriptor> {
    let mut descriptors = Vec::new();
    for part in line.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        descriptors.push(ArtifactDescriptor::from_url(part)?);
    }

    let Some(primary) = descriptors.pop() else {
        return Err(ohno::app_err!("line contains no URLs"));
    };

    let mut linked = LinkedArtifacts::default();
    for other in descriptors {
        match other.category() {
            Category::Dataset => linked.dataset_url = Some(Arc::from(other.url())),
            Category::Code => linked.code_url = Some(Arc::from(other.url())),
            Category::Model => {}
        }
    }

    Ok(primary.with_linked(linked))
}
