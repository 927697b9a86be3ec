use super::{EvalContext, MetricId};

/// A statically registered metric: its id, a human-readable description, and
/// the compute function producing a raw score.
///
/// Compute functions return `Err` for internal faults (missing data they
/// cannot degrade around, parse failures); the orchestrator absorbs those
/// into a defaulted result. Returned scores may fall outside `[0, 1]` and are
/// clamped at the boundary, never errored.
#[derive(Debug)]
pub struct MetricDef {
    pub id: MetricId,
    pub description: &'static str,
    pub compute: fn(&EvalContext) -> crate::Result<f64>,
}

macro_rules! metric_def {
    ($id:ident, $description:expr, $compute:expr) => {
        MetricDef {
            id: MetricId::$id,
            description: $description,
            compute: $compute,
        }
    };
}

/// All registered metrics, in canonical metric order.
pub const METRIC_DEFINITIONS: [MetricDef; MetricId::COUNT] = [
    metric_def!(
        RampUpTime,
        "How quickly an engineer can start using the artifact, from README depth",
        ramp_up_time
    ),
    metric_def!(
        BusFactor,
        "Contributor redundancy; how many maintainers the project depends on",
        bus_factor
    ),
    metric_def!(
        PerformanceClaims,
        "Whether performance claims are backed by benchmark or evaluation evidence",
        performance_claims
    ),
    metric_def!(
        License,
        "License compatibility with LGPL-2.1 for commercial reuse",
        license
    ),
    metric_def!(
        SizeScore,
        "Hardware compatibility of the artifact's size across deployment targets",
        size_score
    ),
    metric_def!(
        DatasetAndCodeScore,
        "Availability of the training dataset and code alongside the artifact",
        dataset_and_code_score
    ),
    metric_def!(
        DatasetQuality,
        "Dataset adoption and documentation signals (downloads, likes, description)",
        dataset_quality
    ),
    metric_def!(
        CodeQuality,
        "Code repository health signals (stars, forks, license, language)",
        code_quality
    ),
];

/// Look up a metric definition by id.
#[must_use]
pub fn metric_def(id: MetricId) -> &'static MetricDef {
    &METRIC_DEFINITIONS[id.index()]
}

/// README length at which ramp-up is considered effortless.
const RAMP_UP_SATURATION_BYTES: f64 = 3000.0;

fn ramp_up_time(ctx: &EvalContext) -> crate::Result<f64> {
    let readme = &ctx.facts.readme;
    if readme.is_empty() {
        return Ok(0.0);
    }

    #[expect(clippy::cast_precision_loss, reason = "README sizes are far below 2^52 bytes")]
    let mut score = (readme.len() as f64 / RAMP_UP_SATURATION_BYTES).min(0.8);

    // Section structure is the difference between a dump and a guide.
    if readme.contains("## ") {
        score += 0.2;
    }

    Ok(score)
}

/// Contributor count at which the project no longer hinges on one person.
const BUS_FACTOR_SATURATION: f64 = 5.0;

fn bus_factor(ctx: &EvalContext) -> crate::Result<f64> {
    #[expect(clippy::cast_precision_loss, reason = "contributor lists are capped at ten entries")]
    let contributors = ctx.facts.contributors.len() as f64;
    Ok(contributors / BUS_FACTOR_SATURATION)
}

const EVIDENCE_KEYWORDS: [&str; 6] = ["benchmark", "evaluation", "accuracy", "f1", "leaderboard", "results"];

fn performance_claims(ctx: &EvalContext) -> crate::Result<f64> {
    let readme = ctx.facts.readme.to_lowercase();
    let hits = EVIDENCE_KEYWORDS.iter().filter(|keyword| readme.contains(*keyword)).count();

    #[expect(clippy::cast_precision_loss, reason = "keyword hit count is at most six")]
    let mut score = hits as f64 / 4.0;
    if ctx.facts.tags.iter().any(|tag| tag.starts_with("arxiv:")) {
        score += 0.25;
    }

    Ok(score)
}

/// Licenses compatible with LGPL-2.1 for reuse purposes.
const COMPATIBLE_LICENSES: [&str; 8] = [
    "apache-2.0",
    "mit",
    "bsd",
    "bsd-2-clause",
    "bsd-3-clause",
    "lgpl-2.1",
    "lgpl-2.1-only",
    "lgpl-2.1-or-later",
];

fn license(ctx: &EvalContext) -> crate::Result<f64> {
    let Some(declared) = ctx.facts.license.as_deref() else {
        return Ok(0.0);
    };

    let normalized = declared.trim().to_lowercase();
    if normalized.is_empty() {
        return Ok(0.0);
    }

    if COMPATIBLE_LICENSES.contains(&normalized.as_str()) {
        Ok(1.0)
    } else {
        // A declared but incompatible (or unrecognized) license is better
        // than no license at all.
        Ok(0.5)
    }
}

/// Hardware capacity thresholds in MB: full score at zero size, tapering
/// linearly to zero at the threshold.
const HARDWARE_THRESHOLDS_MB: [(&str, f64); 4] = [
    ("raspberry_pi", 200.0),
    ("jetson_nano", 500.0),
    ("desktop_pc", 5000.0),
    ("aws_server", 50000.0),
];

fn size_score(ctx: &EvalContext) -> crate::Result<f64> {
    let size_mb = ctx.facts.model_size_mb();

    let total: f64 = HARDWARE_THRESHOLDS_MB
        .iter()
        .map(|(_, max_mb)| (1.0 - size_mb / max_mb).clamp(0.0, 1.0))
        .sum();

    #[expect(clippy::cast_precision_loss, reason = "threshold table has four entries")]
    let count = HARDWARE_THRESHOLDS_MB.len() as f64;
    Ok(total / count)
}

fn dataset_and_code_score(ctx: &EvalContext) -> crate::Result<f64> {
    let linked = ctx.artifact.linked();
    let mut score = 0.0;
    if linked.dataset_url.is_some() {
        score += 0.5;
    }
    if linked.code_url.is_some() {
        score += 0.5;
    }
    Ok(score)
}

fn dataset_quality(ctx: &EvalContext) -> crate::Result<f64> {
    let facts = &ctx.facts;

    let mut score: f64 = 2.0;
    score += match facts.downloads {
        d if d > 10_000 => 3.0,
        d if d > 1_000 => 2.0,
        d if d > 100 => 1.0,
        _ => 0.0,
    };
    score += match facts.likes {
        l if l > 50 => 2.0,
        l if l > 10 => 1.0,
        _ => 0.0,
    };
    if facts.description.as_deref().is_some_and(|d| !d.is_empty()) {
        score += 2.0;
    }

    Ok(score.min(10.0) / 10.0)
}

fn code_quality(ctx: &EvalContext) -> crate::Result<f64> {
    let facts = &ctx.facts;

    let mut score: f64 = 2.0;
    score += match facts.stars {
        s if s > 1_000 => 3.0,
        s if s > 100 => 2.0,
        s if s > 10 => 1.0,
        _ => 0.0,
    };
    score += match facts.forks {
        f if f > 100 => 1.0,
        f if f > 10 => 0.5,
        _ => 0.0,
    };
    if facts.description.as_deref().is_some_and(|d| !d.is_empty()) {
        score += 2.0;
    }
    if facts.license.as_deref().is_some_and(|l| !l.is_empty()) {
        score += 1.0;
    }
    if facts.language.as_deref().is_some_and(|l| !l.is_empty()) {
        score += 1.0;
    }

    Ok(score.min(10.0) / 10.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::{ArtifactDescriptor, Category, LinkedArtifacts};
    use crate::facts::{ArtifactFacts, FileEntry};
    use std::sync::Arc;

    fn context(category: Category, facts: ArtifactFacts) -> EvalContext {
        let artifact = match category {
            Category::Model => ArtifactDescriptor::new("https://huggingface.co/org/model", category, "org/model"),
            Category::Dataset => ArtifactDescriptor::new("https://huggingface.co/datasets/org/data", category, "org/data"),
            Category::Code => ArtifactDescriptor::new("https://github.com/org/repo", category, "org/repo"),
        };
        EvalContext::new(artifact, facts)
    }

    #[test]
    fn test_registry_is_in_canonical_order() {
        for (position, def) in METRIC_DEFINITIONS.iter().enumerate() {
            assert_eq!(def.id.index(), position, "metric '{}' is out of order", def.id);
        }
    }

    #[test]
    fn test_registry_lookup_by_id() {
        for id in MetricId::ALL {
            assert_eq!(metric_def(id).id, id);
        }
    }

    #[test]
    fn test_all_metrics_have_descriptions() {
        for def in &METRIC_DEFINITIONS {
            assert!(def.description.len() > 10, "metric '{}' needs a real description", def.id);
        }
    }

    #[test]
    fn test_ramp_up_empty_readme_scores_zero() {
        let ctx = context(Category::Model, ArtifactFacts::default());
        assert_eq!(ramp_up_time(&ctx).unwrap(), 0.0);
    }

    #[test]
    fn test_ramp_up_long_structured_readme_scores_full() {
        let facts = ArtifactFacts {
            readme: format!("## Usage\n{}", "x".repeat(4000)),
            ..ArtifactFacts::default()
        };
        let ctx = context(Category::Model, facts);
        assert_eq!(ramp_up_time(&ctx).unwrap(), 1.0);
    }

    #[test]
    fn test_bus_factor_scales_with_contributors() {
        let facts = ArtifactFacts {
            contributors: vec!["a".into(), "b".into()],
            ..ArtifactFacts::default()
        };
        let ctx = context(Category::Code, facts);
        assert_eq!(bus_factor(&ctx).unwrap(), 0.4);
    }

    #[test]
    fn test_bus_factor_saturates_above_clamp_boundary() {
        let facts = ArtifactFacts {
            contributors: (0..10).map(|i| format!("user{i}")).collect(),
            ..ArtifactFacts::default()
        };
        let ctx = context(Category::Code, facts);
        // Raw score is 2.0; clamping to [0, 1] happens at the result boundary.
        assert_eq!(bus_factor(&ctx).unwrap(), 2.0);
    }

    #[test]
    fn test_performance_claims_counts_evidence_keywords() {
        let facts = ArtifactFacts {
            readme: "Benchmark results show 92% accuracy on the evaluation set".into(),
            ..ArtifactFacts::default()
        };
        let ctx = context(Category::Model, facts);
        assert_eq!(performance_claims(&ctx).unwrap(), 1.0);
    }

    #[test]
    fn test_license_compatible_scores_full() {
        let facts = ArtifactFacts {
            license: Some("apache-2.0".into()),
            ..ArtifactFacts::default()
        };
        let ctx = context(Category::Model, facts);
        assert_eq!(license(&ctx).unwrap(), 1.0);
    }

    #[test]
    fn test_license_is_case_insensitive() {
        let facts = ArtifactFacts {
            license: Some("MIT".into()),
            ..ArtifactFacts::default()
        };
        let ctx = context(Category::Code, facts);
        assert_eq!(license(&ctx).unwrap(), 1.0);
    }

    #[test]
    fn test_license_unrecognized_scores_half() {
        let facts = ArtifactFacts {
            license: Some("proprietary".into()),
            ..ArtifactFacts::default()
        };
        let ctx = context(Category::Model, facts);
        assert_eq!(license(&ctx).unwrap(), 0.5);
    }

    #[test]
    fn test_license_missing_scores_zero() {
        let ctx = context(Category::Model, ArtifactFacts::default());
        assert_eq!(license(&ctx).unwrap(), 0.0);
    }

    #[test]
    fn test_size_score_unknown_size_uses_conservative_default() {
        // Default 1000 MB: rpi 0.0, jetson 0.0, desktop 0.8, aws 0.98
        let ctx = context(Category::Model, ArtifactFacts::default());
        let score = size_score(&ctx).unwrap();
        assert!((score - 0.445).abs() < 1e-9, "got {score}");
    }

    #[test]
    fn test_size_score_tiny_artifact_scores_full() {
        let facts = ArtifactFacts {
            files: vec![FileEntry {
                path: "model.safetensors".into(),
                size: 0,
            }],
            ..ArtifactFacts::default()
        };
        let ctx = context(Category::Model, facts);
        assert_eq!(size_score(&ctx).unwrap(), 1.0);
    }

    #[test]
    fn test_dataset_and_code_score_rewards_each_link() {
        let artifact = ArtifactDescriptor::new("https://huggingface.co/org/model", Category::Model, "org/model").with_linked(
            LinkedArtifacts {
                dataset_url: Some(Arc::from("https://huggingface.co/datasets/squad")),
                code_url: None,
            },
        );
        let ctx = EvalContext::new(artifact, ArtifactFacts::default());
        assert_eq!(dataset_and_code_score(&ctx).unwrap(), 0.5);
    }

    #[test]
    fn test_dataset_quality_popular_documented_dataset() {
        let facts = ArtifactFacts {
            downloads: 50_000,
            likes: 120,
            description: Some("A reading comprehension dataset".into()),
            ..ArtifactFacts::default()
        };
        let ctx = context(Category::Dataset, facts);
        // 2 base + 3 downloads + 2 likes + 2 description = 9 of 10
        assert_eq!(dataset_quality(&ctx).unwrap(), 0.9);
    }

    #[test]
    fn test_code_quality_popular_repo_saturates() {
        let facts = ArtifactFacts {
            stars: 5_000,
            forks: 900,
            description: Some("Transformers library".into()),
            license: Some("apache-2.0".into()),
            language: Some("Python".into()),
            ..ArtifactFacts::default()
        };
        let ctx = context(Category::Code, facts);
        assert_eq!(code_quality(&ctx).unwrap(), 1.0);
    }

    #[test]
    fn test_code_quality_bare_repo_gets_base_score() {
        let ctx = context(Category::Code, ArtifactFacts::default());
        assert_eq!(code_quality(&ctx).unwrap(), 0.2);
    }
}
