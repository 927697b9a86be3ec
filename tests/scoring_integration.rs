//! End-to-end scoring tests: URL parsing, mocked metadata sources, the
//! dispatcher, and NDJSON output working together.

use artifact_rank::artifact::{ArtifactDescriptor, Category, parse_url_file};
use artifact_rank::facts::{ArtifactFacts, Collector, FileEntry, GitHubClient, HuggingFaceClient};
use artifact_rank::metrics::{CategoryWeights, MetricId};
use artifact_rank::reports::{write_record, write_records};
use artifact_rank::scoring::Dispatcher;
use serde_json::json;
use std::io::Write as _;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn offline_dispatcher() -> Dispatcher {
    let collector = Collector::new(None, None).unwrap();
    Dispatcher::new(collector, CategoryWeights::builtin().unwrap(), None)
}

fn model_artifact() -> ArtifactDescriptor {
    ArtifactDescriptor::new("https://huggingface.co/org/model", Category::Model, "org/model")
}

fn sample_facts() -> ArtifactFacts {
    ArtifactFacts {
        downloads: 15_000,
        likes: 75,
        description: Some("A capable model".into()),
        readme: "# Model\n\n## Usage\n\nbenchmark results and evaluation accuracy\n".into(),
        license: Some("apache-2.0".into()),
        contributors: vec!["alice".into(), "bob".into(), "carol".into()],
        files: vec![FileEntry {
            path: "model.safetensors".into(),
            size: 150 * 1024 * 1024,
        }],
        ..ArtifactFacts::default()
    }
}

#[tokio::test]
async fn test_every_category_yields_eight_metrics() {
    let dispatcher = offline_dispatcher();
    let artifacts = [
        model_artifact(),
        ArtifactDescriptor::new("https://huggingface.co/datasets/squad", Category::Dataset, "squad"),
        ArtifactDescriptor::new("https://github.com/owner/repo", Category::Code, "owner/repo"),
    ];

    for artifact in &artifacts {
        let record = dispatcher.score_snapshot(artifact, sample_facts()).await;
        assert_eq!(record.metrics().len(), MetricId::COUNT, "{artifact}");
        for (slot, id) in MetricId::ALL.iter().enumerate() {
            assert_eq!(record.metrics()[slot].id, *id, "{artifact}");
        }
    }
}

#[tokio::test]
async fn test_net_score_matches_canonical_weighted_sum() {
    let dispatcher = offline_dispatcher();
    let record = dispatcher.score_snapshot(&model_artifact(), sample_facts()).await;

    let weights = CategoryWeights::builtin().unwrap();
    let mut expected = 0.0;
    for id in MetricId::ALL {
        expected += record.metric(id).score * weights.model.weight(id);
    }

    assert_eq!(record.net_score().to_bits(), expected.clamp(0.0, 1.0).to_bits());
}

#[tokio::test]
async fn test_scores_stay_in_unit_range() {
    let dispatcher = offline_dispatcher();
    let record = dispatcher.score_snapshot(&model_artifact(), sample_facts()).await;

    assert!(record.net_score() >= 0.0 && record.net_score() <= 1.0);
    for result in record.metrics() {
        assert!(result.score >= 0.0 && result.score <= 1.0, "{} = {}", result.id, result.score);
    }
}

#[tokio::test]
async fn test_ndjson_line_has_the_full_key_set() {
    let dispatcher = offline_dispatcher();
    let record = dispatcher.score_snapshot(&model_artifact(), sample_facts()).await;

    let mut buffer = Vec::new();
    write_record(&mut buffer, &record).unwrap();

    let line = String::from_utf8(buffer).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(line.trim_end()).unwrap();
    let object = parsed.as_object().unwrap();

    // name, category, url, net_score + latency, 8 metric score/latency pairs,
    // overall_latency.
    assert_eq!(object.len(), 5 + 2 * MetricId::COUNT + 1);
    assert_eq!(object["name"], "org/model");
    assert_eq!(object["category"], "MODEL");
    assert_eq!(object["url"], "https://huggingface.co/org/model");
    for id in MetricId::ALL {
        assert!(object.contains_key(&id.to_string()), "missing {id}");
        assert!(object.contains_key(&format!("{id}_latency")), "missing {id}_latency");
    }
    assert!(object.contains_key("overall_latency"));
}

#[tokio::test]
async fn test_url_file_to_ndjson_pipeline() {
    let mut url_file = tempfile::NamedTempFile::new().unwrap();
    writeln!(url_file, "https://huggingface.co/org/model").unwrap();
    writeln!(url_file).unwrap();
    writeln!(url_file, "not-a-url").unwrap();
    writeln!(url_file, "https://github.com/owner/repo").unwrap();

    let artifacts = parse_url_file(url_file.path()).unwrap();
    assert_eq!(artifacts.len(), 2);

    let dispatcher = offline_dispatcher();
    let mut records = Vec::new();
    for artifact in &artifacts {
        records.push(dispatcher.score_snapshot(artifact, sample_facts()).await);
    }

    let mut buffer = Vec::new();
    write_records(&mut buffer, &records).unwrap();

    let output = String::from_utf8(buffer).unwrap();
    let names: Vec<String> = output
        .lines()
        .map(|line| serde_json::from_str::<serde_json::Value>(line).unwrap()["name"].as_str().unwrap().to_string())
        .collect();

    // Output order follows input order, with the bad line dropped.
    assert_eq!(names, vec!["org/model".to_string(), "owner/repo".to_string()]);
}

#[tokio::test]
async fn test_end_to_end_with_mocked_sources() {
    let hf_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/models/org/model"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "downloads": 80_000,
            "likes": 400,
            "tags": ["license:apache-2.0"],
            "author": "org"
        })))
        .mount(&hf_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/org/model/raw/main/README.md"))
        .respond_with(ResponseTemplate::new(200).set_body_string(format!(
            "# Model\n\n## Usage\n\nbenchmark evaluation accuracy results\n{}",
            "details ".repeat(400)
        )))
        .mount(&hf_server)
        .await;

    let gh_server = MockServer::start().await;
    let collector = Collector::with_clients(
        HuggingFaceClient::new(None, hf_server.uri()).unwrap(),
        GitHubClient::new(None, gh_server.uri(), gh_server.uri()).unwrap(),
    );
    let dispatcher = Dispatcher::new(collector, CategoryWeights::builtin().unwrap(), None);

    let record = dispatcher.score(&model_artifact()).await;

    assert_eq!(record.metric(MetricId::License).score, 1.0);
    assert!(record.metric(MetricId::RampUpTime).score > 0.9);
    assert!(record.net_score() > 0.3);
    assert!(record.net_score() <= 1.0);
    // The overall latency covers the fetch, so it bounds every metric latency.
    for result in record.metrics() {
        assert!(result.latency_ms <= record.overall_latency_ms());
    }
}

#[tokio::test]
async fn test_unreachable_source_still_produces_a_record() {
    let hf_server = MockServer::start().await;
    let gh_server = MockServer::start().await;
    let collector = Collector::with_clients(
        HuggingFaceClient::new(None, hf_server.uri()).unwrap(),
        GitHubClient::new(None, gh_server.uri(), gh_server.uri()).unwrap(),
    );
    let dispatcher = Dispatcher::new(collector, CategoryWeights::builtin().unwrap(), None);

    let record = dispatcher.score(&model_artifact()).await;

    assert_eq!(record.metrics().len(), MetricId::COUNT);
    // Default facts score poorly but never crash the pipeline.
    assert!(record.net_score() < 0.3);
}
