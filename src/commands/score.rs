use super::common::{LogLevel, init_logging};
use crate::Result;
use crate::artifact::parse_url_file;
use crate::config::Config;
use crate::facts::Collector;
use crate::metrics::CategoryWeights;
use crate::reports::{generate_summary, write_record};
use crate::scoring::Dispatcher;
use clap::Parser;
use core::time::Duration;
use std::io::{IsTerminal, Write, stderr, stdout};
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct ScoreArgs {
    /// File containing one artifact URL per line
    #[arg(value_name = "URL_FILE")]
    pub url_file: PathBuf,

    /// Path to a weight configuration file
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Per-artifact time budget in seconds; unfinished metrics score 0.0
    #[arg(long, value_name = "SECS")]
    pub timeout_secs: Option<u64>,

    /// Hugging Face API token
    #[arg(long, value_name = "TOKEN", env = "HF_TOKEN")]
    pub hf_token: Option<String>,

    /// GitHub personal access token
    #[arg(long, value_name = "TOKEN", env = "GITHUB_TOKEN")]
    pub github_token: Option<String>,

    /// Print a human-readable summary to stderr after scoring
    #[arg(long)]
    pub summary: bool,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none")]
    pub log_level: LogLevel,
}

/// Score every artifact in the URL file, streaming one NDJSON line per
/// artifact to stdout.
///
/// Unreadable URL files and invalid configuration are fatal; everything after
/// setup degrades per artifact instead of aborting the run.
pub async fn score_artifacts(args: &ScoreArgs) -> Result<()> {
    init_logging(args.log_level);

    let weights = match &args.config {
        Some(path) => Config::load(path)?.category_weights()?,
        None => CategoryWeights::builtin()?,
    };

    let artifacts = parse_url_file(&args.url_file)?;
    let collector = Collector::new(args.hf_token.as_deref(), args.github_token.as_deref())?;
    let global_timeout = args.timeout_secs.map(Duration::from_secs);
    let dispatcher = Dispatcher::new(collector, weights, global_timeout);

    let out = stdout();
    let mut out = out.lock();
    let mut records = Vec::with_capacity(artifacts.len());
    for artifact in &artifacts {
        let record = dispatcher.score(artifact).await;
        write_record(&mut out, &record)?;
        records.push(record);
    }
    out.flush()?;

    if args.summary {
        let mut summary = String::new();
        generate_summary(&records, stderr().is_terminal(), &mut summary)?;
        eprint!("{summary}");
    }

    Ok(())
}
