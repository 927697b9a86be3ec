//! A tool to score the trustworthiness of machine-learning artifacts.
//!
//! # Overview
//!
//! `artifact-rank` evaluates models, datasets, and code repositories
//! referenced by URL. It fetches metadata from Hugging Face and GitHub, runs
//! a set of trust metrics in parallel, and combines them into a weighted net
//! score per artifact.
//!
//! # Quick Start
//!
//! Put one artifact URL per line in a file:
//!
//! ```text
//! https://huggingface.co/google/gemma-3-270m
//! https://huggingface.co/datasets/squad
//! https://github.com/huggingface/transformers
//! ```
//!
//! Then score them:
//!
//! ```bash
//! artifact-rank score urls.txt
//! ```
//!
//! Each artifact produces one NDJSON line on stdout with the net score, the
//! eight per-metric scores, and their latencies. Add `--summary` for a
//! human-readable recap on stderr.
//!
//! A line may also group a model with its related artifacts, comma-separated
//! with the primary artifact last:
//!
//! ```text
//! https://github.com/google/gemma,https://huggingface.co/datasets/c4,https://huggingface.co/google/gemma-3-270m
//! ```
//!
//! # Configuration
//!
//! The built-in per-category metric weights can be replaced with a TOML file:
//!
//! ```toml
//! [weights.model]
//! ramp_up_time = 0.30
//! bus_factor = 0.20
//! license = 0.20
//! size_score = 0.10
//! dataset_quality = 0.10
//! code_quality = 0.10
//! ```
//!
//! ```bash
//! artifact-rank validate --config weights.toml
//! artifact-rank score urls.txt --config weights.toml
//! ```
//!
//! Each `[weights.<category>]` section fully replaces that category's table
//! and must sum to 1.0; omitted categories keep the defaults.
//!
//! # API Tokens
//!
//! Anonymous access works but is rate-limited. Tokens raise the limits:
//!
//! ```bash
//! export HF_TOKEN=hf_xxxxxxxx
//! export GITHUB_TOKEN=ghp_xxxxxxxx
//! artifact-rank score urls.txt
//! ```

use artifact_rank::Result;
use artifact_rank::commands::{ScoreArgs, ValidateArgs, score_artifacts, validate_config};
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "artifact-rank", version, about)]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(subcommand)]
    command: RankSubcommand,
}

#[derive(Subcommand, Debug)]
enum RankSubcommand {
    /// Score the artifacts listed in a URL file
    Score(ScoreArgs),
    /// Validate a weight configuration file
    Validate(ValidateArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    match &Cli::parse().command {
        RankSubcommand::Score(args) => score_artifacts(args).await,
        RankSubcommand::Validate(args) => validate_config(args),
    }
}
