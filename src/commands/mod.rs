//! Command implementations behind the CLI surface.

mod common;
mod score;
mod validate;

pub use common::LogLevel;
pub use score::{ScoreArgs, score_artifacts};
pub use validate::{ValidateArgs, validate_config};
