//! Result reporting
//!
//! Two output surfaces: machine-readable NDJSON (one object per artifact, in
//! input order, written to stdout) and an optional human-readable console
//! summary with colorized ratings.

mod console;
mod ndjson;

pub use console::{generate_summary, rating};
pub use ndjson::{write_record, write_records};
