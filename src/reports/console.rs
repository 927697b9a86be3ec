use crate::Result;
use crate::scoring::ScoreRecord;
use core::fmt::Write;
use owo_colors::OwoColorize;

const EXCELLENT_THRESHOLD: f64 = 0.8;
const GOOD_THRESHOLD: f64 = 0.6;
const MODERATE_THRESHOLD: f64 = 0.4;

/// The trustworthiness band a net score falls into.
#[must_use]
pub fn rating(net_score: f64) -> &'static str {
    if net_score >= EXCELLENT_THRESHOLD {
        "EXCELLENT"
    } else if net_score >= GOOD_THRESHOLD {
        "GOOD"
    } else if net_score >= MODERATE_THRESHOLD {
        "MODERATE"
    } else {
        "LOW"
    }
}

/// Write a human-readable summary of a scoring run.
///
/// One line per artifact with its net score and rating band, followed by a
/// count footer. Colors are applied only when `color` is set, so the caller
/// decides based on where the output is going.
pub fn generate_summary<W: Write>(records: &[ScoreRecord], color: bool, writer: &mut W) -> Result<()> {
    let name_width = records.iter().map(|r| r.artifact().to_string().len()).max().unwrap_or(0);

    for record in records {
        let label = record.artifact().to_string();
        let net_score = record.net_score();
        write!(writer, "{label:<name_width$}  {net_score:.2}  ")?;
        write_rating(writer, net_score, color)?;
        writeln!(writer, "  ({} ms)", record.overall_latency_ms())?;
    }

    writeln!(writer)?;
    writeln!(writer, "{} artifact(s) scored", records.len())?;
    Ok(())
}

fn write_rating<W: Write>(writer: &mut W, net_score: f64, color: bool) -> Result<()> {
    let label = rating(net_score);
    if !color {
        write!(writer, "{label:<9}")?;
        return Ok(());
    }

    let padded = format!("{label:<9}");
    if net_score >= EXCELLENT_THRESHOLD {
        write!(writer, "{}", padded.green())?;
    } else if net_score >= GOOD_THRESHOLD {
        write!(writer, "{}", padded.cyan())?;
    } else if net_score >= MODERATE_THRESHOLD {
        write!(writer, "{}", padded.yellow())?;
    } else {
        write!(writer, "{}", padded.red())?;
    }
    Ok(())
}
