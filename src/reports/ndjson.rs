use crate::Result;
use crate::scoring::ScoreRecord;
use ohno::IntoAppError;
use std::io::Write;

/// Write one score record as a single NDJSON line.
pub fn write_record<W: Write>(writer: &mut W, record: &ScoreRecord) -> Result<()> {
    serde_json::to_writer(&mut *writer, record).into_app_err("unable to serialize score record")?;
    writeln!(writer).into_app_err("unable to write score record")?;
    Ok(())
}

/// Write a batch of score records, one NDJSON line each, in the given order.
pub fn write_records<W: Write>(writer: &mut W, records: &[ScoreRecord]) -> Result<()> {
    for record in records {
        write_record(writer, record)?;
    }
    Ok(())
}
