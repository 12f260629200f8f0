use crate::results::{MatchRecord, ResultSet};
use std::path::Path;

/// Column order of the output file
pub const COLUMNS: [&str; 4] = ["url", "keyword", "ioc", "context"];

/// Writes records as CSV with a header row.
///
/// The header is always written, so an empty result set still yields a file.
/// Missing keyword/ioc values become empty cells.
pub fn write_results(results: &ResultSet, path: &Path) -> Result<(), csv::Error> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;

    writer.write_record(COLUMNS)?;
    for record in results {
        writer.serialize(record)?;
    }
    writer.flush()?;

    Ok(())
}

/// Reads a file produced by [`write_results`]; empty cells come back as `None`
pub fn read_results(path: &Path) -> Result<ResultSet, csv::Error> {
    let mut reader = csv::Reader::from_path(path)?;
    let records = reader
        .deserialize::<MatchRecord>()
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ResultSet::from(records))
}
