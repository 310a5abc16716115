//! Tidy CSV writer.

use std::io::Write;

use covid19_model::TidyRecord;

/// Write records as covid19R tidy CSV, canonical seven-column order with a
/// header row. Null values become empty cells.
pub fn write_tidy_csv<W: Write>(writer: W, records: &[TidyRecord]) -> csv::Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    Ok(())
}
