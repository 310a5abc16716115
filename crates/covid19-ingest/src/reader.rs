use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use csv::ReaderBuilder;
use tracing::debug;

use covid19_reshape::{Column, ColumnKind, WideTable};

use crate::error::{IngestError, Result};
use crate::schema::SourceSchema;

const DATE_FORMAT: &str = "%Y-%m-%d";

fn normalize_header(raw: &str) -> String {
    raw.trim_matches('\u{feff}').trim().to_string()
}

enum ColumnBuilder {
    Date(Vec<NaiveDate>),
    Text(Vec<String>),
    Number(Vec<Option<f64>>),
}

impl ColumnBuilder {
    fn new(kind: ColumnKind) -> Self {
        match kind {
            ColumnKind::Date => ColumnBuilder::Date(Vec::new()),
            ColumnKind::Text => ColumnBuilder::Text(Vec::new()),
            ColumnKind::Number => ColumnBuilder::Number(Vec::new()),
        }
    }

    fn push(&mut self, cell: &str, row: usize, column: &str) -> Result<()> {
        match self {
            ColumnBuilder::Date(values) => {
                let date = NaiveDate::parse_from_str(cell, DATE_FORMAT).map_err(|_| {
                    IngestError::Date {
                        row,
                        column: column.to_string(),
                        value: cell.to_string(),
                    }
                })?;
                values.push(date);
            }
            ColumnBuilder::Text(values) => values.push(cell.to_string()),
            ColumnBuilder::Number(values) => {
                if cell.is_empty() {
                    values.push(None);
                } else {
                    let number = cell.parse::<f64>().map_err(|_| IngestError::Number {
                        row,
                        column: column.to_string(),
                        value: cell.to_string(),
                    })?;
                    values.push(Some(number));
                }
            }
        }
        Ok(())
    }

    fn build(self, name: String) -> Column {
        match self {
            ColumnBuilder::Date(values) => Column::date(name, values),
            ColumnBuilder::Text(values) => Column::text(name, values),
            ColumnBuilder::Number(values) => Column::number(name, values),
        }
    }
}

/// Parse a source CSV into typed wide columns per the expected schema.
///
/// Cells are trimmed (and the leading BOM stripped); short records are
/// padded with empty cells to the header width. Empty numeric cells become
/// null values. Text columns keep their cells verbatim, so FIPS codes keep
/// leading zeros.
pub fn read_wide_table<R: Read>(reader: R, schema: &SourceSchema) -> Result<WideTable> {
    let mut csv_reader = ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(normalize_header)
        .collect();
    let mut indices = Vec::with_capacity(schema.columns.len());
    for expected in &schema.columns {
        let index = headers
            .iter()
            .position(|header| header.eq_ignore_ascii_case(&expected.name))
            .ok_or_else(|| IngestError::MissingColumn {
                column: expected.name.clone(),
            })?;
        indices.push(index);
    }

    let mut builders: Vec<ColumnBuilder> = schema
        .columns
        .iter()
        .map(|column| ColumnBuilder::new(column.kind))
        .collect();
    let mut rows = 0usize;
    for record in csv_reader.records() {
        let record = record?;
        rows += 1;
        for ((expected, &index), builder) in
            schema.columns.iter().zip(&indices).zip(&mut builders)
        {
            let cell = record.get(index).unwrap_or("").trim();
            builder.push(cell, rows, &expected.name)?;
        }
    }

    debug!(rows, columns = schema.columns.len(), "parsed source csv");
    let columns = schema
        .columns
        .iter()
        .zip(builders)
        .map(|(expected, builder)| builder.build(expected.name.clone()))
        .collect();
    Ok(WideTable::new(columns))
}

/// Parse a source CSV from a local file.
pub fn read_wide_table_from_path(path: &Path, schema: &SourceSchema) -> Result<WideTable> {
    let file = File::open(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_wide_table(file, schema)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::io::Write;

    use super::*;

    fn state_schema() -> SourceSchema {
        SourceSchema::new()
            .date("date")
            .text("state")
            .text("fips")
            .number("cases")
            .number("deaths")
    }

    const STATE_CSV: &str = "\
date,state,fips,cases,deaths
2020-03-01,Alabama,01,5,0
2020-03-01,Alaska,02,1,
";

    #[test]
    fn parses_typed_columns() {
        let table = read_wide_table(Cursor::new(STATE_CSV), &state_schema()).expect("parse");
        assert_eq!(table.len(), 2);
        assert_eq!(
            table.date_column("date").expect("date column")[0],
            NaiveDate::from_ymd_opt(2020, 3, 1).expect("valid date")
        );
        assert_eq!(table.text_column("state").expect("state column")[1], "Alaska");
        assert_eq!(
            table.number_column("cases").expect("cases column"),
            &[Some(5.0), Some(1.0)]
        );
    }

    #[test]
    fn fips_stays_text_with_leading_zeros() {
        let table = read_wide_table(Cursor::new(STATE_CSV), &state_schema()).expect("parse");
        assert_eq!(
            table.text_column("fips").expect("fips column"),
            &["01".to_string(), "02".to_string()]
        );
    }

    #[test]
    fn empty_numeric_cell_becomes_null() {
        let table = read_wide_table(Cursor::new(STATE_CSV), &state_schema()).expect("parse");
        assert_eq!(
            table.number_column("deaths").expect("deaths column"),
            &[Some(0.0), None]
        );
    }

    #[test]
    fn missing_header_is_reported() {
        let csv = "date,state,cases,deaths\n2020-03-01,Alabama,5,0\n";
        let result = read_wide_table(Cursor::new(csv), &state_schema());
        assert!(matches!(
            result,
            Err(IngestError::MissingColumn { column }) if column == "fips"
        ));
    }

    #[test]
    fn bad_number_is_reported_with_row_and_column() {
        let csv = "date,state,fips,cases,deaths\n2020-03-01,Alabama,01,five,0\n";
        let result = read_wide_table(Cursor::new(csv), &state_schema());
        assert!(matches!(
            result,
            Err(IngestError::Number { row: 1, column, value })
                if column == "cases" && value == "five"
        ));
    }

    #[test]
    fn bad_date_is_reported() {
        let csv = "date,state,fips,cases,deaths\n03/01/2020,Alabama,01,5,0\n";
        let result = read_wide_table(Cursor::new(csv), &state_schema());
        assert!(matches!(result, Err(IngestError::Date { row: 1, .. })));
    }

    #[test]
    fn short_records_are_padded() {
        let csv = "date,state,fips,cases,deaths\n2020-03-01,Alabama,01,5\n";
        let table = read_wide_table(Cursor::new(csv), &state_schema()).expect("parse");
        assert_eq!(
            table.number_column("deaths").expect("deaths column"),
            &[None]
        );
    }

    #[test]
    fn header_lookup_ignores_case_and_bom() {
        let csv = "\u{feff}Date,State,FIPS,Cases,Deaths\n2020-03-01,Alabama,01,5,0\n";
        let table = read_wide_table(Cursor::new(csv), &state_schema()).expect("parse");
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn reads_from_a_path() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(STATE_CSV.as_bytes()).expect("write csv");
        let table = read_wide_table_from_path(file.path(), &state_schema()).expect("parse");
        assert_eq!(table.len(), 2);
    }
}
