use std::fmt;

use chrono::NaiveDate;

use crate::error::{ReshapeError, Result};

/// Type of a wide-table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    Date,
    Text,
    Number,
}

impl ColumnKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnKind::Date => "date",
            ColumnKind::Text => "text",
            ColumnKind::Number => "number",
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Values of one wide-table column, already parsed to their semantic type.
///
/// Standardized codes (FIPS) travel as [`ColumnValues::Text`]; coercing them
/// to numbers would drop leading zeros.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnValues {
    Date(Vec<NaiveDate>),
    Text(Vec<String>),
    Number(Vec<Option<f64>>),
}

impl ColumnValues {
    pub fn kind(&self) -> ColumnKind {
        match self {
            ColumnValues::Date(_) => ColumnKind::Date,
            ColumnValues::Text(_) => ColumnKind::Text,
            ColumnValues::Number(_) => ColumnKind::Number,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ColumnValues::Date(values) => values.len(),
            ColumnValues::Text(values) => values.len(),
            ColumnValues::Number(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A named, typed column.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub values: ColumnValues,
}

impl Column {
    pub fn date(name: impl Into<String>, values: Vec<NaiveDate>) -> Self {
        Column {
            name: name.into(),
            values: ColumnValues::Date(values),
        }
    }

    pub fn text(name: impl Into<String>, values: Vec<String>) -> Self {
        Column {
            name: name.into(),
            values: ColumnValues::Text(values),
        }
    }

    pub fn number(name: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Column {
            name: name.into(),
            values: ColumnValues::Number(values),
        }
    }
}

/// A wide-format table: one row per (date, location), metrics in separate
/// columns.
///
/// Invariant: every column holds the same number of values. The CSV ingest
/// layer guarantees this by padding short records to the header width.
#[derive(Debug, Clone, PartialEq)]
pub struct WideTable {
    row_count: usize,
    columns: Vec<Column>,
}

impl WideTable {
    pub fn new(columns: Vec<Column>) -> Self {
        let row_count = columns.first().map_or(0, |column| column.values.len());
        debug_assert!(
            columns.iter().all(|column| column.values.len() == row_count),
            "wide-table columns must all have the same length"
        );
        WideTable { row_count, columns }
    }

    /// Number of rows (equivalently, the length of every column).
    pub fn len(&self) -> usize {
        self.row_count
    }

    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    fn find(&self, name: &str) -> Option<&ColumnValues> {
        self.columns
            .iter()
            .find(|column| column.name == name)
            .map(|column| &column.values)
    }

    /// Resolve a date column by name.
    pub fn date_column(&self, name: &str) -> Result<&[NaiveDate]> {
        match self.find(name) {
            Some(ColumnValues::Date(values)) => Ok(values),
            _ => Err(ReshapeError::SchemaMismatch {
                column: name.to_string(),
                kind: ColumnKind::Date,
            }),
        }
    }

    /// Resolve a text column by name.
    pub fn text_column(&self, name: &str) -> Result<&[String]> {
        match self.find(name) {
            Some(ColumnValues::Text(values)) => Ok(values),
            _ => Err(ReshapeError::SchemaMismatch {
                column: name.to_string(),
                kind: ColumnKind::Text,
            }),
        }
    }

    /// Resolve a numeric column by name.
    pub fn number_column(&self, name: &str) -> Result<&[Option<f64>]> {
        match self.find(name) {
            Some(ColumnValues::Number(values)) => Ok(values),
            _ => Err(ReshapeError::SchemaMismatch {
                column: name.to_string(),
                kind: ColumnKind::Number,
            }),
        }
    }
}
