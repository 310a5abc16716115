use thiserror::Error;

use crate::table::ColumnKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReshapeError {
    /// An expected source column is absent from the input schema, or is
    /// present with a different type. This is a caller-side configuration
    /// error, never a data error; no records are produced.
    #[error("schema mismatch: expected {kind} column `{column}`")]
    SchemaMismatch { column: String, kind: ColumnKind },
}

pub type Result<T> = std::result::Result<T, ReshapeError>;
