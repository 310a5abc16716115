use std::path::PathBuf;

use thiserror::Error;

use covid19_reshape::ReshapeError;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("csv parse error: {0}")]
    Csv(#[from] csv::Error),
    #[error("column `{column}` not found in source header")]
    MissingColumn { column: String },
    #[error("row {row}: invalid date in `{column}`: {value:?}")]
    Date {
        row: usize,
        column: String,
        value: String,
    },
    #[error("row {row}: invalid number in `{column}`: {value:?}")]
    Number {
        row: usize,
        column: String,
        value: String,
    },
    #[error("fetch {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("fetch {url}: HTTP status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error(transparent)]
    Reshape(#[from] ReshapeError),
}

pub type Result<T> = std::result::Result<T, IngestError>;
