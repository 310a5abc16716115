use tracing::info;

use covid19_reshape::WideTable;

use crate::error::{IngestError, Result};
use crate::reader::read_wide_table;
use crate::schema::SourceSchema;

/// Fetch a source CSV over HTTPS and parse it per the expected schema.
///
/// No retry and no caching; policy around transient failures belongs to
/// callers. Errors propagate unmodified.
pub fn fetch_wide_table(url: &str, schema: &SourceSchema) -> Result<WideTable> {
    info!(url, "fetching source csv");
    let response = reqwest::blocking::get(url).map_err(|source| IngestError::Http {
        url: url.to_string(),
        source,
    })?;
    let status = response.status();
    if !status.is_success() {
        return Err(IngestError::Status {
            url: url.to_string(),
            status,
        });
    }
    read_wide_table(response, schema)
}
