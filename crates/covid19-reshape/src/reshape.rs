use covid19_model::{DataType, LOCATION_DELIMITER, TidyRecord};
use tracing::debug;

use crate::config::ReshapeConfig;
use crate::error::Result;
use crate::table::WideTable;

/// Melt a wide table into covid19R tidy records.
///
/// Every configured column is resolved against the table schema before any
/// record is built, so a [`crate::ReshapeError::SchemaMismatch`] produces
/// zero output. Each input row yields one record per configured metric, in
/// declared metric order; rows keep their relative order. Rows are never
/// dropped or merged, and null metric values pass through as `None`.
pub fn reshape(table: &WideTable, config: &ReshapeConfig) -> Result<Vec<TidyRecord>> {
    let dates = table.date_column(&config.date_column)?;
    let location_columns = config
        .location
        .columns
        .iter()
        .map(|name| table.text_column(name))
        .collect::<Result<Vec<_>>>()?;
    let codes = table.text_column(&config.code.column)?;
    let metrics = config
        .metrics
        .iter()
        .map(|metric| {
            table
                .number_column(&metric.column)
                .map(|values| (values, metric.data_type))
        })
        .collect::<Result<Vec<(&[Option<f64>], DataType)>>>()?;

    let mut records = Vec::with_capacity(table.len() * metrics.len());
    for row in 0..table.len() {
        let mut location = String::new();
        for (idx, column) in location_columns.iter().enumerate() {
            if idx > 0 {
                location.push(LOCATION_DELIMITER);
            }
            location.push_str(&column[row]);
        }
        for (values, data_type) in &metrics {
            records.push(TidyRecord {
                date: dates[row],
                location: location.clone(),
                location_type: config.location.location_type,
                location_standardized: codes[row].clone(),
                location_standardized_type: config.code.code_type,
                data_type: *data_type,
                value: values[row],
            });
        }
    }

    debug!(
        rows = table.len(),
        metrics = metrics.len(),
        records = records.len(),
        location_type = %config.location.location_type,
        "reshaped wide table"
    );
    Ok(records)
}
