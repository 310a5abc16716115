use covid19_model::{DataType, LocationType, StandardizedType};

/// One source metric column and the canonical `data_type` it melts into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricColumn {
    pub column: String,
    pub data_type: DataType,
}

impl MetricColumn {
    pub fn new(column: impl Into<String>, data_type: DataType) -> Self {
        MetricColumn {
            column: column.into(),
            data_type,
        }
    }
}

/// The columns whose row values form the `location` field.
///
/// Values are joined in order with [`covid19_model::LOCATION_DELIMITER`];
/// a single column passes through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationSpec {
    pub columns: Vec<String>,
    pub location_type: LocationType,
}

/// The column holding the standardized location code, and its code system.
///
/// The code is carried as text end to end so FIPS leading zeros survive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeColumn {
    pub column: String,
    pub code_type: StandardizedType,
}

/// Per-source configuration for [`crate::reshape`].
///
/// The two supported sources differ only in these values; the melt logic is
/// shared. Configuration is plain data resolved against the table schema at
/// call time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReshapeConfig {
    pub date_column: String,
    pub location: LocationSpec,
    pub code: CodeColumn,
    /// Melted in declared order; output record order depends on it.
    pub metrics: Vec<MetricColumn>,
}
