use serde::{Deserialize, Serialize};

use crate::record::{DataType, LocationType};

/// Descriptor of one retrievable data set, as published in the covid19R
/// data-set registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetInfo {
    /// Registry key for the data set (e.g. `covid19nytimes_states`).
    pub data_set_name: String,
    /// Package that provides the data set.
    pub package_name: String,
    /// Name of the refresh entry point for the data set.
    pub function_to_get_data: String,
    /// Human-readable description of the data.
    pub data_details: String,
    /// Where the raw data is published.
    pub data_url: String,
    /// License terms for the raw data.
    pub license_url: String,
    /// Metrics the data set carries.
    pub data_types: Vec<DataType>,
    /// Location granularities the data set carries.
    pub location_types: Vec<LocationType>,
    /// Geographic coverage (e.g. `country`).
    pub spatial_extent: String,
    /// Whether records carry geospatial geometry (they do not; locations are
    /// names plus FIPS codes).
    pub has_geospatial_info: bool,
}
