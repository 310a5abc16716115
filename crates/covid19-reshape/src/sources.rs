//! Fixed configurations for the two supported source granularities.
//!
//! The state and county adapters are configuration values, not separate
//! code paths: both call the shared [`reshape`] with different location
//! columns and `location_type` tags.

use covid19_model::{DataType, LocationType, StandardizedType, TidyRecord};

use crate::config::{CodeColumn, LocationSpec, MetricColumn, ReshapeConfig};
use crate::error::Result;
use crate::reshape::reshape;
use crate::table::WideTable;

fn base_config(location: LocationSpec) -> ReshapeConfig {
    ReshapeConfig {
        date_column: "date".to_string(),
        location,
        code: CodeColumn {
            column: "fips".to_string(),
            code_type: StandardizedType::FipsCode,
        },
        metrics: vec![
            MetricColumn::new("cases", DataType::CasesTotal),
            MetricColumn::new("deaths", DataType::DeathsTotal),
        ],
    }
}

/// Configuration for the state-level source: `location` is the state name.
pub fn state_config() -> ReshapeConfig {
    base_config(LocationSpec {
        columns: vec!["state".to_string()],
        location_type: LocationType::State,
    })
}

/// Configuration for the county-level source: `location` is
/// `"<county>,<state>"`.
pub fn county_config() -> ReshapeConfig {
    base_config(LocationSpec {
        columns: vec!["county".to_string(), "state".to_string()],
        location_type: LocationType::CountyState,
    })
}

/// Reshape a state-level wide table.
pub fn reshape_states(table: &WideTable) -> Result<Vec<TidyRecord>> {
    reshape(table, &state_config())
}

/// Reshape a county-level wide table.
pub fn reshape_counties(table: &WideTable) -> Result<Vec<TidyRecord>> {
    reshape(table, &county_config())
}
