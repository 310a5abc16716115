use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Delimiter joining nested location components (e.g. `"Autauga,Alabama"`).
///
/// The delimiter is part of the covid19R wire format and is not escaped: a
/// county or state name that itself contains a comma cannot be recovered by
/// splitting. Downstream consumers split on the literal comma, so the join
/// scheme must not change.
pub const LOCATION_DELIMITER: char = ',';

/// Split a `location` value into its components.
///
/// For `location_type = county_state` this recovers `(county, state)`; for
/// single-level locations it returns the whole name as one component.
pub fn split_location(location: &str) -> Vec<&str> {
    location.split(LOCATION_DELIMITER).collect()
}

/// Metric carried by a tidy record, per the covid19R controlled vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataType {
    /// Cumulative confirmed case count.
    CasesTotal,
    /// Cumulative death count.
    DeathsTotal,
}

impl DataType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::CasesTotal => "cases_total",
            DataType::DeathsTotal => "deaths_total",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DataType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cases_total" => Ok(DataType::CasesTotal),
            "deaths_total" => Ok(DataType::DeathsTotal),
            _ => Err(format!("Unknown data type: {}", s)),
        }
    }
}

/// Kind of text held by a record's `location` field.
///
/// Nested granularities underscore-join their component type names, matching
/// the comma-joined components of the location text itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationType {
    /// A U.S. state name.
    State,
    /// A county name and its state, comma-joined.
    CountyState,
}

impl LocationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LocationType::State => "state",
            LocationType::CountyState => "county_state",
        }
    }
}

impl fmt::Display for LocationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LocationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "state" => Ok(LocationType::State),
            "county_state" => Ok(LocationType::CountyState),
            _ => Err(format!("Unknown location type: {}", s)),
        }
    }
}

/// Code system of a record's `location_standardized` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StandardizedType {
    /// Federal Information Processing Standard state/county code.
    ///
    /// Always carried as text: `"01001"` stays `"01001"`, never `1001`.
    FipsCode,
}

impl StandardizedType {
    pub fn as_str(&self) -> &'static str {
        match self {
            StandardizedType::FipsCode => "fips_code",
        }
    }
}

impl fmt::Display for StandardizedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StandardizedType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fips_code" => Ok(StandardizedType::FipsCode),
            _ => Err(format!("Unknown standardized type: {}", s)),
        }
    }
}

/// One observation in the covid19R long format: a single metric for a single
/// location on a single date.
///
/// Field order is the canonical column order and is identical for every
/// source granularity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TidyRecord {
    /// Calendar date of the observation, no time component.
    pub date: NaiveDate,
    /// Location name; nested components are comma-joined.
    pub location: String,
    /// What kind of text `location` holds.
    pub location_type: LocationType,
    /// Standardized code for the same location, as text.
    pub location_standardized: String,
    /// Code system of `location_standardized`.
    pub location_standardized_type: StandardizedType,
    /// Which metric `value` measures.
    pub data_type: DataType,
    /// Cumulative count; `None` when the source reported no value.
    pub value: Option<f64>,
}
