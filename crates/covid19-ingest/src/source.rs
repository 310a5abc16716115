//! Registry of the supported NYT data sets.

use std::fmt;
use std::str::FromStr;

use covid19_model::{DataType, DatasetInfo, LocationType, TidyRecord};
use covid19_reshape::{ReshapeConfig, WideTable, county_config, reshape, state_config};

use crate::error::Result;
use crate::fetch::fetch_wide_table;
use crate::schema::SourceSchema;

const NYT_LICENSE_URL: &str = "https://github.com/nytimes/covid-19-data/blob/master/LICENSE";

/// A retrievable NYT COVID-19 data set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    /// State-level cumulative cases and deaths (`us-states.csv`).
    NytStates,
    /// County-level cumulative cases and deaths (`us-counties.csv`).
    NytCounties,
}

impl Source {
    pub const ALL: [Source; 2] = [Source::NytStates, Source::NytCounties];

    /// Published location of the raw CSV.
    pub fn url(&self) -> &'static str {
        match self {
            Source::NytStates => {
                "https://raw.githubusercontent.com/nytimes/covid-19-data/master/us-states.csv"
            }
            Source::NytCounties => {
                "https://raw.githubusercontent.com/nytimes/covid-19-data/master/us-counties.csv"
            }
        }
    }

    /// Columns the source CSV is expected to carry.
    pub fn schema(&self) -> SourceSchema {
        let schema = SourceSchema::new().date("date");
        let schema = match self {
            Source::NytStates => schema.text("state"),
            Source::NytCounties => schema.text("county").text("state"),
        };
        schema.text("fips").number("cases").number("deaths")
    }

    /// The reshape configuration wiring this source into the shared melt.
    pub fn reshape_config(&self) -> ReshapeConfig {
        match self {
            Source::NytStates => state_config(),
            Source::NytCounties => county_config(),
        }
    }

    /// Registry descriptor for this data set.
    pub fn info(&self) -> DatasetInfo {
        let (data_set_name, function_to_get_data, detail, location_types) = match self {
            Source::NytStates => (
                "covid19nytimes_states",
                "refresh_states",
                "US states",
                vec![LocationType::State],
            ),
            Source::NytCounties => (
                "covid19nytimes_counties",
                "refresh_counties",
                "US counties",
                vec![LocationType::CountyState],
            ),
        };
        DatasetInfo {
            data_set_name: data_set_name.to_string(),
            package_name: "covid19nytimes".to_string(),
            function_to_get_data: function_to_get_data.to_string(),
            data_details: format!(
                "Open source data from the New York Times on the distribution \
                 of confirmed COVID-19 cases and deaths in {detail}."
            ),
            data_url: self.url().to_string(),
            license_url: NYT_LICENSE_URL.to_string(),
            data_types: vec![DataType::CasesTotal, DataType::DeathsTotal],
            location_types,
            spatial_extent: "country".to_string(),
            has_geospatial_info: false,
        }
    }

    /// Fetch the published CSV and reshape it into tidy records.
    pub fn refresh(&self) -> Result<Vec<TidyRecord>> {
        let table = fetch_wide_table(self.url(), &self.schema())?;
        self.reshape_table(&table)
    }

    /// Reshape an already-parsed wide table for this source.
    pub fn reshape_table(&self, table: &WideTable) -> Result<Vec<TidyRecord>> {
        Ok(reshape(table, &self.reshape_config())?)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Source::NytStates => "states",
            Source::NytCounties => "counties",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Source {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "states" => Ok(Source::NytStates),
            "counties" => Ok(Source::NytCounties),
            _ => Err(format!("Unknown source: {}", s)),
        }
    }
}

/// Fetch and reshape the state-level data set.
pub fn refresh_states() -> Result<Vec<TidyRecord>> {
    Source::NytStates.refresh()
}

/// Fetch and reshape the county-level data set.
pub fn refresh_counties() -> Result<Vec<TidyRecord>> {
    Source::NytCounties.refresh()
}
