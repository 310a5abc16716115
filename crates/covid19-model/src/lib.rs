//! Data model for covid19R tidy time series.
//!
//! The covid19R convention stores every observation as one long-format
//! record with a fixed seven-column schema, so downstream tools can treat
//! arbitrary location granularities uniformly. This crate defines that
//! record ([`TidyRecord`]), the controlled vocabularies its tag columns draw
//! from, and the registry descriptor for retrievable data sets
//! ([`DatasetInfo`]).

pub mod dataset;
pub mod record;

pub use dataset::DatasetInfo;
pub use record::{
    DataType, LOCATION_DELIMITER, LocationType, StandardizedType, TidyRecord, split_location,
};
