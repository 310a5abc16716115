//! Wide-to-long reshaping of COVID-19 time series.
//!
//! The covid19R convention wants one record per (date, location, metric);
//! sources publish one row per (date, location) with metrics in separate
//! columns. [`reshape`] melts the latter into the former, driven by a small
//! per-source [`ReshapeConfig`]. The transformation is pure and holds no
//! state between calls; the only failure mode is a configured column
//! missing from the input schema.

pub mod config;
pub mod error;
pub mod reshape;
pub mod sources;
pub mod table;

pub use config::{CodeColumn, LocationSpec, MetricColumn, ReshapeConfig};
pub use error::{ReshapeError, Result};
pub use reshape::reshape;
pub use sources::{county_config, reshape_counties, reshape_states, state_config};
pub use table::{Column, ColumnKind, ColumnValues, WideTable};
