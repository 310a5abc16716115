//! Source registry, CSV parsing, and remote fetch for NYT COVID-19 data.
//!
//! The reshaping core never performs I/O; this crate is the collaborator
//! that hands it already-typed wide tables. [`Source`] names the supported
//! data sets and bundles their URL, expected CSV schema, reshape
//! configuration, and registry metadata; [`refresh_states`] and
//! [`refresh_counties`] are the end-to-end fetch + parse + reshape entry
//! points.

pub mod error;
pub mod fetch;
pub mod reader;
pub mod schema;
pub mod source;

pub use error::{IngestError, Result};
pub use fetch::fetch_wide_table;
pub use reader::{read_wide_table, read_wide_table_from_path};
pub use schema::{SchemaColumn, SourceSchema};
pub use source::{Source, refresh_counties, refresh_states};
