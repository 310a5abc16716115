//! Library components for the `covid-tidy` CLI.

pub mod logging;
pub mod output;
