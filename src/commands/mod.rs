//! CLI command implementations
//!
//! The terminal consumer of the stats core; each command builds its
//! client from [`ApiConfig`](crate::config::ApiConfig), performs the
//! request and prints a text report.

pub mod devices;
pub mod stats;
