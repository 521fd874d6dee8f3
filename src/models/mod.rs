//! Data model definitions
//!
//! Contains the canonical statistics view-model ([`stats`]) and the
//! raw wire shapes returned by the backend APIs ([`payload`]).

mod stats;


pub use stats::*;

/// Wire-format payload shapes for the stats endpoints
pub mod payload;
