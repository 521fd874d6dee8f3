//! Statistics retrieval and normalization
//!
//! The core of the dashboard client: queries either the per-device
//! "single" stats API or the aggregate "eyetime" API, across the three
//! granularities, and normalizes every payload into one unified
//! [`StatsResult`](crate::models::StatsResult).
//!
//! ## Architecture
//!
//! - **timezone**: local UTC offset and local today, included in every request
//! - **endpoint**: pure request-URL construction across both API families
//! - **transform**: raw payload → canonical view-model
//! - **client**: the orchestrator; owns loading/error/stats state and
//!   dispatches by period type

pub mod timezone;

pub mod endpoint;

#[cfg(test)]
mod endpoint_tests;

pub mod transform;


pub mod client;


pub use client::StatsClient;
