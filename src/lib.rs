// Usage Dash Library
// Usage-statistics dashboard client: queries the per-device stats API
// or the aggregate eyetime API and normalizes every payload into one
// unified view-model.

pub mod commands;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod services;
pub mod stats;

pub use config::ApiConfig;
pub use error::ApiError;
pub use models::{
    DateRange, FetchOptions, PeriodType, StatsMode, StatsResult, StatsState, TimeDimension,
};
pub use services::devices::DeviceInfo;
pub use stats::StatsClient;
