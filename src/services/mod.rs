//! Backend services beside the stats core
//!
//! Each service owns its own reqwest client and reports failures
//! through [`ApiError`](crate::error::ApiError); unlike the stats
//! orchestrator they return results directly instead of writing into
//! shared state.

pub mod devices;
pub mod page_config;

pub use devices::DeviceDirectory;
pub use page_config::PageConfigService;
