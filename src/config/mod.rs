//! Configuration loading and management for the Nursery Fee Engine.
//!
//! This module provides the [`FeeSchedule`] the allocator prices against and
//! the [`ConfigLoader`] that reads it from YAML files: nursery details, the
//! weekly funded-hour table, and dated rate files.
//!
//! # Example
//!
//! ```no_run
//! use nursery_fees::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/little_lodge").unwrap();
//! println!("Loaded fees for: {}", config.nursery().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    FeeSchedule, FundingConfig, FundingHours, FundingTable, NurseryConfig, NurseryMetadata,
    RateConfig, ResourceFeeRates,
};
