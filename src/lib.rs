//! Nursery Fee Engine
//!
//! This crate calculates weekly childcare fees for a nursery from a child's
//! government-funded-hours allowance and the sessions they attend. The
//! weekly funded-hour pool is spent day by day, Monday first; whatever it
//! cannot cover is billed hourly, and each day carries a flat resource fee
//! tiered by how much of it was funded.
//!
//! # Example
//!
//! ```
//! use nursery_fees::compute_fees;
//!
//! let result = compute_fees("15", "stretched", &[Some("full"), Some("morning")])
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(result.daily_breakdown.len(), 2);
//! assert_eq!(result.summary.total_weekly_cost.to_string(), "67.26");
//! ```

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;

pub use calculation::{calculate_weekly_fees, compute_fees};
