//! Calculation logic for the Nursery Fee Engine.
//!
//! This module contains the fee allocator and the rules it applies: the
//! weekly funded-hour pool lookup, per-day allocation of that pool in
//! weekday order, resource fee tiering by funding coverage, and two-decimal
//! rounding of every hour and money field.

mod daily_allocation;
mod funding_pool;
mod resource_fee;
mod rounding;
mod weekly_fees;

pub use daily_allocation::{DailyAllocationResult, HOURLY_RATE_CLAUSE, allocate_day};
pub use funding_pool::{FUNDING_POOL_CLAUSE, FundingPoolLookupResult, lookup_funding_pool};
pub use resource_fee::{
    RESOURCE_FEE_CLAUSE, ResourceFeeResult, calculate_resource_fee, determine_coverage,
};
pub use rounding::{round_hours, round_to_cents};
pub use weekly_fees::{calculate_weekly_fees, compute_fees};
