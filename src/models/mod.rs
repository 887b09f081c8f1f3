//! Core data models for the Nursery Fee Engine.
//!
//! This module contains the domain models used throughout the engine: the
//! funding choices, sessions and weekday selection that go in, and the fee
//! breakdown that comes out.

mod fee_result;
mod funding;
mod session;
mod weekday;

pub use fee_result::{
    AuditStep, AuditTrace, AuditWarning, DailyBreakdown, FeeResult, FundingCoverage,
    WeeklySummary,
};
pub use funding::{FundingPattern, FundingTier};
pub use session::SessionType;
pub use weekday::{Weekday, WeekdaySelection};
