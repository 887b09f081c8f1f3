//! Resource fee tiering.
//!
//! Every attended day carries a flat resource (enrichment) fee whose size
//! depends on how much of the session the funding pool covered.

use rust_decimal::Decimal;

use crate::config::ResourceFeeRates;
use crate::models::FundingCoverage;

/// The fee schedule entry resource fees come from.
pub const RESOURCE_FEE_CLAUSE: &str = "rates.resource_fee";

/// The coverage level and fee for one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceFeeResult {
    /// How much of the session was funded.
    pub coverage: FundingCoverage,
    /// The flat fee for that coverage level.
    pub fee: Decimal,
}

/// Classifies a day's funding coverage.
///
/// A day is fully funded when every session hour was funded, partially
/// funded when some were, and unfunded otherwise.
///
/// # Examples
///
/// ```
/// use nursery_fees::calculation::determine_coverage;
/// use nursery_fees::models::FundingCoverage;
/// use rust_decimal::Decimal;
///
/// let five = Decimal::from(5);
/// assert_eq!(determine_coverage(five, five), FundingCoverage::Full);
/// assert_eq!(determine_coverage(Decimal::new(118, 2), five), FundingCoverage::Partial);
/// assert_eq!(determine_coverage(Decimal::ZERO, five), FundingCoverage::None);
/// ```
pub fn determine_coverage(funded_hours: Decimal, session_hours: Decimal) -> FundingCoverage {
    if funded_hours == session_hours {
        FundingCoverage::Full
    } else if funded_hours > Decimal::ZERO {
        FundingCoverage::Partial
    } else {
        FundingCoverage::None
    }
}

/// Calculates the resource fee for a day from its funded and session hours.
pub fn calculate_resource_fee(
    funded_hours: Decimal,
    session_hours: Decimal,
    rates: &ResourceFeeRates,
) -> ResourceFeeResult {
    let coverage = determine_coverage(funded_hours, session_hours);
    ResourceFeeResult {
        coverage,
        fee: rates.for_coverage(coverage),
    }
}
