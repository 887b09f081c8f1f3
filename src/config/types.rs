//! Configuration types for the fee schedule.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, and the [`FeeSchedule`]
//! snapshot the calculation runs against.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{FundingCoverage, FundingPattern, FundingTier};

/// Metadata about the nursery publishing the fees.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NurseryMetadata {
    /// The nursery's name.
    pub name: String,
    /// The address parents can contact with questions.
    pub contact_email: String,
}

/// Weekly funded hours for one tier, by funding pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundingHours {
    /// Hours per week when funding is stretched across the year.
    pub stretched: Decimal,
    /// Hours per week when funding is used in term time only.
    pub term_time: Decimal,
}

impl FundingHours {
    /// Returns the weekly hours for a pattern.
    pub fn for_pattern(&self, pattern: FundingPattern) -> Decimal {
        match pattern {
            FundingPattern::Stretched => self.stretched,
            FundingPattern::TermTime => self.term_time,
        }
    }
}

/// The weekly funded-hour lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundingTable {
    /// Hours for the 15-hour entitlement.
    #[serde(rename = "15")]
    pub fifteen: FundingHours,
    /// Hours for the 30-hour entitlement.
    #[serde(rename = "30")]
    pub thirty: FundingHours,
}

impl FundingTable {
    /// Returns the weekly funded-hour pool for a tier and pattern.
    pub fn weekly_hours(&self, tier: FundingTier, pattern: FundingPattern) -> Decimal {
        let hours = match tier {
            FundingTier::Fifteen => &self.fifteen,
            FundingTier::Thirty => &self.thirty,
        };
        hours.for_pattern(pattern)
    }
}

/// Funding configuration from funding.yaml.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundingConfig {
    /// Number of weeks a term-time allowance is spread over.
    pub term_time_weeks: u32,
    /// Weekly funded hours by tier and pattern.
    pub weekly_hours: FundingTable,
}

/// Flat daily resource fees by funding coverage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceFeeRates {
    /// Fee for a day the pool fully funded.
    pub fully_funded: Decimal,
    /// Fee for a day the pool partly funded.
    pub partially_funded: Decimal,
}

impl ResourceFeeRates {
    /// Returns the fee for a coverage level. Unfunded days carry no fee.
    pub fn for_coverage(&self, coverage: FundingCoverage) -> Decimal {
        match coverage {
            FundingCoverage::Full => self.fully_funded,
            FundingCoverage::Partial => self.partially_funded,
            FundingCoverage::None => Decimal::ZERO,
        }
    }
}

/// Rate configuration for a specific effective date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateConfig {
    /// The effective date for these rates.
    pub effective_date: NaiveDate,
    /// The charge per unfunded hour.
    pub hourly_rate: Decimal,
    /// Flat daily resource fees.
    pub resource_fees: ResourceFeeRates,
}

/// Everything the fee allocator needs to price a week.
///
/// `FeeSchedule::default()` carries the nursery's published figures, so the
/// allocator can run without any configuration on disk.
///
/// # Example
///
/// ```
/// use nursery_fees::config::FeeSchedule;
/// use nursery_fees::models::{FundingPattern, FundingTier};
/// use rust_decimal::Decimal;
///
/// let schedule = FeeSchedule::default();
/// assert_eq!(schedule.hourly_rate, Decimal::new(910, 2));
/// assert_eq!(
///     schedule.weekly_funding_hours(FundingTier::Fifteen, FundingPattern::Stretched),
///     Decimal::new(1118, 2)
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeSchedule {
    /// The date these rates took effect.
    pub effective_date: NaiveDate,
    /// The charge per unfunded hour.
    pub hourly_rate: Decimal,
    /// Flat daily resource fees.
    pub resource_fees: ResourceFeeRates,
    /// The funded-hour table.
    pub funding: FundingConfig,
}

impl FeeSchedule {
    /// Combines a rate file with the funding table.
    pub fn new(rates: &RateConfig, funding: FundingConfig) -> Self {
        Self {
            effective_date: rates.effective_date,
            hourly_rate: rates.hourly_rate,
            resource_fees: rates.resource_fees,
            funding,
        }
    }

    /// Returns the weekly funded-hour pool for a tier and pattern.
    pub fn weekly_funding_hours(&self, tier: FundingTier, pattern: FundingPattern) -> Decimal {
        self.funding.weekly_hours.weekly_hours(tier, pattern)
    }

    /// Returns the text parents see next to a funding pattern choice.
    ///
    /// ```
    /// use nursery_fees::config::FeeSchedule;
    /// use nursery_fees::models::{FundingPattern, FundingTier};
    ///
    /// let schedule = FeeSchedule::default();
    /// assert_eq!(
    ///     schedule.funding_description(FundingTier::Thirty, FundingPattern::Stretched),
    ///     "22.35 hours per week throughout the year"
    /// );
    /// ```
    pub fn funding_description(&self, tier: FundingTier, pattern: FundingPattern) -> String {
        match pattern {
            FundingPattern::Stretched => format!(
                "{} hours per week throughout the year",
                self.weekly_funding_hours(tier, pattern).normalize()
            ),
            FundingPattern::TermTime => format!(
                "{} hours per week for {} weeks (term time only)",
                tier.term_time_hours(),
                self.funding.term_time_weeks
            ),
        }
    }

    /// Checks the schedule can be used for pricing.
    ///
    /// Rates, fees and every funded-hour pool must be non-negative, and the
    /// term-time allowance must span at least one week.
    pub fn validate(&self) -> EngineResult<()> {
        if self.hourly_rate.is_sign_negative() {
            return Err(invalid(format!(
                "hourly rate must not be negative (got {})",
                self.hourly_rate
            )));
        }
        if self.resource_fees.fully_funded.is_sign_negative()
            || self.resource_fees.partially_funded.is_sign_negative()
        {
            return Err(invalid("resource fees must not be negative".to_string()));
        }
        if self.funding.term_time_weeks == 0 {
            return Err(invalid("term_time_weeks must be at least 1".to_string()));
        }
        for tier in FundingTier::ALL {
            for pattern in FundingPattern::ALL {
                let hours = self.weekly_funding_hours(tier, pattern);
                if hours.is_sign_negative() {
                    return Err(invalid(format!(
                        "weekly funding hours for {}/{} must not be negative (got {})",
                        tier, pattern, hours
                    )));
                }
            }
        }
        Ok(())
    }
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            effective_date: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap_or_default(),
            hourly_rate: Decimal::new(910, 2),
            resource_fees: ResourceFeeRates {
                fully_funded: Decimal::new(2250, 2),
                partially_funded: Decimal::new(1000, 2),
            },
            funding: FundingConfig {
                term_time_weeks: 38,
                weekly_hours: FundingTable {
                    fifteen: FundingHours {
                        stretched: Decimal::new(1118, 2),
                        term_time: Decimal::from(15),
                    },
                    thirty: FundingHours {
                        stretched: Decimal::new(2235, 2),
                        term_time: Decimal::from(30),
                    },
                },
            },
        }
    }
}

fn invalid(message: String) -> EngineError {
    EngineError::InvalidSchedule { message }
}

/// The complete nursery configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct NurseryConfig {
    /// Nursery metadata.
    metadata: NurseryMetadata,
    /// The funded-hour table.
    funding: FundingConfig,
    /// Rate configurations by effective date (sorted oldest first).
    rates: Vec<RateConfig>,
}

impl NurseryConfig {
    /// Creates a new NurseryConfig from its component parts.
    pub fn new(metadata: NurseryMetadata, funding: FundingConfig, rates: Vec<RateConfig>) -> Self {
        let mut sorted_rates = rates;
        sorted_rates.sort_by(|a, b| a.effective_date.cmp(&b.effective_date));
        Self {
            metadata,
            funding,
            rates: sorted_rates,
        }
    }

    /// Returns the nursery metadata.
    pub fn nursery(&self) -> &NurseryMetadata {
        &self.metadata
    }

    /// Returns the funding configuration.
    pub fn funding(&self) -> &FundingConfig {
        &self.funding
    }

    /// Returns all rate configurations.
    pub fn rates(&self) -> &[RateConfig] {
        &self.rates
    }
}
