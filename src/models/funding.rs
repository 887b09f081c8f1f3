//! Funding tier and funding pattern types.
//!
//! A child's government allowance is described by two choices: how many
//! funded hours they are entitled to ([`FundingTier`]) and how those hours are
//! spread across the year ([`FundingPattern`]). Together they select the
//! weekly funded-hour pool from the fee schedule.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// The funded-hours entitlement.
///
/// # Example
///
/// ```
/// use nursery_fees::models::FundingTier;
///
/// let tier: FundingTier = "30".parse().unwrap();
/// assert_eq!(tier, FundingTier::Thirty);
/// assert_eq!(tier.to_string(), "30");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum FundingTier {
    /// 15 funded hours per week in term time.
    Fifteen,
    /// 30 funded hours per week in term time.
    Thirty,
}

impl FundingTier {
    /// Every supported tier, in display order.
    pub const ALL: [FundingTier; 2] = [FundingTier::Fifteen, FundingTier::Thirty];

    /// Returns the wire key for this tier.
    pub fn key(self) -> &'static str {
        match self {
            FundingTier::Fifteen => "15",
            FundingTier::Thirty => "30",
        }
    }

    /// Returns the nominal term-time hours for this tier.
    pub fn term_time_hours(self) -> u32 {
        match self {
            FundingTier::Fifteen => 15,
            FundingTier::Thirty => 30,
        }
    }
}

impl fmt::Display for FundingTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FundingTier {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "15" => Ok(FundingTier::Fifteen),
            "30" => Ok(FundingTier::Thirty),
            other => Err(EngineError::UnknownFundingTier {
                value: other.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for FundingTier {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FundingTier> for &'static str {
    fn from(tier: FundingTier) -> Self {
        tier.key()
    }
}

/// How the funded hours are used across the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum FundingPattern {
    /// Hours spread evenly across the whole year.
    Stretched,
    /// Hours used in term time only.
    TermTime,
}

impl FundingPattern {
    /// Every supported pattern, in display order.
    pub const ALL: [FundingPattern; 2] = [FundingPattern::Stretched, FundingPattern::TermTime];

    /// Returns the wire key for this pattern.
    pub fn key(self) -> &'static str {
        match self {
            FundingPattern::Stretched => "stretched",
            FundingPattern::TermTime => "termTime",
        }
    }
}

impl fmt::Display for FundingPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FundingPattern {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stretched" => Ok(FundingPattern::Stretched),
            "termTime" => Ok(FundingPattern::TermTime),
            other => Err(EngineError::UnknownFundingPattern {
                value: other.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for FundingPattern {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FundingPattern> for &'static str {
    fn from(pattern: FundingPattern) -> Self {
        pattern.key()
    }
}
