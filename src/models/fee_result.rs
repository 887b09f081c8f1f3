//! Fee result models for the Nursery Fee Engine.
//!
//! This module contains the [`FeeResult`] type and its associated structures
//! that capture all outputs from a weekly fee calculation: the per-day
//! breakdown, the weekly summary, and an audit trace of every rule applied.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{FundingPattern, FundingTier, SessionType, Weekday};

/// How much of a day's session the remaining funding pool covered.
///
/// The coverage level selects the flat resource fee charged for the day.
///
/// # Example
///
/// ```
/// use nursery_fees::models::FundingCoverage;
///
/// let coverage = FundingCoverage::Partial;
/// assert_eq!(serde_json::to_string(&coverage).unwrap(), "\"partial\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FundingCoverage {
    /// Every session hour was funded.
    Full,
    /// Some, but not all, session hours were funded.
    Partial,
    /// No session hours were funded.
    None,
}

/// The fee breakdown for one attended day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyBreakdown {
    /// The day this breakdown applies to.
    pub day: Weekday,
    /// The session booked on the day.
    pub session_type: SessionType,
    /// The label shown to parents for the session.
    pub session_label: String,
    /// The session duration in hours.
    pub session_hours: Decimal,
    /// Hours covered by the funding pool.
    pub funded_hours: Decimal,
    /// Hours billed at the hourly rate.
    pub unfunded_hours: Decimal,
    /// Cost of the unfunded hours.
    pub unfunded_cost: Decimal,
    /// The coverage level that selected the resource fee.
    pub funding_coverage: FundingCoverage,
    /// The flat resource (enrichment) fee for the day.
    pub resource_fee: Decimal,
    /// Unfunded cost plus resource fee.
    pub daily_total: Decimal,
}

/// Aggregated totals for one week.
///
/// Totals are sums of the already-rounded daily values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySummary {
    /// Sum of every daily total.
    pub total_weekly_cost: Decimal,
    /// Sum of every day's unfunded cost.
    pub total_unfunded_cost: Decimal,
    /// Sum of every day's resource fee.
    pub total_resource_fees: Decimal,
    /// The weekly funded-hour pool the week started with.
    pub weekly_funding_hours: Decimal,
    /// Sum of every day's funded hours.
    pub total_funded_hours: Decimal,
    /// Sum of every day's unfunded hours.
    pub total_unfunded_hours: Decimal,
    /// Pool hours left after Friday.
    pub unused_funding_hours: Decimal,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The fee schedule entry the rule draws on.
    pub clause_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings point out something a parent may want to know without changing
/// the fees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
///
/// The trace carries no timing data, so identical inputs always produce an
/// identical trace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
}

/// The complete result of a weekly fee calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeResult {
    /// The funding tier the fees were calculated for.
    pub funding_tier: FundingTier,
    /// The funding pattern the fees were calculated for.
    pub funding_pattern: FundingPattern,
    /// One entry per attended day, Monday first.
    pub daily_breakdown: Vec<DailyBreakdown>,
    /// Aggregated weekly totals.
    pub summary: WeeklySummary,
    /// Every rule applied while calculating.
    pub audit_trace: AuditTrace,
}

impl FeeResult {
    /// Returns the breakdown for `day`, if the child attends that day.
    pub fn day(&self, day: Weekday) -> Option<&DailyBreakdown> {
        self.daily_breakdown.iter().find(|entry| entry.day == day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_sample_breakdown(day: Weekday) -> DailyBreakdown {
        DailyBreakdown {
            day,
            session_type: SessionType::Morning,
            session_label: SessionType::Morning.label().to_string(),
            session_hours: dec("5"),
            funded_hours: dec("1.18"),
            unfunded_hours: dec("3.82"),
            unfunded_cost: dec("34.76"),
            funding_coverage: FundingCoverage::Partial,
            resource_fee: dec("10.00"),
            daily_total: dec("44.76"),
        }
    }

    #[test]
    fn test_funding_coverage_serialization() {
        assert_eq!(
            serde_json::to_string(&FundingCoverage::Full).unwrap(),
            "\"full\""
        );
        assert_eq!(
            serde_json::to_string(&FundingCoverage::None).unwrap(),
            "\"none\""
        );
        let coverage: FundingCoverage = serde_json::from_str("\"partial\"").unwrap();
        assert_eq!(coverage, FundingCoverage::Partial);
    }

    #[test]
    fn test_daily_breakdown_serialization() {
        let json = serde_json::to_string(&create_sample_breakdown(Weekday::Tuesday)).unwrap();
        assert!(json.contains("\"day\":\"Tuesday\""));
        assert!(json.contains("\"session_type\":\"morning\""));
        assert!(json.contains("\"funded_hours\":\"1.18\""));
        assert!(json.contains("\"unfunded_cost\":\"34.76\""));
        assert!(json.contains("\"funding_coverage\":\"partial\""));
        assert!(json.contains("\"resource_fee\":\"10.00\""));
    }

    #[test]
    fn test_daily_breakdown_round_trips_through_json() {
        let breakdown = create_sample_breakdown(Weekday::Friday);
        let json = serde_json::to_string(&breakdown).unwrap();
        let parsed: DailyBreakdown = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, breakdown);
    }

    #[test]
    fn test_day_lookup_finds_attended_day_only() {
        let result = FeeResult {
            funding_tier: FundingTier::Fifteen,
            funding_pattern: FundingPattern::Stretched,
            daily_breakdown: vec![create_sample_breakdown(Weekday::Tuesday)],
            summary: WeeklySummary {
                total_weekly_cost: dec("44.76"),
                total_unfunded_cost: dec("34.76"),
                total_resource_fees: dec("10.00"),
                weekly_funding_hours: dec("1.18"),
                total_funded_hours: dec("1.18"),
                total_unfunded_hours: dec("3.82"),
                unused_funding_hours: dec("0"),
            },
            audit_trace: AuditTrace::default(),
        };

        assert!(result.day(Weekday::Tuesday).is_some());
        assert!(result.day(Weekday::Monday).is_none());
    }
}
