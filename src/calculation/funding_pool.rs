//! Weekly funding pool lookup.
//!
//! This module determines how many funded hours a child has to spend in a
//! week, given their funding tier and how the allowance is spread.

use rust_decimal::Decimal;

use crate::config::FeeSchedule;
use crate::models::{AuditStep, FundingPattern, FundingTier};

/// The fee schedule entry the pool comes from.
pub const FUNDING_POOL_CLAUSE: &str = "funding.weekly_hours";

/// The result of a funding pool lookup, including the pool and audit step.
#[derive(Debug, Clone)]
pub struct FundingPoolLookupResult {
    /// The weekly funded-hour pool.
    pub weekly_hours: Decimal,
    /// The audit step recording this lookup.
    pub audit_step: AuditStep,
}

/// Looks up the weekly funded-hour pool for a tier and pattern.
///
/// # Arguments
///
/// * `tier` - The child's funded-hours entitlement
/// * `pattern` - Whether the hours are stretched or used in term time
/// * `schedule` - The fee schedule holding the funding table
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use nursery_fees::calculation::lookup_funding_pool;
/// use nursery_fees::config::FeeSchedule;
/// use nursery_fees::models::{FundingPattern, FundingTier};
/// use rust_decimal::Decimal;
///
/// let result = lookup_funding_pool(
///     FundingTier::Thirty,
///     FundingPattern::TermTime,
///     &FeeSchedule::default(),
///     1,
/// );
/// assert_eq!(result.weekly_hours, Decimal::from(30));
/// ```
pub fn lookup_funding_pool(
    tier: FundingTier,
    pattern: FundingPattern,
    schedule: &FeeSchedule,
    step_number: u32,
) -> FundingPoolLookupResult {
    let weekly_hours = schedule.weekly_funding_hours(tier, pattern);
    let description = schedule.funding_description(tier, pattern);

    let audit_step = AuditStep {
        step_number,
        rule_id: "funding_pool_lookup".to_string(),
        rule_name: "Funding Pool Lookup".to_string(),
        clause_ref: FUNDING_POOL_CLAUSE.to_string(),
        input: serde_json::json!({
            "funding_tier": tier,
            "funding_pattern": pattern
        }),
        output: serde_json::json!({
            "weekly_hours": weekly_hours.normalize().to_string(),
            "description": description
        }),
        reasoning: format!(
            "{}-hour funding, {} ({}) = {}h funded pool this week",
            tier,
            pattern,
            description,
            weekly_hours.normalize()
        ),
    };

    FundingPoolLookupResult {
        weekly_hours,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_every_tier_and_pattern() {
        let schedule = FeeSchedule::default();
        let cases = [
            (FundingTier::Fifteen, FundingPattern::Stretched, "11.18"),
            (FundingTier::Fifteen, FundingPattern::TermTime, "15"),
            (FundingTier::Thirty, FundingPattern::Stretched, "22.35"),
            (FundingTier::Thirty, FundingPattern::TermTime, "30"),
        ];

        for (tier, pattern, expected) in cases {
            let result = lookup_funding_pool(tier, pattern, &schedule, 1);
            assert_eq!(result.weekly_hours, dec(expected), "{}/{}", tier, pattern);
        }
    }

    #[test]
    fn test_audit_step_records_lookup() {
        let result = lookup_funding_pool(
            FundingTier::Fifteen,
            FundingPattern::Stretched,
            &FeeSchedule::default(),
            1,
        );

        assert_eq!(result.audit_step.step_number, 1);
        assert_eq!(result.audit_step.rule_id, "funding_pool_lookup");
        assert_eq!(result.audit_step.clause_ref, "funding.weekly_hours");
        assert_eq!(result.audit_step.input["funding_tier"], "15");
        assert_eq!(result.audit_step.input["funding_pattern"], "stretched");
        assert_eq!(result.audit_step.output["weekly_hours"], "11.18");
        assert!(result.audit_step.reasoning.contains("11.18h funded pool"));
    }

    #[test]
    fn test_uses_configured_table() {
        let mut schedule = FeeSchedule::default();
        schedule.funding.weekly_hours.fifteen.term_time = dec("16");

        let result =
            lookup_funding_pool(FundingTier::Fifteen, FundingPattern::TermTime, &schedule, 3);
        assert_eq!(result.weekly_hours, dec("16"));
        assert_eq!(result.audit_step.step_number, 3);
    }
}
