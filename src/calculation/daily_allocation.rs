//! Per-day funding allocation.
//!
//! This module draws one day's funded hours from the remaining weekly pool
//! and prices whatever the pool could not cover.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::FeeSchedule;
use crate::models::{AuditStep, DailyBreakdown, FundingCoverage, SessionType, Weekday};

use super::resource_fee::{RESOURCE_FEE_CLAUSE, calculate_resource_fee};
use super::rounding::{round_hours, round_to_cents};

/// The fee schedule entry unfunded hours are priced from.
pub const HOURLY_RATE_CLAUSE: &str = "rates.hourly";

/// The result of allocating one day, including the pool left for later days.
#[derive(Debug, Clone)]
pub struct DailyAllocationResult {
    /// The priced breakdown for the day.
    pub breakdown: DailyBreakdown,
    /// Pool hours left for the rest of the week. Never negative.
    pub remaining_pool: Decimal,
    /// The audit step recording this allocation.
    pub audit_step: AuditStep,
}

/// Allocates funded hours to one attended day and prices the rest.
///
/// The day draws `min(remaining_pool, session_hours)` from the pool. Unfunded
/// hours are billed at the schedule's hourly rate and a resource fee is added
/// according to how much of the session was funded. Every hour and money
/// field is rounded to two decimals independently; the pool carried forward
/// is left unrounded.
///
/// # Arguments
///
/// * `day` - The weekday being priced
/// * `session` - The session booked on that day
/// * `remaining_pool` - Funded hours left before this day
/// * `schedule` - The rates to price against
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use nursery_fees::calculation::allocate_day;
/// use nursery_fees::config::FeeSchedule;
/// use nursery_fees::models::{FundingCoverage, SessionType, Weekday};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = allocate_day(
///     Weekday::Tuesday,
///     SessionType::Morning,
///     Decimal::from_str("1.18").unwrap(),
///     &FeeSchedule::default(),
///     3,
/// );
///
/// assert_eq!(result.breakdown.unfunded_cost, Decimal::from_str("34.76").unwrap());
/// assert_eq!(result.breakdown.funding_coverage, FundingCoverage::Partial);
/// assert_eq!(result.remaining_pool, Decimal::ZERO);
/// ```
pub fn allocate_day(
    day: Weekday,
    session: SessionType,
    remaining_pool: Decimal,
    schedule: &FeeSchedule,
    step_number: u32,
) -> DailyAllocationResult {
    let session_hours = session.hours();
    let pool_before = remaining_pool.max(Decimal::ZERO);

    let funded_hours = pool_before.min(session_hours);
    let pool_after = (pool_before - funded_hours).max(Decimal::ZERO);
    let unfunded_hours = session_hours - funded_hours;
    let unfunded_cost = unfunded_hours * schedule.hourly_rate;

    let resource_fee = calculate_resource_fee(funded_hours, session_hours, &schedule.resource_fees);
    let daily_total = unfunded_cost + resource_fee.fee;

    let breakdown = DailyBreakdown {
        day,
        session_type: session,
        session_label: session.label().to_string(),
        session_hours,
        funded_hours: round_hours(funded_hours),
        unfunded_hours: round_hours(unfunded_hours),
        unfunded_cost: round_to_cents(unfunded_cost),
        funding_coverage: resource_fee.coverage,
        resource_fee: round_to_cents(resource_fee.fee),
        daily_total: round_to_cents(daily_total),
    };

    debug!(
        day = %day,
        session = %session,
        pool_before = %pool_before,
        funded_hours = %breakdown.funded_hours,
        daily_total = %breakdown.daily_total,
        "Allocated funded hours"
    );

    let coverage_text = match resource_fee.coverage {
        FundingCoverage::Full => "fully funded",
        FundingCoverage::Partial => "partially funded",
        FundingCoverage::None => "not funded",
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "daily_allocation".to_string(),
        rule_name: format!("{} Allocation", day),
        clause_ref: format!("{}, {}", HOURLY_RATE_CLAUSE, RESOURCE_FEE_CLAUSE),
        input: serde_json::json!({
            "day": day,
            "session_type": session,
            "session_hours": session_hours.normalize().to_string(),
            "pool_before": pool_before.normalize().to_string(),
            "hourly_rate": schedule.hourly_rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "funded_hours": breakdown.funded_hours.to_string(),
            "unfunded_hours": breakdown.unfunded_hours.to_string(),
            "unfunded_cost": format!("{:.2}", breakdown.unfunded_cost),
            "funding_coverage": resource_fee.coverage,
            "resource_fee": format!("{:.2}", breakdown.resource_fee),
            "daily_total": format!("{:.2}", breakdown.daily_total),
            "pool_after": pool_after.normalize().to_string()
        }),
        reasoning: format!(
            "min({}h pool, {}h session) = {}h funded; {}h × £{:.2} = £{:.2}; \
             {} → £{:.2} resource fee; total £{:.2}",
            pool_before.normalize(),
            session_hours.normalize(),
            breakdown.funded_hours,
            breakdown.unfunded_hours,
            schedule.hourly_rate,
            breakdown.unfunded_cost,
            coverage_text,
            breakdown.resource_fee,
            breakdown.daily_total
        ),
    };

    DailyAllocationResult {
        breakdown,
        remaining_pool: pool_after,
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

    fn allocate(session: SessionType, pool: &str) -> DailyAllocationResult {
        allocate_day(Weekday::Monday, session, dec(pool), &FeeSchedule::default(), 2)
    }

    #[test]
    fn test_full_day_from_stretched_fifteen_pool() {
        let result = allocate(SessionType::Full, "11.18");
        let day = &result.breakdown;

        assert_eq!(day.session_hours, dec("10"));
        assert_eq!(day.funded_hours, dec("10"));
        assert_eq!(day.unfunded_hours, dec("0"));
        assert_eq!(day.unfunded_cost, dec("0"));
        assert_eq!(day.funding_coverage, FundingCoverage::Full);
        assert_eq!(day.resource_fee, dec("22.50"));
        assert_eq!(day.daily_total, dec("22.50"));
        assert_eq!(result.remaining_pool, dec("1.18"));
    }

    #[test]
    fn test_morning_drains_remaining_pool() {
        let result = allocate(SessionType::Morning, "1.18");
        let day = &result.breakdown;

        assert_eq!(day.funded_hours, dec("1.18"));
        assert_eq!(day.unfunded_hours, dec("3.82"));
        // 3.82 × 9.10 = 34.762
        assert_eq!(day.unfunded_cost, dec("34.76"));
        assert_eq!(day.funding_coverage, FundingCoverage::Partial);
        assert_eq!(day.resource_fee, dec("10.00"));
        assert_eq!(day.daily_total, dec("44.76"));
        assert_eq!(result.remaining_pool, Decimal::ZERO);
    }

    #[test]
    fn test_empty_pool_bills_every_hour() {
        let result = allocate(SessionType::Afternoon, "0");
        let day = &result.breakdown;

        assert_eq!(day.funded_hours, Decimal::ZERO);
        assert_eq!(day.unfunded_hours, dec("5"));
        assert_eq!(day.unfunded_cost, dec("45.50"));
        assert_eq!(day.funding_coverage, FundingCoverage::None);
        assert_eq!(day.resource_fee, Decimal::ZERO);
        assert_eq!(day.daily_total, dec("45.50"));
        assert_eq!(result.remaining_pool, Decimal::ZERO);
    }

    #[test]
    fn test_pool_exactly_matching_session_is_fully_funded() {
        let result = allocate(SessionType::Morning, "5");
        assert_eq!(result.breakdown.funding_coverage, FundingCoverage::Full);
        assert_eq!(result.remaining_pool, Decimal::ZERO);
    }

    #[test]
    fn test_negative_pool_is_treated_as_empty() {
        let result = allocate(SessionType::Full, "-3");
        assert_eq!(result.breakdown.funded_hours, Decimal::ZERO);
        assert_eq!(result.remaining_pool, Decimal::ZERO);
    }

    #[test]
    fn test_session_label_is_copied_into_breakdown() {
        let result = allocate(SessionType::Full, "30");
        assert_eq!(result.breakdown.session_label, "Full Day (7:30am - 5:30pm)");
        assert_eq!(result.breakdown.day, Weekday::Monday);
    }

    #[test]
    fn test_audit_step_explains_partial_funding() {
        let result = allocate(SessionType::Morning, "1.18");
        let step = &result.audit_step;

        assert_eq!(step.step_number, 2);
        assert_eq!(step.rule_id, "daily_allocation");
        assert_eq!(step.rule_name, "Monday Allocation");
        assert_eq!(step.clause_ref, "rates.hourly, rates.resource_fee");
        assert_eq!(step.input["pool_before"], "1.18");
        assert_eq!(step.output["funding_coverage"], "partial");
        assert_eq!(step.output["unfunded_cost"], "34.76");
        assert_eq!(step.output["pool_after"], "0");
        assert_eq!(
            step.reasoning,
            "min(1.18h pool, 5h session) = 1.18h funded; 3.82h × £9.10 = £34.76; \
             partially funded → £10.00 resource fee; total £44.76"
        );
    }

    #[test]
    fn test_drained_pool_serializes_hours_without_trailing_zeros() {
        // 1.18 - 1.18 leaves a scale-2 zero in the pool
        let drained = allocate(SessionType::Morning, "1.18").remaining_pool;
        let result = allocate(SessionType::Full, &drained.to_string());
        let json = serde_json::to_value(&result.breakdown).unwrap();

        assert_eq!(json["funded_hours"], "0");
        assert_eq!(json["unfunded_hours"], "10");
        assert_eq!(json["unfunded_cost"], "91.00");
        assert_eq!(json["resource_fee"], "0.00");
        assert_eq!(json["daily_total"], "91.00");
    }

    #[test]
    fn test_fully_funded_day_serializes_money_at_two_places() {
        let json = serde_json::to_value(&allocate(SessionType::Full, "30").breakdown).unwrap();

        assert_eq!(json["funded_hours"], "10");
        assert_eq!(json["unfunded_hours"], "0");
        assert_eq!(json["unfunded_cost"], "0.00");
        assert_eq!(json["daily_total"], "22.50");
    }

    #[test]
    fn test_uses_schedule_hourly_rate() {
        let mut schedule = FeeSchedule::default();
        schedule.hourly_rate = dec("10");
        let result = allocate_day(Weekday::Friday, SessionType::Full, dec("4"), &schedule, 1);

        assert_eq!(result.breakdown.unfunded_cost, dec("60"));
        assert_eq!(result.breakdown.daily_total, dec("70"));
    }
}
