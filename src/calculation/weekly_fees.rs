//! Weekly fee calculation.
//!
//! This module walks the week Monday to Friday, carrying the remaining
//! funded-hour pool from one attended day to the next, and aggregates the
//! priced days into a [`FeeResult`].

use rust_decimal::Decimal;

use crate::config::FeeSchedule;
use crate::error::EngineResult;
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, DailyBreakdown, FeeResult, FundingPattern, FundingTier,
    SessionType, WeekdaySelection, WeeklySummary,
};

use super::daily_allocation::{HOURLY_RATE_CLAUSE, allocate_day};
use super::funding_pool::lookup_funding_pool;
use super::resource_fee::RESOURCE_FEE_CLAUSE;
use super::rounding::{round_hours, round_to_cents};

/// Calculates a week's fees for a funding choice and session selection.
///
/// Returns `None` when no day is booked. Otherwise the funded-hour pool for
/// the tier and pattern is consumed day by day in weekday order, and the
/// result carries one [`DailyBreakdown`] per attended day, the weekly
/// totals, and the audit trace.
///
/// The pool is local to this call; identical inputs always produce an
/// identical result.
///
/// # Examples
///
/// ```
/// use nursery_fees::calculation::calculate_weekly_fees;
/// use nursery_fees::config::FeeSchedule;
/// use nursery_fees::models::{FundingPattern, FundingTier, SessionType, Weekday, WeekdaySelection};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let selection = WeekdaySelection::new()
///     .with(Weekday::Monday, SessionType::Full)
///     .with(Weekday::Tuesday, SessionType::Morning)
///     .with(Weekday::Wednesday, SessionType::Afternoon);
///
/// let result = calculate_weekly_fees(
///     FundingTier::Fifteen,
///     FundingPattern::Stretched,
///     &selection,
///     &FeeSchedule::default(),
/// )
/// .unwrap();
///
/// // 22.50 + 44.76 + 45.50
/// assert_eq!(result.summary.total_weekly_cost, Decimal::from_str("112.76").unwrap());
/// ```
pub fn calculate_weekly_fees(
    tier: FundingTier,
    pattern: FundingPattern,
    selection: &WeekdaySelection,
    schedule: &FeeSchedule,
) -> Option<FeeResult> {
    if selection.is_empty() {
        return None;
    }

    let mut steps: Vec<AuditStep> = Vec::new();
    let mut warnings: Vec<AuditWarning> = Vec::new();
    let mut step_number: u32 = 1;

    let pool = lookup_funding_pool(tier, pattern, schedule, step_number);
    let weekly_funding_hours = pool.weekly_hours;
    steps.push(pool.audit_step);
    step_number += 1;

    let mut remaining_pool = weekly_funding_hours;
    let mut daily_breakdown: Vec<DailyBreakdown> = Vec::with_capacity(selection.attended_count());

    for (day, session) in selection.attended() {
        let allocation = allocate_day(day, session, remaining_pool, schedule, step_number);
        remaining_pool = allocation.remaining_pool;
        daily_breakdown.push(allocation.breakdown);
        steps.push(allocation.audit_step);
        step_number += 1;
    }

    let summary = summarise(&daily_breakdown, weekly_funding_hours, remaining_pool);

    if summary.unused_funding_hours > Decimal::ZERO {
        warnings.push(AuditWarning {
            code: "FUNDING_UNUSED".to_string(),
            message: format!(
                "{}h of the {}h weekly funding pool were not used by the selected sessions",
                summary.unused_funding_hours, summary.weekly_funding_hours
            ),
            severity: "low".to_string(),
        });
    }

    steps.push(AuditStep {
        step_number,
        rule_id: "weekly_totals".to_string(),
        rule_name: "Weekly Totals".to_string(),
        clause_ref: format!("{}, {}", HOURLY_RATE_CLAUSE, RESOURCE_FEE_CLAUSE),
        input: serde_json::json!({
            "days": daily_breakdown.len(),
            "daily_totals": daily_breakdown
                .iter()
                .map(|d| format!("{:.2}", d.daily_total))
                .collect::<Vec<_>>()
        }),
        output: serde_json::json!({
            "total_weekly_cost": format!("{:.2}", summary.total_weekly_cost),
            "total_unfunded_cost": format!("{:.2}", summary.total_unfunded_cost),
            "total_resource_fees": format!("{:.2}", summary.total_resource_fees),
            "unused_funding_hours": summary.unused_funding_hours.to_string()
        }),
        reasoning: format!(
            "£{:.2} unfunded hours + £{:.2} resource fees = £{:.2} per week",
            summary.total_unfunded_cost, summary.total_resource_fees, summary.total_weekly_cost
        ),
    });

    Some(FeeResult {
        funding_tier: tier,
        funding_pattern: pattern,
        daily_breakdown,
        summary,
        audit_trace: AuditTrace { steps, warnings },
    })
}

/// Sums already-rounded daily values into the weekly summary.
fn summarise(
    days: &[DailyBreakdown],
    weekly_funding_hours: Decimal,
    remaining_pool: Decimal,
) -> WeeklySummary {
    let money = |field: fn(&DailyBreakdown) -> Decimal| -> Decimal {
        round_to_cents(days.iter().map(field).sum())
    };
    let hours = |field: fn(&DailyBreakdown) -> Decimal| -> Decimal {
        round_hours(days.iter().map(field).sum())
    };

    WeeklySummary {
        total_weekly_cost: money(|d| d.daily_total),
        total_unfunded_cost: money(|d| d.unfunded_cost),
        total_resource_fees: money(|d| d.resource_fee),
        weekly_funding_hours: round_hours(weekly_funding_hours),
        total_funded_hours: hours(|d| d.funded_hours),
        total_unfunded_hours: hours(|d| d.unfunded_hours),
        unused_funding_hours: round_hours(remaining_pool),
    }
}

/// Calculates a week's fees from the collaborator's string keys.
///
/// This is the entry point for callers holding raw form values:
/// `funding_tier` is `"15"` or `"30"`, `funding_pattern` is `"stretched"` or
/// `"termTime"`, and `weekday_selection` holds up to five entries, Monday
/// first, each `None` or one of `"full"`, `"morning"`, `"afternoon"`. Prices
/// against [`FeeSchedule::default`].
///
/// Any key outside those sets, or a sixth slot, is a broken caller contract
/// and is returned as an error straight away rather than being skipped.
///
/// # Examples
///
/// ```
/// use nursery_fees::calculation::compute_fees;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let selection = [Some("full"); 5];
/// let result = compute_fees("30", "termTime", &selection).unwrap().unwrap();
/// assert_eq!(result.summary.total_weekly_cost, Decimal::from_str("249.50").unwrap());
///
/// assert!(compute_fees("15", "stretched", &[None, None]).unwrap().is_none());
/// assert!(compute_fees("15", "weekly", &[]).is_err());
/// ```
pub fn compute_fees(
    funding_tier: &str,
    funding_pattern: &str,
    weekday_selection: &[Option<&str>],
) -> EngineResult<Option<FeeResult>> {
    let tier: FundingTier = funding_tier.parse()?;
    let pattern: FundingPattern = funding_pattern.parse()?;
    let sessions = weekday_selection
        .iter()
        .map(|slot| slot.map(str::parse::<SessionType>).transpose())
        .collect::<EngineResult<Vec<_>>>()?;
    let selection = WeekdaySelection::from_slots(sessions)?;

    Ok(calculate_weekly_fees(
        tier,
        pattern,
        &selection,
        &FeeSchedule::default(),
    ))
}
