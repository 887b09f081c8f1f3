//! Request types for the Nursery Fee Engine API.
//!
//! This module defines the JSON request structure for the `/calculate`
//! endpoint.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{FundingPattern, FundingTier, WeekdaySelection};

/// Request body for the `/calculate` endpoint.
///
/// ```json
/// {
///   "funding_tier": "15",
///   "funding_pattern": "stretched",
///   "weekday_selection": ["full", "morning", null, null, null]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The child's funded-hours entitlement (`"15"` or `"30"`).
    pub funding_tier: FundingTier,
    /// How the funding is spread (`"stretched"` or `"termTime"`).
    pub funding_pattern: FundingPattern,
    /// Sessions booked Monday to Friday.
    #[serde(default)]
    pub weekday_selection: WeekdaySelection,
    /// Price against the rates in effect on this date instead of the newest.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SessionType, Weekday};

    #[test]
    fn test_deserialize_minimal_request() {
        let json = r#"{
            "funding_tier": "30",
            "funding_pattern": "termTime"
        }"#;

        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.funding_tier, FundingTier::Thirty);
        assert_eq!(request.funding_pattern, FundingPattern::TermTime);
        assert!(request.weekday_selection.is_empty());
        assert!(request.effective_date.is_none());
    }

    #[test]
    fn test_deserialize_full_request() {
        let json = r#"{
            "funding_tier": "15",
            "funding_pattern": "stretched",
            "weekday_selection": ["full", "morning", null, null, "afternoon"],
            "effective_date": "2026-01-12"
        }"#;

        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(
            request.weekday_selection.get(Weekday::Friday),
            Some(SessionType::Afternoon)
        );
        assert_eq!(request.weekday_selection.attended_count(), 3);
        assert_eq!(
            request.effective_date,
            Some(NaiveDate::from_ymd_opt(2026, 1, 12).unwrap())
        );
    }

    #[test]
    fn test_numeric_funding_tier_fails_as_data_error() {
        let json = r#"{"funding_tier": 15, "funding_pattern": "stretched"}"#;

        let err = serde_json::from_str::<CalculationRequest>(json).unwrap_err();
        assert!(err.is_data());
    }

    #[test]
    fn test_unknown_session_fails_to_deserialize() {
        let json = r#"{
            "funding_tier": "15",
            "funding_pattern": "stretched",
            "weekday_selection": ["brunch"]
        }"#;

        let result: Result<CalculationRequest, _> = serde_json::from_str(json);
        assert!(result.unwrap_err().to_string().contains("Unknown session type: brunch"));
    }
}
