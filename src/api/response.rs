//! Response types for the Nursery Fee Engine API.
//!
//! This module defines the success envelopes returned by the endpoints and
//! the error response structures used by the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::{FeeSchedule, NurseryMetadata, ResourceFeeRates};
use crate::error::EngineError;
use crate::models::{FeeResult, FundingPattern, FundingTier, SessionType};

/// Response body for the `/calculate` endpoint.
///
/// `result` is `null` when no day was booked. Only the envelope carries an
/// id and timestamp; `result` depends on the request alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeQuote {
    /// Unique identifier for this quote.
    pub quote_id: Uuid,
    /// When the quote was produced.
    pub generated_at: DateTime<Utc>,
    /// The version of the engine that produced the quote.
    pub engine_version: String,
    /// The effective date of the rates used.
    pub schedule_effective_date: NaiveDate,
    /// The fee breakdown, or `None` for an empty selection.
    pub result: Option<FeeResult>,
}

/// A funding choice the collaborator can offer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundingOption {
    /// The funding tier.
    pub funding_tier: FundingTier,
    /// The funding pattern.
    pub funding_pattern: FundingPattern,
    /// The weekly funded-hour pool for this choice.
    pub weekly_hours: Decimal,
    /// The text shown next to this choice.
    pub description: String,
}

/// A session the collaborator can offer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionOption {
    /// The session type key.
    pub session_type: SessionType,
    /// The label shown to parents.
    pub label: String,
    /// The session duration in hours.
    pub hours: Decimal,
}

/// Response body for the `/schedule` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleResponse {
    /// The nursery's name.
    pub nursery: String,
    /// The nursery's contact address.
    pub contact_email: String,
    /// The date these rates took effect.
    pub effective_date: NaiveDate,
    /// The charge per unfunded hour.
    pub hourly_rate: Decimal,
    /// Flat daily resource fees.
    pub resource_fees: ResourceFeeRates,
    /// Every tier and pattern combination.
    pub funding_options: Vec<FundingOption>,
    /// Every bookable session.
    pub sessions: Vec<SessionOption>,
}

impl ScheduleResponse {
    /// Describes a schedule for the collaborator.
    pub fn new(nursery: &NurseryMetadata, schedule: &FeeSchedule) -> Self {
        let funding_options = FundingTier::ALL
            .into_iter()
            .flat_map(|tier| {
                FundingPattern::ALL
                    .into_iter()
                    .map(move |pattern| FundingOption {
                        funding_tier: tier,
                        funding_pattern: pattern,
                        weekly_hours: schedule.weekly_funding_hours(tier, pattern),
                        description: schedule.funding_description(tier, pattern),
                    })
            })
            .collect();

        let sessions = SessionType::ALL
            .into_iter()
            .map(|session| SessionOption {
                session_type: session,
                label: session.label().to_string(),
                hours: session.hours(),
            })
            .collect();

        Self {
            nursery: nursery.name.clone(),
            contact_email: nursery.contact_email.clone(),
            effective_date: schedule.effective_date,
            hourly_rate: schedule.hourly_rate,
            resource_fees: schedule.resource_fees,
            funding_options,
            sessions,
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates an invalid weekday selection error response.
    pub fn invalid_selection(message: impl Into<String>) -> Self {
        Self::with_details(
            "INVALID_SELECTION",
            message,
            "weekday_selection holds at most five entries, Monday to Friday",
        )
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::InvalidSchedule { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            },
            EngineError::UnknownFundingTier { .. }
            | EngineError::UnknownFundingPattern { .. }
            | EngineError::UnknownSessionType { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::validation_error(message),
            },
            EngineError::InvalidWeekday { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::invalid_selection(message),
            },
            EngineError::ScheduleNotFound { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "SCHEDULE_NOT_FOUND",
                    message,
                    "No published rates cover the requested effective_date",
                ),
            },
        }
    }
}
