//! HTTP request handlers for the Nursery Fee Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate_weekly_fees;
use crate::config::FeeSchedule;
use crate::error::EngineResult;

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse, FeeQuote, ScheduleResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/schedule", get(schedule_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a funding choice and weekday selection and returns the fee quote.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing fee calculation request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    // A sixth weekday slot is reported separately from bad keys
                    if body_text.contains("Invalid weekday index") {
                        ApiError::invalid_selection(body_text)
                    } else {
                        ApiError::validation_error(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // Pick the rates for the requested date
    let schedule = match resolve_schedule(&state, &request) {
        Ok(schedule) => schedule,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Fee schedule lookup failed"
            );
            let api_error: ApiErrorResponse = err.into();
            return (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response();
        }
    };

    // Perform the calculation
    let result = calculate_weekly_fees(
        request.funding_tier,
        request.funding_pattern,
        &request.weekday_selection,
        &schedule,
    );

    match &result {
        Some(fees) => info!(
            correlation_id = %correlation_id,
            funding_tier = %request.funding_tier,
            funding_pattern = %request.funding_pattern,
            days = fees.daily_breakdown.len(),
            total_weekly_cost = %fees.summary.total_weekly_cost,
            "Fee calculation completed"
        ),
        None => info!(
            correlation_id = %correlation_id,
            "No days selected, returning empty quote"
        ),
    }

    // Wrap the deterministic result in the quote envelope
    let quote = FeeQuote {
        quote_id: correlation_id,
        generated_at: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        schedule_effective_date: schedule.effective_date,
        result,
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(quote),
    )
        .into_response()
}

/// Handler for GET /schedule endpoint.
///
/// Returns the current rates and the funding and session choices.
async fn schedule_handler(State(state): State<AppState>) -> Response {
    match state.config().current_schedule() {
        Ok(schedule) => {
            let body = ScheduleResponse::new(state.config().nursery(), &schedule);
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(err) => {
            warn!(error = %err, "Fee schedule unavailable");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Picks the schedule for the request's effective date, or the newest one.
fn resolve_schedule(state: &AppState, request: &CalculationRequest) -> EngineResult<FeeSchedule> {
    match request.effective_date {
        Some(date) => state.config().schedule_for(date),
        None => state.config().current_schedule(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use crate::models::{FundingPattern, FundingTier, SessionType, Weekday, WeekdaySelection};
    use axum::{body::Body, http::Request};
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config/little_lodge").expect("Failed to load config");
        AppState::new(config)
    }

    fn create_valid_request() -> CalculationRequest {
        CalculationRequest {
            funding_tier: FundingTier::Fifteen,
            funding_pattern: FundingPattern::Stretched,
            weekday_selection: WeekdaySelection::new()
                .with(Weekday::Monday, SessionType::Full)
                .with(Weekday::Tuesday, SessionType::Morning),
            effective_date: None,
        }
    }

    async fn post_json(router: Router, body: String) -> (StatusCode, Vec<u8>) {
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/calculate")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn test_valid_request_returns_200() {
        let router = create_router(create_test_state());
        let body = serde_json::to_string(&create_valid_request()).unwrap();

        let (status, body) = post_json(router, body).await;
        assert_eq!(status, StatusCode::OK);

        let quote: FeeQuote = serde_json::from_slice(&body).unwrap();
        let result = quote.result.expect("expected a fee result");
        assert_eq!(result.daily_breakdown.len(), 2);
        assert_eq!(
            result.summary.total_weekly_cost,
            Decimal::from_str("67.26").unwrap()
        );
        assert_eq!(quote.engine_version, env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_empty_selection_returns_null_result() {
        let router = create_router(create_test_state());
        let mut request = create_valid_request();
        request.weekday_selection = WeekdaySelection::new();

        let (status, body) = post_json(router, serde_json::to_string(&request).unwrap()).await;
        assert_eq!(status, StatusCode::OK);

        let quote: FeeQuote = serde_json::from_slice(&body).unwrap();
        assert!(quote.result.is_none());
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let (status, body) = post_json(router, "{invalid json".to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_numeric_funding_tier_is_a_validation_error() {
        let router = create_router(create_test_state());
        let body = r#"{"funding_tier": 15, "funding_pattern": "stretched"}"#;

        let (status, body) = post_json(router, body.to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(!error.message.contains("Invalid JSON syntax"));
    }

    #[tokio::test]
    async fn test_unknown_funding_tier_returns_400() {
        let router = create_router(create_test_state());
        let body = r#"{"funding_tier": "20", "funding_pattern": "stretched"}"#;

        let (status, body) = post_json(router, body.to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_six_slot_selection_returns_invalid_selection() {
        let router = create_router(create_test_state());
        let body = r#"{
            "funding_tier": "15",
            "funding_pattern": "stretched",
            "weekday_selection": [null, null, null, null, null, "full"]
        }"#;

        let (status, body) = post_json(router, body.to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "INVALID_SELECTION");
    }

    #[tokio::test]
    async fn test_effective_date_before_rates_returns_400() {
        let router = create_router(create_test_state());
        let mut request = create_valid_request();
        request.effective_date = chrono::NaiveDate::from_ymd_opt(2020, 1, 1);

        let (status, body) = post_json(router, serde_json::to_string(&request).unwrap()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "SCHEDULE_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_schedule_endpoint_lists_choices() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/schedule")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let schedule: ScheduleResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(schedule.nursery, "Little Lodge Nursery");
        assert_eq!(schedule.hourly_rate, Decimal::from_str("9.10").unwrap());
        assert_eq!(schedule.funding_options.len(), 4);
    }
}
