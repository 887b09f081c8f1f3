//! HTTP API module for the Nursery Fee Engine.
//!
//! This module exposes the fee calculation to a presentation layer:
//! `POST /calculate` prices a week and `GET /schedule` lists the rates and
//! the funding and session choices to offer.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CalculationRequest;
pub use response::{ApiError, FeeQuote, FundingOption, ScheduleResponse, SessionOption};
pub use state::AppState;
