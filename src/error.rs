//! Error types for the Nursery Fee Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The fee allocator itself cannot fail on typed input; these errors come from
//! loading the fee schedule and from the string boundary where a collaborator
//! hands over funding and session keys.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Nursery Fee Engine.
///
/// # Example
///
/// ```
/// use nursery_fees::error::EngineError;
///
/// let error = EngineError::UnknownSessionType {
///     value: "evening".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unknown session type: evening");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A funding tier key outside the supported set was supplied.
    #[error("Unknown funding tier: {value}")]
    UnknownFundingTier {
        /// The rejected key.
        value: String,
    },

    /// A funding pattern key outside the supported set was supplied.
    #[error("Unknown funding pattern: {value}")]
    UnknownFundingPattern {
        /// The rejected key.
        value: String,
    },

    /// A session type key outside the supported set was supplied.
    #[error("Unknown session type: {value}")]
    UnknownSessionType {
        /// The rejected key.
        value: String,
    },

    /// A weekday index outside Monday..Friday was supplied.
    #[error("Invalid weekday index: {index} (expected 0-4)")]
    InvalidWeekday {
        /// The rejected index.
        index: usize,
    },

    /// No fee schedule is effective on the requested date.
    #[error("No fee schedule effective on {date}")]
    ScheduleNotFound {
        /// The date for which a schedule was requested.
        date: NaiveDate,
    },

    /// A loaded fee schedule breaks one of its invariants.
    #[error("Invalid fee schedule: {message}")]
    InvalidSchedule {
        /// A description of the broken invariant.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
