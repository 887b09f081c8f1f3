//! Session types offered by the nursery.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// A bookable session with a fixed duration.
///
/// # Example
///
/// ```
/// use nursery_fees::models::SessionType;
/// use rust_decimal::Decimal;
///
/// let session: SessionType = "morning".parse().unwrap();
/// assert_eq!(session.hours(), Decimal::from(5));
/// assert_eq!(session.label(), "Morning Session (7:30am - 12:30pm)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum SessionType {
    /// Full day, 7:30am to 5:30pm.
    Full,
    /// Morning session, 7:30am to 12:30pm.
    Morning,
    /// Afternoon session, 12:30pm to 5:30pm.
    Afternoon,
}

impl SessionType {
    /// Every session type, in the order the nursery lists them.
    pub const ALL: [SessionType; 3] = [
        SessionType::Full,
        SessionType::Morning,
        SessionType::Afternoon,
    ];

    /// Returns the wire key for this session.
    pub fn key(self) -> &'static str {
        match self {
            SessionType::Full => "full",
            SessionType::Morning => "morning",
            SessionType::Afternoon => "afternoon",
        }
    }

    /// Returns the session duration in hours.
    pub fn hours(self) -> Decimal {
        match self {
            SessionType::Full => Decimal::from(10),
            SessionType::Morning | SessionType::Afternoon => Decimal::from(5),
        }
    }

    /// Returns the label shown to parents, including the attendance window.
    pub fn label(self) -> &'static str {
        match self {
            SessionType::Full => "Full Day (7:30am - 5:30pm)",
            SessionType::Morning => "Morning Session (7:30am - 12:30pm)",
            SessionType::Afternoon => "Afternoon Session (12:30pm - 5:30pm)",
        }
    }
}

impl fmt::Display for SessionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SessionType {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full" => Ok(SessionType::Full),
            "morning" => Ok(SessionType::Morning),
            "afternoon" => Ok(SessionType::Afternoon),
            other => Err(EngineError::UnknownSessionType {
                value: other.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for SessionType {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SessionType> for &'static str {
    fn from(session: SessionType) -> Self {
        session.key()
    }
}
