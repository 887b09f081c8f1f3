//! Weekdays and the per-weekday session selection.
//!
//! The order of [`Weekday::ALL`] is the order in which the weekly funding pool
//! is consumed, so it must stay Monday first.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::SessionType;

/// A nursery opening day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    /// Monday.
    Monday,
    /// Tuesday.
    Tuesday,
    /// Wednesday.
    Wednesday,
    /// Thursday.
    Thursday,
    /// Friday.
    Friday,
}

impl Weekday {
    /// Opening days in pool-consumption order.
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// Returns the zero-based slot index (Monday = 0).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the weekday for a zero-based slot index.
    ///
    /// # Example
    ///
    /// ```
    /// use nursery_fees::models::Weekday;
    ///
    /// assert_eq!(Weekday::from_index(2).unwrap(), Weekday::Wednesday);
    /// assert!(Weekday::from_index(5).is_err());
    /// ```
    pub fn from_index(index: usize) -> EngineResult<Self> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(EngineError::InvalidWeekday { index })
    }

    /// Returns the English day name.
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The session booked on each weekday, Monday to Friday.
///
/// On the wire this is an array of up to five entries, each either `null` or
/// a session key. Missing trailing entries are treated as empty days; a sixth
/// entry is rejected.
///
/// # Example
///
/// ```
/// use nursery_fees::models::{SessionType, Weekday, WeekdaySelection};
///
/// let selection = WeekdaySelection::new()
///     .with(Weekday::Monday, SessionType::Full)
///     .with(Weekday::Wednesday, SessionType::Morning);
///
/// let attended: Vec<_> = selection.attended().collect();
/// assert_eq!(
///     attended,
///     vec![
///         (Weekday::Monday, SessionType::Full),
///         (Weekday::Wednesday, SessionType::Morning),
///     ]
/// );
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "Vec<Option<SessionType>>",
    into = "Vec<Option<SessionType>>"
)]
pub struct WeekdaySelection {
    slots: [Option<SessionType>; 5],
}

impl WeekdaySelection {
    /// Creates a selection with no days booked.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a selection from slots in weekday order.
    ///
    /// Fewer than five slots leaves the remaining days empty. More than five
    /// is a contract violation and returns `InvalidWeekday` for the first
    /// out-of-range index.
    pub fn from_slots<I>(slots: I) -> EngineResult<Self>
    where
        I: IntoIterator<Item = Option<SessionType>>,
    {
        let mut selection = Self::new();
        for (index, session) in slots.into_iter().enumerate() {
            let day = Weekday::from_index(index)?;
            selection.set(day, session);
        }
        Ok(selection)
    }

    /// Returns the selection with `session` booked on `day`.
    pub fn with(mut self, day: Weekday, session: SessionType) -> Self {
        self.set(day, Some(session));
        self
    }

    /// Books, replaces or clears the session on `day`.
    pub fn set(&mut self, day: Weekday, session: Option<SessionType>) {
        self.slots[day.index()] = session;
    }

    /// Clears the booking on `day`.
    pub fn clear(&mut self, day: Weekday) {
        self.set(day, None);
    }

    /// Returns the session booked on `day`, if any.
    pub fn get(&self, day: Weekday) -> Option<SessionType> {
        self.slots[day.index()]
    }

    /// Iterates over booked days in weekday order.
    pub fn attended(&self) -> impl Iterator<Item = (Weekday, SessionType)> + '_ {
        Weekday::ALL
            .into_iter()
            .filter_map(|day| self.get(day).map(|session| (day, session)))
    }

    /// Returns the number of booked days.
    pub fn attended_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Returns true if no day is booked.
    pub fn is_empty(&self) -> bool {
        self.attended_count() == 0
    }
}

impl TryFrom<Vec<Option<SessionType>>> for WeekdaySelection {
    type Error = EngineError;

    fn try_from(slots: Vec<Option<SessionType>>) -> Result<Self, Self::Error> {
        Self::from_slots(slots)
    }
}

impl From<WeekdaySelection> for Vec<Option<SessionType>> {
    fn from(selection: WeekdaySelection) -> Self {
        selection.slots.to_vec()
    }
}
