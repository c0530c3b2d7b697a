//! Error types for the coursecal crate.

use chrono::Weekday;
use thiserror::Error;

/// Errors raised while building a course calendar from its literal dataset.
///
/// All of these indicate a defect in hand-maintained term data, not a
/// runtime condition: they abort construction so a wrong calendar fails the
/// build instead of rendering silently.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("Invalid date '{input}'. Expected YYYY-MM-DD")]
    InvalidDateFormat { input: String },

    #[error("Date {date} is not {expected} (actual: {actual})")]
    WeekdayMismatch {
        date: String,
        expected: Weekday,
        actual: Weekday,
    },

    #[error("Dates of instruction start {start} after end {end}")]
    InvalidRange { start: String, end: String },

    #[error("Calendar item '{title}' has an empty dates list")]
    EmptyDates { title: String },
}

/// Result type alias for coursecal operations.
pub type CalendarResult<T> = Result<T, CalendarError>;
