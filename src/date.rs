//! Calendar dates stored canonically as `YYYY-MM-DD` strings.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, CalendarResult};

/// strftime pattern for the canonical representation.
const CANONICAL_FORMAT: &str = "%Y-%m-%d";

/// A calendar date, e.g. `"2025-01-06"`.
///
/// Holds the canonical `YYYY-MM-DD` string alongside its parsed
/// [`NaiveDate`]. Equality, ordering, hashing, and serde all go through the
/// string; because the format is canonical and zero-padded, string order
/// coincides with chronological order. The only public constructors
/// validate, so a `CalendarDate` always denotes a real calendar date.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarDate {
    raw: String,
    parsed: NaiveDate,
}

impl CalendarDate {
    /// Parse a canonical `YYYY-MM-DD` string.
    ///
    /// Rejects strings that do not match the pattern, do not denote a real
    /// calendar date (`"2025-02-30"`), or are not canonically zero-padded
    /// (`"2025-1-6"`): chrono would accept unpadded fields, but date equality
    /// in this model is string equality, so only the canonical spelling is
    /// admitted.
    pub fn parse(input: &str) -> CalendarResult<Self> {
        let parsed = NaiveDate::parse_from_str(input, CANONICAL_FORMAT).map_err(|_| {
            CalendarError::InvalidDateFormat {
                input: input.to_string(),
            }
        })?;

        if parsed.format(CANONICAL_FORMAT).to_string() != input {
            return Err(CalendarError::InvalidDateFormat {
                input: input.to_string(),
            });
        }

        Ok(CalendarDate {
            raw: input.to_string(),
            parsed,
        })
    }

    /// Parse a date and assert its day of week.
    ///
    /// This is the data-entry guard wired through every literal date in a
    /// term dataset: datasets are maintained by hand and copied across terms,
    /// so a wrong year or an off-by-one day is caught here, at construction,
    /// rather than surfacing as a silently wrong calendar.
    pub fn verified(input: &str, expected: Weekday) -> CalendarResult<Self> {
        let date = Self::parse(input)?;
        let actual = date.weekday();
        if actual != expected {
            return Err(CalendarError::WeekdayMismatch {
                date: date.raw,
                expected,
                actual,
            });
        }
        Ok(date)
    }

    /// Build a `CalendarDate` from an already-valid [`NaiveDate`].
    ///
    /// Infallible: the canonical string is derived by formatting.
    pub(crate) fn from_naive(parsed: NaiveDate) -> Self {
        CalendarDate {
            raw: parsed.format(CANONICAL_FORMAT).to_string(),
            parsed,
        }
    }

    /// The canonical `YYYY-MM-DD` string.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The underlying chrono date.
    pub fn naive(&self) -> NaiveDate {
        self.parsed
    }

    /// Day of week ("Mon".."Sun" when displayed).
    pub fn weekday(&self) -> Weekday {
        self.parsed.weekday()
    }

    /// Re-format with a strftime pattern.
    ///
    /// Display strings (weekday abbreviations, long-form dates) are derived
    /// from the one canonical representation instead of being stored
    /// alongside it. Callers pass literal, known-valid patterns such as
    /// `"%a"` or `"%B %-d, %Y"`.
    ///
    /// # Panics
    ///
    /// Panics if `pattern` contains an unrecognized strftime specifier,
    /// when chrono's delayed formatter renders it. The pattern is part of
    /// the caller's code, not data, so a bad one is a defect to surface at
    /// the call site rather than degrade.
    pub fn format(&self, pattern: &str) -> String {
        self.parsed.format(pattern).to_string()
    }
}

impl PartialEq for CalendarDate {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for CalendarDate {}

impl PartialOrd for CalendarDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CalendarDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.raw.cmp(&other.raw)
    }
}

impl Hash for CalendarDate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for CalendarDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CalendarDate {
    type Error = CalendarError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CalendarDate> for String {
    fn from(date: CalendarDate) -> Self {
        date.raw
    }
}

impl AsRef<str> for CalendarDate {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}
