//! Point-in-time value object.

use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, SubsecRound, Utc};
use common::{Clock, SystemClock};
use serde::{Deserialize, Serialize};

use crate::entity::ValueObject;
use crate::error::ValidationError;
use crate::locale::{FormatError, Locale};

/// Offset-less layouts, read as UTC.
const NAIVE_DATE_TIME_LAYOUTS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Input accepted when constructing a [`DateTime`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateTimeInput {
    /// An already-resolved instant.
    Instant(chrono::DateTime<Utc>),
    /// An ISO-8601 string.
    Text(String),
}

impl From<chrono::DateTime<Utc>> for DateTimeInput {
    fn from(instant: chrono::DateTime<Utc>) -> Self {
        Self::Instant(instant)
    }
}

impl From<String> for DateTimeInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for DateTimeInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

/// A validated instant that is never in the future.
///
/// Held in UTC at millisecond precision. Validation happens against the clock
/// at construction time only; a value does not become invalid later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateTime {
    value: chrono::DateTime<Utc>,
}

impl DateTime {
    /// Creates a value holding the current instant.
    pub fn now() -> Self {
        Self {
            value: SystemClock.now().trunc_subsecs(3),
        }
    }

    /// Creates a value from an optional input, validated against the system clock.
    ///
    /// `None` yields the current instant.
    pub fn new(value: Option<DateTimeInput>) -> Result<Self, ValidationError> {
        Self::new_with_clock(value, &SystemClock)
    }

    /// Creates a value from an optional input, validated against `clock`.
    pub fn new_with_clock<C>(
        value: Option<DateTimeInput>,
        clock: &C,
    ) -> Result<Self, ValidationError>
    where
        C: Clock + ?Sized,
    {
        let now = clock.now();
        let instant = match value {
            None => {
                return Ok(Self {
                    value: now.trunc_subsecs(3),
                });
            }
            Some(DateTimeInput::Instant(instant)) => instant,
            Some(DateTimeInput::Text(text)) => parse_iso8601(&text)?,
        };
        if instant > now {
            return Err(ValidationError::FutureDate(to_iso8601(&instant)));
        }

        Ok(Self {
            value: instant.trunc_subsecs(3),
        })
    }

    /// Parses an ISO-8601 string, validated against the system clock.
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        Self::new(Some(text.into()))
    }

    /// Wraps an instant, validated against the system clock.
    pub fn from_instant(instant: chrono::DateTime<Utc>) -> Result<Self, ValidationError> {
        Self::new(Some(instant.into()))
    }

    /// Returns the underlying instant.
    pub fn value(&self) -> chrono::DateTime<Utc> {
        self.value
    }

    /// Renders the instant with the conventions of `locale`.
    pub fn format(&self, locale: &str) -> Result<String, FormatError> {
        Ok(Locale::parse(locale)?.format_date_time(&self.value))
    }

    /// Renders the instant with the default `en-US` conventions.
    pub fn format_default(&self) -> String {
        Locale::default().format_date_time(&self.value)
    }
}

impl ValueObject for DateTime {}

impl Default for DateTime {
    fn default() -> Self {
        Self::now()
    }
}

impl std::fmt::Display for DateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", to_iso8601(&self.value))
    }
}

impl FromStr for DateTime {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for DateTime {
    type Error = ValidationError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Self::new(Some(DateTimeInput::Text(text)))
    }
}

impl From<DateTime> for String {
    fn from(value: DateTime) -> Self {
        value.to_string()
    }
}

impl From<DateTime> for chrono::DateTime<Utc> {
    fn from(value: DateTime) -> Self {
        value.value
    }
}

fn to_iso8601(instant: &chrono::DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn parse_iso8601(text: &str) -> Result<chrono::DateTime<Utc>, ValidationError> {
    let trimmed = text.trim();

    if let Ok(parsed) = chrono::DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.with_timezone(&Utc));
    }

    for layout in NAIVE_DATE_TIME_LAYOUTS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, layout) {
            return Ok(naive.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }

    Err(ValidationError::InvalidDateFormat(text.to_string()))
}
