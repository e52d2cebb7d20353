//! # Temporal Types — Calendar Dates
//!
//! Defines `CalendarDate`, the date type for `movementDate` and
//! `executionDate`. Movements are recorded per day, so there is no time of
//! day and no timezone: the value is a proleptic Gregorian date rendered
//! as ISO 8601 `YYYY-MM-DD`.
//!
//! "Today" is never read implicitly by date arithmetic. Callers that need it
//! pass a reference date, obtained once from [`CalendarDate::today()`] at the
//! outermost layer.

use chrono::{Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::VmtError;

/// A calendar day, serialized as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// The current UTC calendar day.
    pub fn today() -> Self {
        Self(Utc::now().date_naive())
    }

    /// Wrap a `chrono::NaiveDate`.
    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Build a date from year, month and day.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the triple is not a real date.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, VmtError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| {
                VmtError::Validation(format!("invalid date: {year:04}-{month:02}-{day:02}"))
            })
    }

    /// Parse a strict ISO 8601 calendar date (`YYYY-MM-DD`).
    pub fn parse(s: &str) -> Result<Self, VmtError> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Self)
            .map_err(|e| VmtError::Validation(format!("invalid date {s:?}: {e}")))
    }

    /// Access the inner `NaiveDate`.
    pub fn as_naive_date(&self) -> &NaiveDate {
        &self.0
    }

    /// Whole days from `self` to `reference` (positive when `self` is
    /// earlier).
    pub fn days_until(&self, reference: CalendarDate) -> i64 {
        reference.0.signed_duration_since(self.0).num_days()
    }

    /// The date `days` later, saturating at the calendar's upper bound.
    pub fn plus_days(&self, days: u64) -> Self {
        self.0
            .checked_add_days(Days::new(days))
            .map(Self)
            .unwrap_or(*self)
    }

    /// The date `days` earlier, saturating at the calendar's lower bound.
    pub fn minus_days(&self, days: u64) -> Self {
        self.0
            .checked_sub_days(Days::new(days))
            .map(Self)
            .unwrap_or(*self)
    }

    /// Render as `YYYY-MM-DD`.
    pub fn to_iso8601(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }
}

impl std::fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

impl std::str::FromStr for CalendarDate {
    type Err = VmtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
