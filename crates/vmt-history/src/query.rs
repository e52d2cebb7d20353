//! # Dashboard Queries
//!
//! The movement table narrows the dataset in three steps, always in this
//! order:
//!
//! 1. **Recency**: keep movements within a window before the reference
//!    date (`all`, `today`, `week`, `month`).
//! 2. **Search**: case-insensitive substring match over licence plate, VIN,
//!    contract number, both stages, and the operator.
//! 3. **Pagination**: cut one page out of what remains.
//!
//! Input order is preserved throughout.
//!
//! The reference date is part of the query. Elapsed days are whole days
//! from the movement date to the reference date; a movement dated after the
//! reference date has negative elapsed days, which `week` and `month` keep
//! and `today` does not.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use vmt_core::{CalendarDate, VehicleMovement, VmtError};

use crate::pagination::{Page, PageRequest};

/// Movement-date window relative to a reference date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecencyFilter {
    /// No restriction.
    #[default]
    All,
    /// Dated on the reference date.
    Today,
    /// At most 7 days old.
    Week,
    /// At most 30 days old.
    Month,
}

impl RecencyFilter {
    pub fn all_filters() -> &'static [RecencyFilter] {
        &[Self::All, Self::Today, Self::Week, Self::Month]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Today => "today",
            Self::Week => "week",
            Self::Month => "month",
        }
    }

    /// Whether `movement_date` falls inside the window ending at `reference`.
    pub fn admits(&self, movement_date: CalendarDate, reference: CalendarDate) -> bool {
        let elapsed = movement_date.days_until(reference);
        match self {
            Self::All => true,
            Self::Today => elapsed == 0,
            Self::Week => elapsed <= 7,
            Self::Month => elapsed <= 30,
        }
    }
}

impl std::fmt::Display for RecencyFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecencyFilter {
    type Err = VmtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::all_filters()
            .iter()
            .find(|filter| filter.as_str().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| {
                VmtError::Validation(format!(
                    "unknown filter {s:?} (expected all, today, week or month)"
                ))
            })
    }
}

/// Whether `movement` matches a free-text search.
///
/// An empty or whitespace-only query matches everything.
pub fn matches_search(movement: &VehicleMovement, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    [
        movement.license_plate.as_str(),
        movement.vin.as_str(),
        movement.contract_number.as_str(),
        movement.source_stage.as_str(),
        movement.target_stage.as_str(),
        movement.executed_by.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(&needle))
}

/// Table state: search text, recency window, and page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovementQuery {
    pub search: String,
    pub recency: RecencyFilter,
    pub reference_date: CalendarDate,
    pub page: PageRequest,
}

impl MovementQuery {
    /// Everything, first page, default page size.
    pub fn new(reference_date: CalendarDate) -> Self {
        Self {
            search: String::new(),
            recency: RecencyFilter::All,
            reference_date,
            page: PageRequest::default(),
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_recency(mut self, recency: RecencyFilter) -> Self {
        self.recency = recency;
        self
    }

    /// Select a 1-based page of `page_size` rows.
    pub fn with_page(mut self, page_size: usize, page_number: usize) -> Self {
        self.page = PageRequest::for_page(page_size, page_number);
        self
    }

    /// Whether one movement passes the recency window and the search.
    pub fn admits(&self, movement: &VehicleMovement) -> bool {
        self.recency
            .admits(movement.movement_date, self.reference_date)
            && matches_search(movement, &self.search)
    }

    /// Filter `records` and cut out the requested page.
    pub fn run<'a, I>(&self, records: I) -> Page<&'a VehicleMovement>
    where
        I: IntoIterator<Item = &'a VehicleMovement>,
    {
        self.page
            .slice(records.into_iter().filter(|m| self.admits(m)))
    }
}
