//! Per-owner vacation ledger.
//!
//! Vacations are inclusive date ranges during which an owner does no work.
//! Together with weekends they define the non-working days the scheduler
//! steps over when mapping half-day costs onto the calendar.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// A single vacation entry: one owner, one inclusive date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vacation {
    /// Owner taking the vacation.
    pub owner: String,
    /// First day off (inclusive).
    pub start: NaiveDate,
    /// Last day off (inclusive).
    pub end: NaiveDate,
}

impl Vacation {
    /// Creates a vacation entry.
    pub fn new(owner: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            owner: owner.into(),
            start,
            end,
        }
    }

    /// Creates a single-day vacation.
    pub fn single_day(owner: impl Into<String>, day: NaiveDate) -> Self {
        Self::new(owner, day, day)
    }

    /// Whether `date` falls within this vacation.
    #[inline]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// The full set of vacations for a project, queried by owner and date.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VacationCalendar {
    entries: Vec<Vacation>,
}

impl VacationCalendar {
    /// Creates an empty calendar (no vacations anywhere).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calendar from a list of entries.
    pub fn from_entries(entries: Vec<Vacation>) -> Self {
        Self { entries }
    }

    /// Adds a vacation entry.
    pub fn with_vacation(mut self, vacation: Vacation) -> Self {
        self.entries.push(vacation);
        self
    }

    /// All entries.
    pub fn entries(&self) -> &[Vacation] {
        &self.entries
    }

    /// Whether `owner` is on vacation on `date`.
    pub fn is_on_vacation(&self, owner: &str, date: NaiveDate) -> bool {
        self.entries
            .iter()
            .any(|v| v.owner == owner && v.contains(date))
    }

    /// Whether `date` is a Saturday or Sunday.
    pub fn is_weekend(&self, date: NaiveDate) -> bool {
        matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Whether `date` is a non-working day for `owner`: a weekend, or a day
    /// covered by one of the owner's vacations.
    pub fn skips(&self, owner: &str, date: NaiveDate) -> bool {
        self.is_weekend(date) || self.is_on_vacation(owner, date)
    }
}
