//! Calendar-aware cost advancement.
//!
//! Maps an abstract half-day cost onto concrete calendar days for one owner,
//! stepping over weekends and that owner's vacations. Skipped days widen the
//! elapsed distance but consume no actual capacity.
//!
//! # Algorithm
//!
//! Costs are consumed in whole-day pairs while at least two half-days remain:
//! before each pair the cursor first skips forward over non-working days
//! (each adds two elapsed half-days), then a working day consumes two elapsed
//! and two actual half-days and advances the date. An odd trailing half-day
//! repeats the skip and consumes one elapsed and one actual half-day without
//! advancing the date. When a hard cutoff is given, any unit that would be
//! consumed past it is abandoned along with everything after it, so the
//! actual figure becomes a lower bound.

use chrono::{Duration, NaiveDate};

use crate::models::VacationCalendar;

/// Outcome of advancing a cost across the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advance {
    /// First day after the consumed span (or the skip landing day when the
    /// cutoff truncated everything).
    pub date: NaiveDate,
    /// Half-days traversed on the calendar, skipped days included.
    pub elapsed_half_days: i32,
    /// Half-days that counted as real work.
    pub actual_half_days: i32,
}

/// Walks costs across the calendar for specific owners.
///
/// Pure: the same inputs always produce the same [`Advance`].
#[derive(Debug, Clone, Copy)]
pub struct CostAdvancer<'a> {
    vacations: &'a VacationCalendar,
}

impl<'a> CostAdvancer<'a> {
    /// Creates an advancer over the given vacation ledger.
    pub fn new(vacations: &'a VacationCalendar) -> Self {
        Self { vacations }
    }

    /// Advances `cost` half-days of work for `owner` starting at `from`.
    ///
    /// With `max_date` set, units that would be consumed on a day past it are
    /// abandoned and accumulation stops.
    pub fn advance(
        &self,
        owner: &str,
        from: NaiveDate,
        cost: i32,
        max_date: Option<NaiveDate>,
    ) -> Advance {
        let mut date = from;
        let mut elapsed = 0;
        let mut actual = 0;

        let mut days = 0;
        while days < cost / 2 {
            while self.vacations.skips(owner, date) {
                date += Duration::days(1);
                elapsed += 2;
            }

            if matches!(max_date, Some(max) if date > max) {
                break;
            }
            days += 1;
            elapsed += 2;
            actual += 2;
            date += Duration::days(1);
        }

        if cost % 2 == 1 {
            while self.vacations.skips(owner, date) {
                date += Duration::days(1);
                elapsed += 2;
            }

            // The half-day fits on the landing day; the date does not move.
            if !matches!(max_date, Some(max) if date > max) {
                elapsed += 1;
                actual += 1;
            }
        }

        Advance {
            date,
            elapsed_half_days: elapsed,
            actual_half_days: actual,
        }
    }

    /// Half-days of real work available to `owner` in the inclusive interval
    /// `[start, end]`.
    pub fn actual_cost(&self, owner: &str, start: NaiveDate, end: NaiveDate) -> i32 {
        let mut total = 0;
        let mut date = start;
        while date <= end {
            let step = self.advance(owner, date, 2, Some(end));
            date = step.date;
            total += step.actual_half_days;
        }
        total
    }
}
