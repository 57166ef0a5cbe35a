//! Half-day calendar units.
//!
//! All scheduling in this crate happens at half-day precision: one calendar
//! day holds two slots (morning and afternoon). Costs and offsets are counts
//! of such slots, and this module converts between an integer offset from the
//! project start and a concrete calendar position.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Which half of a day a position falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DayHalf {
    /// The first slot of the day.
    Morning,
    /// The second slot of the day.
    Afternoon,
}

/// A calendar date with half-day precision.
///
/// Ordering is by date first, then by half (morning before afternoon).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HalfDayDate {
    /// Calendar day.
    pub date: NaiveDate,
    /// Half of the day.
    pub half: DayHalf,
}

impl HalfDayDate {
    /// Creates a half-day date.
    pub fn new(date: NaiveDate, half: DayHalf) -> Self {
        Self { date, half }
    }

    /// The calendar day, discarding the half.
    #[inline]
    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

/// A duration measured in half-day units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HalfDayDuration(i32);

impl HalfDayDuration {
    /// Creates a duration of `half_days` half-day units.
    pub fn new(half_days: i32) -> Self {
        Self(half_days)
    }

    /// The raw half-day count.
    #[inline]
    pub fn half_days(&self) -> i32 {
        self.0
    }

    /// Converts this duration, taken as an offset from `start`, into a
    /// calendar position: the date advances one day per two half-days, and
    /// an odd offset lands in the afternoon slot.
    pub fn add_to(&self, start: NaiveDate) -> HalfDayDate {
        let half = if self.0 % 2 == 0 {
            DayHalf::Morning
        } else {
            DayHalf::Afternoon
        };
        HalfDayDate {
            date: start + Duration::days((self.0 / 2) as i64),
            half,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_offset_to_date() {
        let start = date(2024, 1, 1);

        let d0 = HalfDayDuration::new(0).add_to(start);
        assert_eq!(d0.date(), start);
        assert_eq!(d0.half, DayHalf::Morning);

        let d1 = HalfDayDuration::new(1).add_to(start);
        assert_eq!(d1.date(), start);
        assert_eq!(d1.half, DayHalf::Afternoon);

        let d4 = HalfDayDuration::new(4).add_to(start);
        assert_eq!(d4.date(), date(2024, 1, 3));
        assert_eq!(d4.half, DayHalf::Morning);
    }

    #[test]
    fn test_half_day_ordering() {
        let am = HalfDayDate::new(date(2024, 1, 1), DayHalf::Morning);
        let pm = HalfDayDate::new(date(2024, 1, 1), DayHalf::Afternoon);
        let next = HalfDayDate::new(date(2024, 1, 2), DayHalf::Morning);

        assert!(am < pm);
        assert!(pm < next);
    }
}
