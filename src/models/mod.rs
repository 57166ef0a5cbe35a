//! Project planning domain models.
//!
//! Provides the core data types for calendar-aware project scheduling:
//! half-day calendar units, per-owner vacation ledgers, the leaf/group task
//! tree, and the derived statistics snapshot.
//!
//! # Time Model
//!
//! Costs and offsets are counted in half-day units: one calendar day holds a
//! morning and an afternoon slot. An offset is the number of half-day slots
//! between the project start and a task boundary, counted over the calendar
//! (weekends and vacations included); the scheduler decides which of those
//! slots are actual work.

mod date;
mod stat;
mod task;
mod vacation;

pub use date::{DayHalf, HalfDayDate, HalfDayDuration};
pub use stat::{OwnerStat, ProjectStat};
pub use task::{GroupTask, LeafTask, OwnerCost, SectionPath, Span, Task, TaskKind};
pub use vacation::{Vacation, VacationCalendar};
