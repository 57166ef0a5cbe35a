//! Leaf task scheduling.
//!
//! Assigns every leaf task a half-day span on its owner's personal timeline.
//! Owners are independent: each has a running cursor starting at offset 0,
//! and that owner's leaves are laid out back to back in document order. The
//! offsets share one origin (the project start), so spans of different
//! owners may legitimately overlap.

use chrono::NaiveDate;
use std::collections::HashMap;

use crate::models::{HalfDayDuration, Span, Task, TaskKind, VacationCalendar};
use crate::scheduler::CostAdvancer;

/// Schedules all leaf tasks in place.
///
/// For each leaf, in document order: the span starts at the owner's cursor,
/// spans the elapsed distance reported by the calendar advancer, and pushes
/// the cursor past its end. `used_cost` is the work actually behind `today`:
/// the owner's available half-days between the task start and the earlier of
/// `today` and the task end. `today` is injected so results are
/// deterministic under test.
pub fn schedule_leaves(
    tasks: &mut [Task],
    project_start: NaiveDate,
    vacations: &VacationCalendar,
    today: NaiveDate,
) {
    let advancer = CostAdvancer::new(vacations);
    let mut cursors: HashMap<String, i32> = HashMap::new();

    for task in tasks.iter_mut() {
        let (owner, cost) = match &task.kind {
            TaskKind::Leaf(leaf) => (leaf.owner.clone(), leaf.cost),
            TaskKind::Group(_) => continue,
        };

        let start_offset = *cursors.get(&owner).unwrap_or(&0);
        let from = HalfDayDuration::new(start_offset)
            .add_to(project_start)
            .date();

        if cost == 0 {
            // Nothing to lay out: a degenerate empty span at the cursor.
            task.span = Some(Span {
                start_offset,
                end_offset: start_offset - 1,
            });
            task.used_cost = 0;
            continue;
        }

        let adv = advancer.advance(&owner, from, cost, None);
        let end_offset = start_offset + adv.elapsed_half_days - 1;
        task.span = Some(Span {
            start_offset,
            end_offset,
        });

        let planned_end = HalfDayDuration::new(end_offset)
            .add_to(project_start)
            .date();
        let horizon = planned_end.min(today);
        task.used_cost = advancer.actual_cost(&owner, from, horizon);

        cursors.insert(owner, end_offset + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SectionPath, Vacation};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn span(task: &Task) -> Span {
        task.span.expect("task should be scheduled")
    }

    #[test]
    fn test_same_owner_tiles_timeline() {
        let mut tasks = vec![
            Task::leaf("a", "alice", 2),
            Task::leaf("b", "alice", 3),
            Task::leaf("c", "alice", 1),
        ];
        let cal = VacationCalendar::new();
        schedule_leaves(&mut tasks, date(2024, 1, 1), &cal, date(2024, 1, 1));

        assert_eq!(span(&tasks[0]), Span { start_offset: 0, end_offset: 1 });
        assert_eq!(span(&tasks[1]), Span { start_offset: 2, end_offset: 4 });
        assert_eq!(span(&tasks[2]), Span { start_offset: 5, end_offset: 5 });

        // No gaps, no overlaps.
        for pair in tasks.windows(2) {
            assert_eq!(span(&pair[1]).start_offset, span(&pair[0]).end_offset + 1);
        }
    }

    #[test]
    fn test_owners_share_origin() {
        let mut tasks = vec![Task::leaf("a", "alice", 4), Task::leaf("b", "bob", 2)];
        let cal = VacationCalendar::new();
        schedule_leaves(&mut tasks, date(2024, 1, 1), &cal, date(2024, 1, 1));

        assert_eq!(span(&tasks[0]).start_offset, 0);
        assert_eq!(span(&tasks[1]).start_offset, 0);
    }

    #[test]
    fn test_weekend_widens_elapsed_span() {
        // Thursday start, 6 half-days: Thu, Fri, then Monday.
        let mut tasks = vec![Task::leaf("a", "alice", 6)];
        let cal = VacationCalendar::new();
        schedule_leaves(&mut tasks, date(2024, 1, 4), &cal, date(2024, 1, 4));

        // Thu+Fri = 4 half-days, weekend elapses 4 more, Monday finishes.
        assert_eq!(span(&tasks[0]), Span { start_offset: 0, end_offset: 9 });
    }

    #[test]
    fn test_vacation_shifts_later_tasks() {
        let cal = VacationCalendar::new()
            .with_vacation(Vacation::single_day("alice", date(2024, 1, 2)));
        let mut tasks = vec![Task::leaf("a", "alice", 4), Task::leaf("b", "alice", 2)];
        schedule_leaves(&mut tasks, date(2024, 1, 1), &cal, date(2024, 1, 1));

        // Monday worked, Tuesday skipped, Wednesday worked.
        assert_eq!(span(&tasks[0]), Span { start_offset: 0, end_offset: 5 });
        // Next task starts Thursday.
        assert_eq!(span(&tasks[1]).start_offset, 6);
    }

    #[test]
    fn test_used_cost_capped_at_today() {
        let cal = VacationCalendar::new();
        let mut tasks = vec![Task::leaf("a", "alice", 8).with_path(SectionPath::root())];

        // Two of the four planned days are behind the reference date.
        schedule_leaves(&mut tasks, date(2024, 1, 1), &cal, date(2024, 1, 2));
        assert_eq!(tasks[0].used_cost, 4);

        // Reference date before the project: nothing is behind us.
        let mut tasks = vec![Task::leaf("a", "alice", 8)];
        schedule_leaves(&mut tasks, date(2024, 1, 1), &cal, date(2023, 12, 29));
        assert_eq!(tasks[0].used_cost, 0);

        // Reference date past the end: the whole plan is behind us.
        let mut tasks = vec![Task::leaf("a", "alice", 8)];
        schedule_leaves(&mut tasks, date(2024, 1, 1), &cal, date(2024, 2, 1));
        assert_eq!(tasks[0].used_cost, 8);
    }

    #[test]
    fn test_zero_cost_leaf_keeps_cursor() {
        let cal = VacationCalendar::new();
        let mut tasks = vec![
            Task::leaf("a", "alice", 0),
            Task::leaf("b", "alice", 2),
        ];
        schedule_leaves(&mut tasks, date(2024, 1, 1), &cal, date(2024, 1, 1));

        assert_eq!(span(&tasks[0]), Span { start_offset: 0, end_offset: -1 });
        assert_eq!(tasks[0].used_cost, 0);
        assert_eq!(span(&tasks[1]), Span { start_offset: 0, end_offset: 1 });
    }

    #[test]
    fn test_groups_left_untouched() {
        let cal = VacationCalendar::new();
        let mut tasks = vec![
            Task::group("section", SectionPath::new(["section"])),
            Task::leaf("a", "alice", 2),
        ];
        schedule_leaves(&mut tasks, date(2024, 1, 1), &cal, date(2024, 1, 1));

        assert!(tasks[0].span.is_none());
        assert!(tasks[1].span.is_some());
    }
}
