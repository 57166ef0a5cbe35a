//! Bottom-up span derivation for group tasks.
//!
//! After leaf scheduling every leaf has a span; group spans are derived from
//! their children: minimum child start, maximum child end, summed used cost.
//!
//! # Algorithm
//!
//! Worklist keyed on a pending-children count. Each group starts with the
//! number of its unresolved children; groups whose count is zero resolve
//! immediately, and resolving a group decrements its parent's count,
//! enqueueing the parent once its last pending child is done. Every group is
//! visited exactly once, whatever the nesting depth, and a group that cannot
//! resolve is reported instead of being left silently unscheduled.

use std::collections::VecDeque;

use crate::error::PlanError;
use crate::models::{Span, Task};

/// Derives spans and used costs for all group tasks in place.
///
/// Expects the tree produced by the hierarchy builder, with leaves already
/// scheduled. The root of an empty project has no children and keeps an
/// empty span; any other unresolved group is an inconsistency and yields
/// [`PlanError::UnresolvedGroups`].
pub fn propagate(tasks: &mut [Task]) -> Result<(), PlanError> {
    let n = tasks.len();
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); n];
    for (idx, task) in tasks.iter().enumerate() {
        if let Some(parent) = task.parent_id {
            children[parent].push(idx);
        }
    }

    let mut pending: Vec<usize> = vec![0; n];
    let mut ready: VecDeque<usize> = VecDeque::new();
    for (idx, task) in tasks.iter().enumerate() {
        if !task.is_group() {
            continue;
        }
        pending[idx] = children[idx]
            .iter()
            .filter(|&&c| tasks[c].span.is_none())
            .count();
        // Already-resolved groups stay out of the queue: they were never
        // counted in their parent's pending total.
        if pending[idx] == 0 && !children[idx].is_empty() && tasks[idx].span.is_none() {
            ready.push_back(idx);
        }
    }

    while let Some(idx) = ready.pop_front() {
        let mut start = i32::MAX;
        let mut end = i32::MIN;
        let mut used = 0;
        for &child in &children[idx] {
            let Some(span) = tasks[child].span else { continue };
            start = start.min(span.start_offset);
            end = end.max(span.end_offset);
            used += tasks[child].used_cost;
        }
        tasks[idx].span = Some(Span {
            start_offset: start,
            end_offset: end,
        });
        tasks[idx].used_cost = used;

        if let Some(parent) = tasks[idx].parent_id {
            pending[parent] -= 1;
            if pending[parent] == 0 {
                ready.push_back(parent);
            }
        }
    }

    let unresolved: Vec<usize> = tasks
        .iter()
        .enumerate()
        .filter(|(idx, t)| t.is_group() && t.span.is_none() && !children[*idx].is_empty())
        .map(|(_, t)| t.id)
        .collect();
    if unresolved.is_empty() {
        Ok(())
    } else {
        Err(PlanError::UnresolvedGroups(unresolved))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SectionPath, TaskKind};

    fn leaf(id: usize, parent: usize, start: i32, end: i32, used: i32) -> Task {
        let mut t = Task::leaf(format!("leaf-{id}"), "alice", end - start + 1);
        t.id = id;
        t.parent_id = Some(parent);
        t.span = Some(Span {
            start_offset: start,
            end_offset: end,
        });
        t.used_cost = used;
        t
    }

    fn group(id: usize, parent: Option<usize>) -> Task {
        let mut t = Task::group(format!("group-{id}"), SectionPath::root());
        t.id = id;
        t.parent_id = parent;
        t
    }

    #[test]
    fn test_group_span_covers_children() {
        let mut tasks = vec![
            group(0, None),
            group(1, Some(0)),
            leaf(2, 1, 0, 3, 2),
            leaf(3, 1, 4, 7, 0),
        ];
        propagate(&mut tasks).unwrap();

        let g = tasks[1].span.unwrap();
        assert_eq!(g.start_offset, 0);
        assert_eq!(g.end_offset, 7);
        assert_eq!(tasks[1].used_cost, 2);

        let root = tasks[0].span.unwrap();
        assert_eq!(root.start_offset, 0);
        assert_eq!(root.end_offset, 7);
    }

    #[test]
    fn test_deep_nesting_resolves_in_one_pass() {
        // A 12-level chain of groups above a single leaf.
        let depth = 12;
        let mut tasks: Vec<Task> = (0..depth)
            .map(|i| group(i, if i == 0 { None } else { Some(i - 1) }))
            .collect();
        tasks.push(leaf(depth, depth - 1, 2, 5, 4));

        propagate(&mut tasks).unwrap();
        for task in &tasks {
            let span = task.span.unwrap();
            assert_eq!(span.start_offset, 2);
            assert_eq!(span.end_offset, 5);
            assert_eq!(task.used_cost, 4);
        }
    }

    #[test]
    fn test_interval_containment() {
        let mut tasks = vec![
            group(0, None),
            group(1, Some(0)),
            leaf(2, 1, 2, 5, 0),
            group(3, Some(0)),
            leaf(4, 3, 0, 9, 0),
            leaf(5, 1, 6, 7, 0),
        ];
        propagate(&mut tasks).unwrap();

        for task in &tasks {
            let span = task.span.unwrap();
            let parent_span = match task.parent_id {
                Some(p) => tasks.iter().find(|t| t.id == p).unwrap().span.unwrap(),
                None => continue,
            };
            assert!(parent_span.start_offset <= span.start_offset);
            assert!(parent_span.end_offset >= span.end_offset);
        }
    }

    #[test]
    fn test_childless_root_stays_empty() {
        let mut tasks = vec![group(0, None)];
        propagate(&mut tasks).unwrap();
        assert!(tasks[0].span.is_none());
    }

    #[test]
    fn test_unscheduled_leaf_is_reported() {
        let mut unscheduled = Task::leaf("pending", "alice", 2);
        unscheduled.id = 2;
        unscheduled.parent_id = Some(1);

        let mut tasks = vec![group(0, None), group(1, Some(0)), unscheduled];
        let err = propagate(&mut tasks).unwrap_err();
        match err {
            PlanError::UnresolvedGroups(ids) => assert_eq!(ids, vec![0, 1]),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_groups_never_regress() {
        let mut tasks = vec![group(0, None), leaf(1, 0, 0, 1, 2)];
        propagate(&mut tasks).unwrap();
        let first = tasks[0].span.unwrap();

        propagate(&mut tasks).unwrap();
        assert_eq!(tasks[0].span.unwrap(), first);
        // used_cost is also untouched on the second run
        assert_eq!(tasks[0].used_cost, 2);

        if let TaskKind::Group(_) = tasks[0].kind {
        } else {
            panic!("root must stay a group");
        }
    }

    #[test]
    fn test_rerun_on_resolved_nested_tree() {
        // A resolved intermediate group must not re-resolve and touch its
        // parent's bookkeeping on a second run.
        let mut tasks = vec![group(0, None), group(1, Some(0)), leaf(2, 1, 0, 3, 2)];
        propagate(&mut tasks).unwrap();
        let spans: Vec<Span> = tasks.iter().map(|t| t.span.unwrap()).collect();

        propagate(&mut tasks).unwrap();
        for (task, span) in tasks.iter().zip(&spans) {
            assert_eq!(task.span.unwrap(), *span);
        }
        assert_eq!(tasks[0].used_cost, 2);
        assert_eq!(tasks[1].used_cost, 2);
    }
}
