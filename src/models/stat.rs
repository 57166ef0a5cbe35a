//! Project statistics snapshot.
//!
//! Folds all leaf tasks into per-owner and overall cost tallies. Derived
//! once during project construction; never updated in place.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Task;

/// Cost tally for one owner (or for the whole project).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnerStat {
    /// Owner name; the overall tally uses [`ProjectStat::TOTAL`].
    pub owner: String,
    /// Sum of leaf costs (half-days).
    pub total_cost: i32,
    /// Sum of `cost × progress / 100` over the leaves (half-days).
    pub finished_cost: f64,
}

impl OwnerStat {
    /// Creates an empty tally for `owner`.
    pub fn new(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            total_cost: 0,
            finished_cost: 0.0,
        }
    }

    /// Adds one leaf's costs.
    pub fn add(&mut self, cost: i32, finished: f64) {
        self.total_cost += cost;
        self.finished_cost += finished;
    }

    /// Completion percentage, 0-100. An empty tally reports 0 rather than
    /// dividing by zero.
    pub fn progress(&self) -> f64 {
        if self.total_cost == 0 {
            0.0
        } else {
            self.finished_cost * 100.0 / f64::from(self.total_cost)
        }
    }
}

/// Per-owner and overall statistics for a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectStat {
    by_owner: BTreeMap<String, OwnerStat>,
    total: OwnerStat,
}

impl ProjectStat {
    /// Owner key of the overall tally.
    pub const TOTAL: &'static str = "total";

    /// Folds all leaf tasks into per-owner and overall tallies.
    ///
    /// Blank owners land in their own (anonymous) bucket; they count toward
    /// the overall tally like anyone else.
    pub fn calculate(tasks: &[Task]) -> Self {
        let mut by_owner: BTreeMap<String, OwnerStat> = BTreeMap::new();
        let mut total = OwnerStat::new(Self::TOTAL);

        for task in tasks.iter().filter(|t| t.is_leaf()) {
            let owner = task.owner().unwrap_or_default();
            let cost = task.cost();
            let finished = task.finished_cost();

            by_owner
                .entry(owner.to_string())
                .or_insert_with(|| OwnerStat::new(owner))
                .add(cost, finished);
            total.add(cost, finished);
        }

        Self { by_owner, total }
    }

    /// The tally for one owner.
    pub fn owner_stat(&self, owner: &str) -> Option<&OwnerStat> {
        self.by_owner.get(owner)
    }

    /// The overall tally.
    pub fn total(&self) -> &OwnerStat {
        &self.total
    }

    /// All per-owner tallies, keyed by owner name.
    pub fn by_owner(&self) -> &BTreeMap<String, OwnerStat> {
        &self.by_owner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_per_owner_and_total() {
        let tasks = vec![
            Task::leaf("a", "alice", 4).with_progress(50),
            Task::leaf("b", "alice", 2).with_progress(100),
            Task::leaf("c", "bob", 6),
        ];
        let stat = ProjectStat::calculate(&tasks);

        let alice = stat.owner_stat("alice").unwrap();
        assert_eq!(alice.total_cost, 6);
        assert!((alice.finished_cost - 4.0).abs() < 1e-10);

        let bob = stat.owner_stat("bob").unwrap();
        assert_eq!(bob.total_cost, 6);
        assert!((bob.finished_cost - 0.0).abs() < 1e-10);

        assert_eq!(stat.total().total_cost, 12);
        assert!((stat.total().progress() - 100.0 * 4.0 / 12.0).abs() < 1e-10);
    }

    #[test]
    fn test_stat_skips_groups() {
        let tasks = vec![
            Task::group("root", crate::models::SectionPath::root()),
            Task::leaf("a", "alice", 2),
        ];
        let stat = ProjectStat::calculate(&tasks);
        assert_eq!(stat.total().total_cost, 2);
        assert!(stat.owner_stat("root").is_none());
    }

    #[test]
    fn test_empty_stat_progress_is_zero() {
        let stat = ProjectStat::calculate(&[]);
        assert_eq!(stat.total().total_cost, 0);
        assert!((stat.total().progress() - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_blank_owner_counts_toward_total() {
        let tasks = vec![Task::leaf("orphan", "", 4).with_progress(25)];
        let stat = ProjectStat::calculate(&tasks);
        assert_eq!(stat.total().total_cost, 4);
        assert_eq!(stat.owner_stat("").unwrap().total_cost, 4);
    }
}
