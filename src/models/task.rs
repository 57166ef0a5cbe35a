//! Task tree model.
//!
//! A project is a tree of tasks. Leaf tasks carry an owner, a half-day cost
//! and a reported progress; group tasks are synthetic section nodes whose
//! span and costs are derived from their descendants. Leaves are located in
//! the source hierarchy by a [`SectionPath`], the ordered list of section
//! titles above them; the hierarchy builder turns shared path prefixes into
//! shared group tasks.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{HalfDayDate, HalfDayDuration};

/// Ordered section-title segments locating a task in the source hierarchy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SectionPath(Vec<String>);

impl SectionPath {
    /// Creates a path from segments.
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// The empty path (top level of the document).
    pub fn root() -> Self {
        Self::default()
    }

    /// Number of segments.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the path has no segments.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The segments in order.
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// The last segment, if any.
    pub fn last(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    /// The prefix of the first `len` segments.
    pub fn prefix(&self, len: usize) -> SectionPath {
        SectionPath(self.0[..len].to_vec())
    }
}

impl<S: Into<String>> FromIterator<S> for SectionPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// A resolved calendar span in half-day offsets from the project start.
///
/// Both bounds are inclusive. A task without a span has not been scheduled
/// yet; there is no in-band sentinel value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// First half-day slot occupied by the task.
    pub start_offset: i32,
    /// Last half-day slot occupied by the task.
    pub end_offset: i32,
}

/// Leaf payload: a concrete unit of work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeafTask {
    /// Who does the work. Blank means an anonymous owner bucket; such tasks
    /// are still scheduled but excluded from owner enumeration.
    pub owner: String,
    /// Planned cost in half-day units.
    pub cost: i32,
    /// Reported completion, 0-100.
    pub progress: u8,
}

/// Per-owner cost accumulation inside a group task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OwnerCost {
    /// Sum of descendant leaf costs for this owner (half-days).
    pub total: i32,
    /// Sum of descendant finished costs for this owner (half-days).
    pub finished: f64,
}

/// Group payload: a synthetic section node aggregating its descendants.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupTask {
    /// Cost totals per descendant-leaf owner.
    pub owner_costs: BTreeMap<String, OwnerCost>,
}

impl GroupTask {
    /// Accumulates one descendant leaf's costs into this group.
    pub fn add_owner_cost(&mut self, owner: &str, cost: i32, finished: f64) {
        let entry = self.owner_costs.entry(owner.to_string()).or_default();
        entry.total += cost;
        entry.finished += finished;
    }

    /// Total cost across all owners (half-days).
    pub fn total_cost(&self) -> i32 {
        self.owner_costs.values().map(|c| c.total).sum()
    }

    /// Finished cost across all owners (half-days).
    pub fn finished_cost(&self) -> f64 {
        self.owner_costs.values().map(|c| c.finished).sum()
    }
}

/// Leaf-or-group payload of a task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TaskKind {
    /// An unsplittable unit of work.
    Leaf(LeafTask),
    /// A section node with derived costs.
    Group(GroupTask),
}

/// A node of the project tree.
///
/// Ids and parent links are assigned by the hierarchy builder (root gets id 0
/// and no parent); `span` and `used_cost` are filled in by the leaf scheduler
/// and the group propagator during project construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique id within the project tree, assigned at build time.
    pub id: usize,
    /// Parent task id; `None` only for the root.
    pub parent_id: Option<usize>,
    /// Display name (leaf text or section title).
    pub name: String,
    /// Location in the source hierarchy.
    pub path: SectionPath,
    /// Scheduled half-day span; `None` until resolved.
    pub span: Option<Span>,
    /// Half-days of work actually behind the reference date.
    pub used_cost: i32,
    /// Leaf or group payload.
    pub kind: TaskKind,
}

impl Task {
    /// Creates an unscheduled leaf task at the top level.
    pub fn leaf(name: impl Into<String>, owner: impl Into<String>, cost: i32) -> Self {
        Self {
            id: 0,
            parent_id: None,
            name: name.into(),
            path: SectionPath::root(),
            span: None,
            used_cost: 0,
            kind: TaskKind::Leaf(LeafTask {
                owner: owner.into(),
                cost,
                progress: 0,
            }),
        }
    }

    /// Creates an unscheduled group task for a section.
    pub fn group(name: impl Into<String>, path: SectionPath) -> Self {
        Self {
            id: 0,
            parent_id: None,
            name: name.into(),
            path,
            span: None,
            used_cost: 0,
            kind: TaskKind::Group(GroupTask::default()),
        }
    }

    /// Sets the reported progress (leaves only; no-op on groups).
    pub fn with_progress(mut self, progress: u8) -> Self {
        if let TaskKind::Leaf(leaf) = &mut self.kind {
            leaf.progress = progress;
        }
        self
    }

    /// Sets the section path.
    pub fn with_path(mut self, path: SectionPath) -> Self {
        self.path = path;
        self
    }

    /// Whether this is a group task.
    #[inline]
    pub fn is_group(&self) -> bool {
        matches!(self.kind, TaskKind::Group(_))
    }

    /// Whether this is a leaf task.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, TaskKind::Leaf(_))
    }

    /// The owner, for leaves.
    pub fn owner(&self) -> Option<&str> {
        match &self.kind {
            TaskKind::Leaf(leaf) => Some(leaf.owner.as_str()),
            TaskKind::Group(_) => None,
        }
    }

    /// Planned cost in half-days. Groups report the sum over their
    /// descendant leaves.
    pub fn cost(&self) -> i32 {
        match &self.kind {
            TaskKind::Leaf(leaf) => leaf.cost,
            TaskKind::Group(group) => group.total_cost(),
        }
    }

    /// Finished cost in half-days: cost scaled by reported progress for
    /// leaves, the descendant sum for groups.
    pub fn finished_cost(&self) -> f64 {
        match &self.kind {
            TaskKind::Leaf(leaf) => f64::from(leaf.cost) * f64::from(leaf.progress) / 100.0,
            TaskKind::Group(group) => group.finished_cost(),
        }
    }

    /// Completion percentage, 0-100. Zero-cost tasks report 0.
    pub fn progress(&self) -> f64 {
        match &self.kind {
            TaskKind::Leaf(leaf) => f64::from(leaf.progress),
            TaskKind::Group(_) => {
                let total = self.cost();
                if total == 0 {
                    0.0
                } else {
                    self.finished_cost() * 100.0 / f64::from(total)
                }
            }
        }
    }

    /// The progress the task should have reached by the reference date if
    /// work proceeds at plan rate: `used_cost × 100 / cost`.
    pub fn expected_progress(&self) -> f64 {
        let cost = self.cost();
        if cost == 0 {
            0.0
        } else {
            f64::from(self.used_cost) * 100.0 / f64::from(cost)
        }
    }

    /// Whether any planned work lies behind the reference date.
    pub fn is_started(&self) -> bool {
        self.used_cost > 0
    }

    /// Whether the task is fully done.
    pub fn is_completed(&self) -> bool {
        self.progress() >= 100.0
    }

    /// Whether reported progress lags the plan.
    pub fn is_delayed(&self) -> bool {
        self.progress() < self.expected_progress()
    }

    /// Scheduled start as a calendar position, once resolved.
    pub fn start_date(&self, project_start: NaiveDate) -> Option<HalfDayDate> {
        self.span
            .map(|s| HalfDayDuration::new(s.start_offset).add_to(project_start))
    }

    /// Scheduled end as a calendar position, once resolved.
    pub fn end_date(&self, project_start: NaiveDate) -> Option<HalfDayDate> {
        self.span
            .map(|s| HalfDayDuration::new(s.end_offset).add_to(project_start))
    }

    /// A copy with ids, links and scheduling state cleared, suitable as
    /// fresh input for a rebuilt project.
    pub fn detached(&self) -> Task {
        Task {
            id: 0,
            parent_id: None,
            name: self.name.clone(),
            path: self.path.clone(),
            span: None,
            used_cost: 0,
            kind: self.kind.clone(),
        }
    }
}
