//! Project façade: construction pipeline, derived queries, filtering.
//!
//! A [`Project`] is an immutable snapshot: construction validates the input,
//! materializes the task tree, schedules every leaf, derives group spans and
//! computes statistics, in that order. Filtering never mutates; it selects
//! leaves and rebuilds a fresh project through the same pipeline, so every
//! instance is self-consistent and shares no derived state with its source.

use chrono::NaiveDate;

use crate::error::PlanError;
use crate::hierarchy::build_tree;
use crate::models::{OwnerStat, ProjectStat, Task, VacationCalendar};
use crate::scheduler::{propagate, schedule_leaves};
use crate::validation::validate_input;

/// A fully scheduled project tree with derived statistics.
#[derive(Debug, Clone)]
pub struct Project {
    name: String,
    start_date: NaiveDate,
    today: NaiveDate,
    tasks: Vec<Task>,
    vacations: VacationCalendar,
    stat: ProjectStat,
}

impl Project {
    /// Builds a project from a flat, document-ordered leaf list.
    ///
    /// `today` is the reference date used to cap `used_cost`; injecting it
    /// keeps construction deterministic.
    ///
    /// # Errors
    /// [`PlanError::InvalidInput`] when validation fails;
    /// [`PlanError::UnresolvedGroups`] when the derived tree is inconsistent.
    pub fn new(
        name: impl Into<String>,
        start_date: NaiveDate,
        leaves: Vec<Task>,
        vacations: VacationCalendar,
        today: NaiveDate,
    ) -> Result<Self, PlanError> {
        validate_input(&leaves, vacations.entries()).map_err(PlanError::InvalidInput)?;

        let name = name.into();
        let mut tasks = build_tree(&name, leaves);
        schedule_leaves(&mut tasks, start_date, &vacations, today);
        propagate(&mut tasks)?;
        let stat = ProjectStat::calculate(&tasks);

        Ok(Self {
            name,
            start_date,
            today,
            tasks,
            vacations,
            stat,
        })
    }

    /// Project name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// First calendar day of the project.
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Reference date used for `used_cost`.
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// All tasks: root first, then groups and leaves in discovery order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// The vacation ledger.
    pub fn vacations(&self) -> &VacationCalendar {
        &self.vacations
    }

    /// The statistics snapshot.
    pub fn stat(&self) -> &ProjectStat {
        &self.stat
    }

    /// The root group task. Always present: the hierarchy builder creates
    /// it before anything else.
    pub fn root(&self) -> &Task {
        &self.tasks[0]
    }

    /// Looks up a task by id.
    pub fn task(&self, id: usize) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// All leaf tasks in document order.
    pub fn leaves(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|t| t.is_leaf())
    }

    /// Distinct leaf owners in first-appearance order, blanks excluded.
    pub fn owners(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for task in self.leaves() {
            let owner = task.owner().unwrap_or_default();
            if !owner.is_empty() && !seen.iter().any(|s| s == owner) {
                seen.push(owner.to_string());
            }
        }
        seen
    }

    /// Total planned cost over all leaves (half-days).
    pub fn total_cost(&self) -> i32 {
        self.stat.total().total_cost
    }

    /// Total finished cost over all leaves (half-days).
    pub fn finished_cost(&self) -> f64 {
        self.stat.total().finished_cost
    }

    /// Overall completion percentage; 0 for an empty project.
    pub fn progress(&self) -> f64 {
        self.stat.total().progress()
    }

    /// The statistics tally for one owner.
    pub fn owner_stat(&self, owner: &str) -> Option<&OwnerStat> {
        self.stat.owner_stat(owner)
    }

    /// The overall statistics tally.
    pub fn total_stat(&self) -> &OwnerStat {
        self.stat.total()
    }

    /// Last calendar day any leaf ends on; `None` for an empty project.
    pub fn end_date(&self) -> Option<NaiveDate> {
        self.leaves()
            .filter_map(|t| t.end_date(self.start_date))
            .max()
            .map(|d| d.date())
    }

    /// Whether `date` is a non-working day for `owner`.
    pub fn skips(&self, owner: &str, date: NaiveDate) -> bool {
        self.vacations.skips(owner, date)
    }

    /// A new project without the completed leaves.
    pub fn hide_completed(&self) -> Result<Project, PlanError> {
        self.rebuild_with(|t| !t.is_completed())
    }

    /// A new project with only the completed leaves.
    pub fn only_completed(&self) -> Result<Project, PlanError> {
        self.rebuild_with(|t| t.is_completed())
    }

    /// A new project with only one owner's leaves.
    pub fn for_owner(&self, owner: &str) -> Result<Project, PlanError> {
        self.rebuild_with(|t| t.owner() == Some(owner))
    }

    /// A new project with leaves whose name contains `keyword`
    /// (case-insensitive); `exclude` inverts the match.
    pub fn filter_keyword(&self, keyword: &str, exclude: bool) -> Result<Project, PlanError> {
        self.filter_keywords(&[keyword], exclude)
    }

    /// A new project with leaves whose name contains any of `keywords`
    /// (case-insensitive); `exclude` inverts the match. An empty keyword
    /// list matches every leaf.
    pub fn filter_keywords(&self, keywords: &[&str], exclude: bool) -> Result<Project, PlanError> {
        let needles: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();
        self.rebuild_with(move |t| {
            let name = t.name.to_lowercase();
            let hit = needles.is_empty() || needles.iter().any(|k| name.contains(k));
            hit != exclude
        })
    }

    /// Rebuilds a fresh project from the leaves matching `keep`, re-running
    /// the whole construction pipeline.
    fn rebuild_with(&self, keep: impl Fn(&Task) -> bool) -> Result<Project, PlanError> {
        let leaves: Vec<Task> = self
            .leaves()
            .filter(|t| keep(t))
            .map(Task::detached)
            .collect();
        Project::new(
            self.name.clone(),
            self.start_date,
            leaves,
            self.vacations.clone(),
            self.today,
        )
    }
}
