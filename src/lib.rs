//! Calendar-aware project scheduling.
//!
//! Turns a flat, ordered list of tasks — each tagged with an owner, a cost
//! in half-day units and a hierarchical section path — into a fully
//! scheduled project tree: every task gets concrete calendar positions,
//! owners' personal calendars are respected (weekends and per-owner
//! vacations consume no capacity), and costs and progress roll up from leaf
//! tasks into nested group tasks and per-owner statistics.
//!
//! # Modules
//!
//! - **`models`**: Domain types — half-day calendar units, `Vacation`,
//!   the leaf/group `Task` tree, `ProjectStat`
//! - **`scheduler`**: Calendar advancement, per-owner leaf scheduling,
//!   bottom-up group span propagation
//! - **`hierarchy`**: Tree construction from flat path-tagged leaves
//! - **`project`**: The `Project` façade — pipeline, queries, filtering
//! - **`validation`**: Input integrity checks
//!
//! # Example
//!
//! ```
//! use calplan::models::{SectionPath, Task, VacationCalendar};
//! use calplan::project::Project;
//! use chrono::NaiveDate;
//!
//! let leaves = vec![
//!     Task::leaf("write parser", "alice", 4)
//!         .with_progress(50)
//!         .with_path(SectionPath::new(["Backend"])),
//!     Task::leaf("style pages", "bob", 2)
//!         .with_path(SectionPath::new(["Frontend"])),
//! ];
//! let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let today = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
//!
//! let project = Project::new("demo", start, leaves, VacationCalendar::new(), today).unwrap();
//! assert_eq!(project.owners(), vec!["alice", "bob"]);
//! assert_eq!(project.total_cost(), 6);
//! assert!(project.root().span.is_some());
//! ```

pub mod error;
pub mod hierarchy;
pub mod models;
pub mod project;
pub mod scheduler;
pub mod validation;
