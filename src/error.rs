//! Error types for project construction.

use thiserror::Error;

use crate::validation::ValidationError;

/// Failures raised while building a project.
#[derive(Debug, Error)]
pub enum PlanError {
    /// The input task list or vacation ledger failed validation.
    #[error("invalid project input ({} problem(s) found)", .0.len())]
    InvalidInput(Vec<ValidationError>),

    /// Group tasks were left without a derived span after propagation.
    /// Carries the ids of the unresolved groups.
    #[error("{} group task(s) could not be derived from their children", .0.len())]
    UnresolvedGroups(Vec<usize>),
}
