//! Input validation for project construction.
//!
//! Checks structural integrity of the flat leaf list and the vacation
//! ledger before any scheduling happens. Detects:
//! - Negative costs
//! - Progress values above 100
//! - Vacations whose range ends before it starts
//! - Group tasks supplied where leaves are expected

use crate::models::{Task, TaskKind, Vacation};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A leaf task has a negative cost.
    NegativeCost,
    /// A leaf task reports progress above 100.
    ProgressOutOfRange,
    /// A vacation range ends before it starts.
    InvalidVacationRange,
    /// A group task was supplied in the flat leaf list.
    GroupInput,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the flat leaf list and vacation ledger.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(tasks: &[Task], vacations: &[Vacation]) -> ValidationResult {
    let mut errors = Vec::new();

    for task in tasks {
        match &task.kind {
            TaskKind::Leaf(leaf) => {
                if leaf.cost < 0 {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::NegativeCost,
                        format!("Task '{}' has negative cost {}", task.name, leaf.cost),
                    ));
                }
                if leaf.progress > 100 {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::ProgressOutOfRange,
                        format!(
                            "Task '{}' reports progress {} (maximum is 100)",
                            task.name, leaf.progress
                        ),
                    ));
                }
            }
            TaskKind::Group(_) => {
                errors.push(ValidationError::new(
                    ValidationErrorKind::GroupInput,
                    format!(
                        "Task '{}' is a group; the input list must contain only leaves",
                        task.name
                    ),
                ));
            }
        }
    }

    for vacation in vacations {
        if vacation.end < vacation.start {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidVacationRange,
                format!(
                    "Vacation for '{}' ends {} before it starts {}",
                    vacation.owner, vacation.end, vacation.start
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
