//! Calendar-aware scheduling algorithms.
//!
//! Three stages run in order during project construction:
//!
//! 1. **`advance`**: maps half-day costs to calendar distances for one
//!    owner, skipping weekends and vacations.
//! 2. **`assign`**: lays out every owner's leaf tasks back to back on their
//!    personal timeline using the advancer.
//! 3. **`propagate`**: derives group spans and used costs bottom-up from the
//!    scheduled leaves.

mod advance;
mod assign;
mod propagate;

pub use advance::{Advance, CostAdvancer};
pub use assign::schedule_leaves;
pub use propagate::propagate;
