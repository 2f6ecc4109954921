//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

mod change_tracker;
mod health;
mod row_registry;

pub use change_tracker::{ChangeTracker, Suspension, TrackerState};
pub use health::{
    check_health, is_valid_date, is_valid_technique_id, HealthIssue, HealthReport, Severity,
};
pub use row_registry::{
    AddOutcome, DeleteOutcome, RowRegistry, SelectOutcome, UndoOutcome,
};
