//! Progress stepper projection.
//!
//! A pure function of `(current_step, completed_steps)`; the stepper
//! widget in the CLI layer renders whatever this reports.

use std::collections::BTreeSet;

use super::state::StepId;

/// Visual status of one step marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Completed,
    Current,
    Upcoming,
}

/// Status of `step` given the wizard position. A completed step stays
/// marked completed even while the user has navigated back onto it.
pub fn step_status(step: StepId, current: StepId, completed: &BTreeSet<StepId>) -> StepStatus {
    if completed.contains(&step) {
        StepStatus::Completed
    } else if step == current {
        StepStatus::Current
    } else {
        StepStatus::Upcoming
    }
}

/// Whether the connector drawn after `step` renders filled.
pub fn connector_filled(step: StepId, completed: &BTreeSet<StepId>) -> bool {
    completed.contains(&step)
}
