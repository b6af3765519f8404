//! Completion of a single leaf goal.
//!
//! A goal is complete for a team once the team's accumulated progress reaches the
//! goal's target:
//!
//! ```text
//! complete   = current ≥ target
//! percentage = clamp(100 × current / target, 0, 100)    (target > 0)
//! ```
//!
//! A non-positive (or non-finite) target is a configuration anomaly. Such goals are
//! always incomplete at 0%. Non-finite progress counts as no progress.

use serde::Serialize;

/// Completion state of one goal for one team.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GoalCompletion {
    pub current_value: f64,
    pub target_value: f64,
    pub complete: bool,
    /// Progress toward the target in `[0, 100]`.
    pub percentage: f64,
}

/// Evaluates a goal given its target and the team's current progress.
///
/// # Example
///
/// ```
/// use bingo_evaluator::goal_evaluator::evaluate_goal;
///
/// let done = evaluate_goal(500.0, 650.0);
/// assert!(done.complete);
/// assert_eq!(done.percentage, 100.0);
///
/// let halfway = evaluate_goal(200.0, 100.0);
/// assert!(!halfway.complete);
/// assert_eq!(halfway.percentage, 50.0);
///
/// let broken = evaluate_goal(0.0, 10.0);
/// assert!(!broken.complete);
/// assert_eq!(broken.percentage, 0.0);
/// ```
#[must_use]
pub fn evaluate_goal(target_value: f64, current_value: f64) -> GoalCompletion {
    if !(target_value.is_finite() && target_value > 0.0) {
        tracing::warn!(target_value, "goal has a non-positive target, treating as incomplete");
        return GoalCompletion {
            current_value,
            target_value,
            complete: false,
            percentage: 0.0,
        };
    }
    if !current_value.is_finite() {
        tracing::warn!(current_value, "goal progress is not a finite number, treating as none");
        return GoalCompletion {
            current_value,
            target_value,
            complete: false,
            percentage: 0.0,
        };
    }
    GoalCompletion {
        current_value,
        target_value,
        complete: current_value >= target_value,
        percentage: (100.0 * current_value / target_value).clamp(0.0, 100.0),
    }
}
