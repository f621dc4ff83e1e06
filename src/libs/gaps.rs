//! Gap filling for a parsed timesheet.
//!
//! Tasks given without a duration share whatever is left of the workday.
//! The split is as even as integer minutes allow; the first gap in input
//! order takes the remainder.
//!
//! | Explicit total | Gaps | Result |
//! |----------------|------|--------|
//! | > 480          | any  | overtime |
//! | < 480          | none | undertime |
//! | = 480          | none | unchanged |
//! | ≤ 480          | some | gaps share the rest |

use super::task::{Task, TaskList};
use crate::msg_debug;
use thiserror::Error;

/// Length of a standard workday in minutes.
pub const DAY_BUDGET_MINUTES: u32 = 8 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocationErrorKind {
    Overtime,
    Undertime,
}

/// The timesheet cannot be made to sum to the day budget.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocationError {
    /// Explicit durations alone exceed the day; `left` is negative.
    #[error("overtime, {left} minutes left")]
    Overtime { left: i64 },
    /// Nothing absorbs the remaining time; `left` is positive.
    #[error("undertime, {left} minutes left")]
    Undertime { left: i64 },
}

impl AllocationError {
    pub fn kind(&self) -> AllocationErrorKind {
        match self {
            AllocationError::Overtime { .. } => AllocationErrorKind::Overtime,
            AllocationError::Undertime { .. } => AllocationErrorKind::Undertime,
        }
    }

    /// Signed difference between the day budget and the assigned time.
    pub fn remaining_minutes(&self) -> i64 {
        match self {
            AllocationError::Overtime { left } | AllocationError::Undertime { left } => *left,
        }
    }
}

/// Assigns minutes to every gap so the day adds up to [`DAY_BUDGET_MINUTES`].
///
/// Takes the task list by value and hands it back with every `minutes`
/// populated. Explicit durations are never touched.
pub fn fill_gaps(mut tasks: Vec<Task>) -> Result<Vec<Task>, AllocationError> {
    let budget = i64::from(DAY_BUDGET_MINUTES);
    let left = budget - assigned_minutes(&tasks);
    let gaps: Vec<usize> = tasks.iter().enumerate().filter(|(_, task)| task.is_gap()).map(|(idx, _)| idx).collect();

    if left < 0 {
        return Err(AllocationError::Overtime { left });
    }

    if gaps.is_empty() {
        return match left {
            0 => Ok(tasks),
            _ => Err(AllocationError::Undertime { left }),
        };
    }

    // left is within 0..=480 here
    let left = left as u32;
    let count = gaps.len() as u32;
    let part = left / count;
    let remainder = left % count;
    msg_debug!(format!("Splitting {} minutes between {} gaps: {} each, +{} for the first", left, count, part, remainder));

    for (order, &idx) in gaps.iter().enumerate() {
        let share = if order == 0 { part + remainder } else { part };
        tasks[idx].minutes = Some(share);
    }

    let total = assigned_minutes(&tasks);
    if total < budget {
        return Err(AllocationError::Undertime { left: budget - total });
    }

    Ok(tasks)
}

fn assigned_minutes(tasks: &[Task]) -> i64 {
    i64::try_from(tasks.total_minutes()).unwrap_or(i64::MAX)
}
