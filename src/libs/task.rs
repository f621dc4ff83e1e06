//! Task entries of a workday timesheet.
//!
//! A task is created by the token parser from a task id token and may carry
//! an explicit duration. Tasks without a duration are gaps that the
//! allocator fills later.


/// Project prefix applied to bare numeric task ids.
pub const DEFAULT_PROJECT: &str = "LP";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Normalized task id, e.g. `LP-622`.
    pub id: String,
    /// Minutes spent on the task; `None` marks a gap.
    pub minutes: Option<u32>,
}

impl Task {
    pub fn new(id: &str) -> Self {
        Task {
            id: id.to_string(),
            minutes: None,
        }
    }

    pub fn with_minutes(id: &str, minutes: u32) -> Self {
        Task {
            id: id.to_string(),
            minutes: Some(minutes),
        }
    }

    /// Returns `true` when no duration has been assigned yet.
    pub fn is_gap(&self) -> bool {
        self.minutes.is_none()
    }
}

/// Helpers over a whole timesheet.
pub trait TaskList {
    /// Sum of all assigned minutes; gaps count as zero.
    fn total_minutes(&self) -> u64;
}

impl TaskList for [Task] {
    fn total_minutes(&self) -> u64 {
        self.iter().map(|task| u64::from(task.minutes.unwrap_or(0))).sum()
    }
}
