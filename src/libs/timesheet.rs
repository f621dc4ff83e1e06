//! The timesheet pipeline from raw tokens to written worklogs.
//!
//! ```text
//! tokens ──▶ parse ──▶ fill gaps ──▶ look up names ──▶ write worklogs
//! ```
//!
//! Each stage fails as a whole before the next one starts: nothing is
//! looked up for a timesheet that doesn't add up, and nothing is written
//! until every task name has been found.

use super::gaps::{fill_gaps, AllocationError};
use super::parser::{parse_tasks_with_project, ParseError};
use super::task::Task;
use crate::api::{IssueTracker, TrackerError};
use crate::libs::{formatter::format_worklog_time, messages::Message};
use crate::msg_debug;
use chrono::NaiveDateTime;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TimesheetError {
    #[error("{} token(s) couldn't be parsed", .0.len())]
    Parse(Vec<ParseError>),
    #[error("{0}")]
    Allocation(AllocationError),
    #[error("task {id}: {source}")]
    Tracker {
        id: String,
        #[source]
        source: TrackerError,
    },
}

/// A parsed and allocated workday.
#[derive(Debug, Clone, PartialEq)]
pub struct Timesheet {
    pub tasks: Vec<Task>,
    /// Set when sloppy mode accepted a day that doesn't add up.
    pub imbalance: Option<AllocationError>,
}

/// Parses `tokens` and fills the gaps.
///
/// With `sloppy`, an allocation failure on a timesheet without gaps is kept
/// as [`Timesheet::imbalance`] and the explicit durations are used as given.
/// A timesheet with gaps still fails, its gaps have no meaningful share.
pub fn prepare<S: AsRef<str>>(tokens: &[S], project: &str, sloppy: bool) -> Result<Timesheet, TimesheetError> {
    let tasks = parse_tasks_with_project(tokens, project).map_err(TimesheetError::Parse)?;

    let fallback = match sloppy && !tasks.iter().any(Task::is_gap) {
        true => Some(tasks.clone()),
        false => None,
    };

    match (fill_gaps(tasks), fallback) {
        (Ok(tasks), _) => Ok(Timesheet { tasks, imbalance: None }),
        (Err(error), Some(tasks)) => Ok(Timesheet {
            tasks,
            imbalance: Some(error),
        }),
        (Err(error), None) => Err(TimesheetError::Allocation(error)),
    }
}

/// Fetches the display name of every task, stopping at the first failure.
pub fn lookup_names<T: IssueTracker>(tracker: &T, tasks: &[Task]) -> Result<HashMap<String, String>, TimesheetError> {
    let mut names = HashMap::new();

    for task in tasks {
        if names.contains_key(&task.id) {
            continue;
        }
        msg_debug!(Message::LookingUpTask(task.id.clone()));
        let name = tracker.task_name(&task.id).map_err(|source| TimesheetError::Tracker {
            id: task.id.clone(),
            source,
        })?;
        names.insert(task.id.clone(), name);
    }

    Ok(names)
}

/// Writes one worklog per task in order and returns how many were written.
///
/// Tasks with zero minutes are skipped. The first failed write stops the run.
pub fn write_worklogs<T: IssueTracker>(tracker: &T, tasks: &[Task], started: NaiveDateTime) -> Result<usize, TimesheetError> {
    let mut written = 0;

    for task in tasks {
        let minutes = task.minutes.unwrap_or(0);
        // jira rejects empty worklogs
        if minutes == 0 {
            continue;
        }
        msg_debug!(Message::WritingWorklog {
            id: task.id.clone(),
            time: format_worklog_time(minutes),
        });
        tracker.add_worklog(&task.id, minutes, started).map_err(|source| TimesheetError::Tracker {
            id: task.id.clone(),
            source,
        })?;
        written += 1;
    }

    Ok(written)
}
