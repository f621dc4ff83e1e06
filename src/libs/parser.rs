//! Token parser for the command line timesheet.
//!
//! Turns positional arguments like `622 3h30m LP-623` into an ordered list
//! of [`Task`] entries. A task id token opens a new task, a duration token
//! attaches minutes to the task opened last.
//!
//! ## Grammar
//!
//! - **Task id**: `[A-Z]+-` prefix (optional) followed by ASCII digits. Bare digits
//!   get the default project prefix, so `622` becomes `LP-622`.
//! - **Duration**: `<h>h<m>m`, `<h>h` or `<m>m`.
//!
//! Parsing never stops at the first bad token. Every rejected token is
//! reported, in input order, so the whole command can be fixed in one go.
//!
//! ```rust
//! use worklog::libs::parser::parse_tasks;
//!
//! let tasks = parse_tasks(&["622", "3h30m", "623"]).unwrap();
//! assert_eq!(tasks[0].id, "LP-622");
//! assert_eq!(tasks[0].minutes, Some(210));
//! assert_eq!(tasks[1].minutes, None);
//! ```

use super::task::{Task, DEFAULT_PROJECT};
use crate::msg_debug;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static TASK_ID_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([A-Z]+-)?[0-9]+$").expect("valid task id pattern"));
static COMBINED_TIME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([0-9]+)h([0-9]+)m$").expect("valid duration pattern"));
static SINGLE_TIME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([0-9]+)([hm])$").expect("valid duration pattern"));

/// Why a token was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorReason {
    /// A duration came before any task id.
    #[error("time as a first argument")]
    TimeAsFirstArgument,
    /// A second duration for the same task.
    #[error("time without a task")]
    TimeWithoutTask,
    /// Neither a task id nor a duration.
    #[error("couldn't parse")]
    Unparseable,
}

/// A rejected token together with the reason.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{reason} (token: {token})")]
pub struct ParseError {
    pub token: String,
    pub reason: ParseErrorReason,
}

pub type ParseResult = Result<Vec<Task>, Vec<ParseError>>;

/// Normalizes a task id token, or returns `None` if the token is not one.
pub fn parse_task_id(token: &str, project: &str) -> Option<String> {
    let captures = TASK_ID_RE.captures(token)?;

    match captures.get(1) {
        Some(_) => Some(token.to_string()),
        None => Some(format!("{}-{}", project, token)),
    }
}

/// Converts a duration token to minutes, or returns `None` if the token is
/// not a duration.
pub fn parse_time(token: &str) -> Option<u32> {
    if let Some(captures) = COMBINED_TIME_RE.captures(token) {
        let hours: u32 = captures[1].parse().ok()?;
        let minutes: u32 = captures[2].parse().ok()?;
        return hours.checked_mul(60)?.checked_add(minutes);
    }

    let captures = SINGLE_TIME_RE.captures(token)?;
    let value: u32 = captures[1].parse().ok()?;
    match &captures[2] {
        "h" => value.checked_mul(60),
        _ => Some(value),
    }
}

/// Collects tasks and errors side by side while walking the tokens.
#[derive(Debug, Default)]
pub struct TaskListBuilder {
    tasks: Vec<Task>,
    errors: Vec<ParseError>,
}

impl TaskListBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_task(&mut self, id: String) {
        self.tasks.push(Task { id, minutes: None });
    }

    pub fn attach_minutes(&mut self, token: &str, minutes: u32) {
        let reason = match self.tasks.last_mut() {
            None => ParseErrorReason::TimeAsFirstArgument,
            Some(task) if task.minutes.is_some() => ParseErrorReason::TimeWithoutTask,
            Some(task) => {
                task.minutes = Some(minutes);
                return;
            }
        };
        self.reject(token, reason);
    }

    pub fn reject(&mut self, token: &str, reason: ParseErrorReason) {
        self.errors.push(ParseError {
            token: token.to_string(),
            reason,
        });
    }

    /// Yields the task list, or every recorded error if there was any.
    pub fn finish(self) -> ParseResult {
        if self.errors.is_empty() {
            Ok(self.tasks)
        } else {
            Err(self.errors)
        }
    }
}

/// Parses tokens using the default `LP` project for bare ids.
pub fn parse_tasks<S: AsRef<str>>(tokens: &[S]) -> ParseResult {
    parse_tasks_with_project(tokens, DEFAULT_PROJECT)
}

/// Parses tokens, prefixing bare numeric ids with `project`.
pub fn parse_tasks_with_project<S: AsRef<str>>(tokens: &[S], project: &str) -> ParseResult {
    let mut builder = TaskListBuilder::new();

    for token in tokens {
        let token = token.as_ref();
        if let Some(id) = parse_task_id(token, project) {
            msg_debug!(format!("Token '{}' starts task {}", token, id));
            builder.start_task(id);
        } else if let Some(minutes) = parse_time(token) {
            msg_debug!(format!("Token '{}' is {} minutes", token, minutes));
            builder.attach_minutes(token, minutes);
        } else {
            builder.reject(token, ParseErrorReason::Unparseable);
        }
    }

    builder.finish()
}
