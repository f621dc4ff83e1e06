//! Issue tracker integration.
//!
//! Worklog never talks to the tracker over HTTP. It drives the tracker's own
//! command-line client as a subprocess, which already owns authentication.
//! Two seams keep that testable:
//!
//! - [`IssueTracker`]: what the timesheet pipeline needs from a tracker
//! - [`CommandRunner`]: how a tracker client runs its executable
//!
//! ```rust,no_run
//! use worklog::api::{IssueTracker, SystemRunner};
//! use worklog::api::jira::{JiraCli, JiraConfig};
//!
//! let jira = JiraCli::new(&JiraConfig::default(), SystemRunner);
//! let name = jira.task_name("LP-622")?;
//! # Ok::<(), worklog::api::TrackerError>(())
//! ```

use chrono::NaiveDateTime;
use std::process::Command;
use thiserror::Error;

pub mod jira;

pub use jira::{JiraCli, JiraConfig};

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("no name found for {0}")]
    NameNotFound(String),
    #[error("command exited with status {status}: {stderr}")]
    CommandFailed { status: i32, stderr: String },
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Captured result of a finished process.
#[derive(Debug, Clone, Default)]
pub struct CommandOutput {
    /// Exit code, `-1` when the process was killed by a signal.
    pub status: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.status == 0
    }
}

/// Runs an external program to completion.
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput, TrackerError>;
}

/// Runs programs with `std::process::Command`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput, TrackerError> {
        let output = Command::new(program).args(args).output().map_err(|source| TrackerError::Spawn {
            program: program.to_string(),
            source,
        })?;

        Ok(CommandOutput {
            status: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// What the timesheet needs from an issue tracker.
pub trait IssueTracker {
    /// Looks up the display name (summary) of an issue.
    ///
    /// # Errors
    ///
    /// [`TrackerError::NameNotFound`] when the issue has no readable name,
    /// or a process error if the client could not be run.
    fn task_name(&self, id: &str) -> Result<String, TrackerError>;

    /// Records `minutes` of work on issue `id`, starting at `started`.
    fn add_worklog(&self, id: &str, minutes: u32, started: NaiveDateTime) -> Result<(), TrackerError>;
}
