//! # Worklog - Jira time logging from the command line
//!
//! Splits a workday between Jira tasks from a handful of command tokens,
//! writes the worklogs and prints a row for the team spreadsheet.
//!
//! ## Features
//!
//! - **Token Parsing**: `622 3h30m LP-623` style task lists with full error reports
//! - **Gap Filling**: Tasks without a duration share the rest of the 8 hour day
//! - **Jira Integration**: Issue names and worklogs through the `jira` CLI
//! - **Spreadsheet Row**: Ready to paste task list and hours
//!
//! ## Usage
//!
//! ```rust,no_run
//! use worklog::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
