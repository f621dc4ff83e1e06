//! The default command: turn task tokens into a logged workday.
//!
//! ```text
//! $ worklog 622 3h30m 623
//! ```
//!
//! parses the tokens, gives `LP-623` the rest of the day, looks both tasks
//! up in Jira, prints the timesheet and the spreadsheet row, and writes the
//! worklogs when `--write` is given.

use crate::{
    api::{JiraCli, SystemRunner},
    libs::{
        cell::format_row,
        config::Config,
        messages::Message,
        timesheet::{self, TimesheetError},
        view::View,
    },
    msg_bail_anyhow, msg_error_anyhow, msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::{Error, Result};
use chrono::{Local, NaiveDate};
use clap::Args;

#[derive(Debug, Args)]
pub struct LogArgs {
    /// Task entries: task ids (622, LP-622) each optionally followed by a duration (3h30m, 3h, 30m)
    #[arg(value_name = "TASK")]
    tasks: Vec<String>,

    /// Write work logs to Jira
    #[arg(short, long)]
    write: bool,

    /// Day to log, YYYY-MM-DD (default: today)
    #[arg(long, value_name = "DATE")]
    date: Option<NaiveDate>,

    /// Don't care if the sum is not equal to 8h
    #[arg(long)]
    sloppy: bool,
}

pub fn cmd(args: LogArgs) -> Result<()> {
    if args.tasks.is_empty() {
        msg_bail_anyhow!(Message::NoTasksGiven);
    }

    // bare ids need the project key before anything can be parsed
    let jira_config = Config::read()?.jira_or_default();
    let date = args.date.unwrap_or_else(|| Local::now().date_naive());

    let sheet = timesheet::prepare(&args.tasks, &jira_config.project, args.sloppy).map_err(report)?;
    if let Some(imbalance) = &sheet.imbalance {
        msg_warning!(Message::SloppyAllocation(imbalance.to_string()));
    }

    let jira = JiraCli::new(&jira_config, SystemRunner);
    let names = timesheet::lookup_names(&jira, &sheet.tasks).map_err(report)?;

    msg_print!(Message::TimesheetHeader(date.format("%B %-d, %Y").to_string()), true);
    View::tasks(&sheet.tasks, &names)?;

    msg_print!(Message::SpreadsheetRowHeader, true);
    msg_print!(format_row(&sheet.tasks, &names));

    if !args.write {
        msg_info!(Message::DryRun, true);
        return Ok(());
    }

    let started = date.and_time(jira_config.started_at_time()?);
    let written = timesheet::write_worklogs(&jira, &sheet.tasks, started).map_err(|error| match error {
        TimesheetError::Tracker { id, source } => msg_error_anyhow!(Message::WorklogWriteFailed {
            id,
            reason: source.to_string(),
        }),
        other => report(other),
    })?;
    msg_success!(Message::AllWorklogsWritten(written, date.format("%Y-%m-%d").to_string()), true);

    Ok(())
}

/// Turns a pipeline failure into the message shown to the user.
fn report(error: TimesheetError) -> Error {
    match error {
        TimesheetError::Parse(errors) => {
            let mut text = Message::ParseFailed.to_string();
            for error in errors {
                text.push('\n');
                text.push_str(&Message::ParseErrorItem(error.to_string()).to_string());
            }
            msg_error_anyhow!(text)
        }
        TimesheetError::Allocation(error) => msg_error_anyhow!(Message::AllocationFailed(error.to_string())),
        TimesheetError::Tracker { id, source } => msg_error_anyhow!(Message::TaskNameNotFound {
            id,
            reason: source.to_string(),
        }),
    }
}
