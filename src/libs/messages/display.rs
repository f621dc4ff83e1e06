//! Display implementation for worklog messages.
//!
//! All user-facing text is defined here, in one match, so wording stays
//! consistent between commands and every new [`Message`] variant needs an
//! explicit text.
//!
//! ```rust
//! use worklog::libs::messages::Message;
//!
//! let message = Message::TimesheetHeader("2025-05-05".to_string());
//! assert_eq!(message.to_string(), "Timesheet for 2025-05-05");
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TIMESHEET MESSAGES ===
            Message::NoTasksGiven => "No tasks given. Run with --help to see examples.".to_string(),
            Message::ParseFailed => "Things went wrong:".to_string(),
            Message::ParseErrorItem(error) => format!("- {}", error),
            Message::AllocationFailed(error) => format!("Couldn't fill in the gaps. Reason: {}.", error),
            Message::SloppyAllocation(error) => format!("The day doesn't add up to 8h ({}), logging the time as is.", error),
            Message::TimesheetHeader(date) => format!("Timesheet for {}", date),

            // === JIRA MESSAGES ===
            Message::LookingUpTask(id) => format!("Looking up {} in Jira", id),
            Message::TaskNameNotFound { id, reason } => format!("Couldn't retrieve the task {} from Jira. Reason: {}", id, reason),
            Message::WritingWorklog { id, time } => format!("Writing {} to {}", time, id),
            Message::WorklogWriteFailed { id, reason } => format!("Couldn't log time to {}. Reason: {}", id, reason),
            Message::AllWorklogsWritten(count, date) => format!("{} worklog(s) written for {}", count, date),
            Message::DryRun => "Nothing was written to Jira. Run again with --write to log the time.".to_string(),

            // === SPREADSHEET MESSAGES ===
            Message::SpreadsheetRowHeader => "Spreadsheet row:".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration deleted".to_string(),
            Message::ConfigModuleJira => "Jira settings".to_string(),
            Message::InvalidStartTime(value) => format!("Invalid worklog start time '{}', expected HH:MM:SS", value),
            Message::InvalidProjectKey(value) => format!("Invalid project key '{}', expected uppercase letters like LP", value),

            // === PROMPTS ===
            Message::PromptSelectModules => "Select nodes to configure".to_string(),
            Message::PromptJiraBinary => "Enter the Jira CLI executable".to_string(),
            Message::PromptJiraProject => "Enter the default project key".to_string(),
            Message::PromptJiraStartedAt => "Enter the worklog start time (HH:MM:SS)".to_string(),
        };
        write!(f, "{}", text)
    }
}
