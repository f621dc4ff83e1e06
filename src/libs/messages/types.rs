#[derive(Debug, Clone)]
pub enum Message {
    // === TIMESHEET MESSAGES ===
    NoTasksGiven,
    ParseFailed,
    ParseErrorItem(String), // formatted parse error
    AllocationFailed(String), // allocation error
    SloppyAllocation(String), // allocation error
    TimesheetHeader(String), // date

    // === JIRA MESSAGES ===
    LookingUpTask(String), // task id
    TaskNameNotFound {
        id: String,
        reason: String,
    },
    WritingWorklog {
        id: String,
        time: String,
    },
    WorklogWriteFailed {
        id: String,
        reason: String,
    },
    AllWorklogsWritten(usize, String), // count, date
    DryRun,

    // === SPREADSHEET MESSAGES ===
    SpreadsheetRowHeader,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigModuleJira,
    InvalidStartTime(String), // value
    InvalidProjectKey(String), // value

    // === PROMPTS ===
    PromptSelectModules,
    PromptJiraBinary,
    PromptJiraProject,
    PromptJiraStartedAt,
}
