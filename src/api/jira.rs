use super::{CommandRunner, IssueTracker, TrackerError};
use crate::libs::{config::ConfigModule, formatter::format_worklog_time, messages::Message, task::DEFAULT_PROJECT};
use crate::{msg_bail_anyhow, msg_debug};
use anyhow::Result;
use chrono::{NaiveDateTime, NaiveTime};
use dialoguer::{theme::ColorfulTheme, Input};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

const DEFAULT_BINARY: &str = "jira";
const DEFAULT_STARTED_AT: &str = "10:00:00";
const STARTED_AT_FORMAT: &str = "%H:%M:%S";
const STARTED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

static ISSUE_TITLE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"# (.+)").expect("valid issue title pattern"));
static PROJECT_KEY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]+$").expect("valid project key pattern"));

/// Jira access through the `jira` command-line client.
#[derive(Debug)]
pub struct JiraCli<R: CommandRunner> {
    config: JiraConfig,
    runner: R,
}

impl<R: CommandRunner> JiraCli<R> {
    pub fn new(config: &JiraConfig, runner: R) -> Self {
        Self {
            config: config.clone(),
            runner,
        }
    }

    fn run(&self, args: Vec<String>) -> Result<String, TrackerError> {
        msg_debug!(format!("Running {} {}", self.config.binary, args.join(" ")));
        let output = self.runner.run(&self.config.binary, &args)?;

        if !output.success() {
            return Err(TrackerError::CommandFailed {
                status: output.status,
                stderr: output.stderr.trim().to_string(),
            });
        }

        Ok(output.stdout)
    }
}

impl<R: CommandRunner> IssueTracker for JiraCli<R> {
    fn task_name(&self, id: &str) -> Result<String, TrackerError> {
        let stdout = self.run(vec!["issue".into(), "view".into(), id.into()])?;

        ISSUE_TITLE_RE
            .captures(&stdout)
            .and_then(|captures| captures.get(1))
            .map(|title| title.as_str().trim().to_string())
            .filter(|title| !title.is_empty())
            .ok_or_else(|| TrackerError::NameNotFound(id.to_string()))
    }

    fn add_worklog(&self, id: &str, minutes: u32, started: NaiveDateTime) -> Result<(), TrackerError> {
        self.run(vec![
            "issue".into(),
            "worklog".into(),
            "add".into(),
            id.into(),
            format_worklog_time(minutes),
            "--started".into(),
            started.format(STARTED_FORMAT).to_string(),
            "--no-input".into(),
        ])?;
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct JiraConfig {
    /// Executable of the Jira command-line client.
    #[serde(default = "default_binary")]
    pub binary: String,
    /// Project key for bare numeric task ids.
    #[serde(default = "default_project")]
    pub project: String,
    /// Time of day stamped on every worklog, `HH:MM:SS`.
    #[serde(default = "default_started_at")]
    pub started_at: String,
}

fn default_binary() -> String {
    DEFAULT_BINARY.to_string()
}

fn default_project() -> String {
    DEFAULT_PROJECT.to_string()
}

fn default_started_at() -> String {
    DEFAULT_STARTED_AT.to_string()
}

impl Default for JiraConfig {
    fn default() -> Self {
        Self {
            binary: default_binary(),
            project: default_project(),
            started_at: default_started_at(),
        }
    }
}

impl JiraConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "jira".to_string(),
            name: "Jira".to_string(),
        }
    }

    /// Parses `started_at` as a time of day.
    pub fn started_at_time(&self) -> Result<NaiveTime> {
        match NaiveTime::parse_from_str(&self.started_at, STARTED_AT_FORMAT) {
            Ok(time) => Ok(time),
            Err(_) => msg_bail_anyhow!(Message::InvalidStartTime(self.started_at.clone())),
        }
    }

    /// Checks the project key, which bare task ids are prefixed with.
    pub fn validate_project(&self) -> Result<()> {
        if !PROJECT_KEY_RE.is_match(&self.project) {
            msg_bail_anyhow!(Message::InvalidProjectKey(self.project.clone()));
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        self.validate_project()?;
        self.started_at_time().map(|_| ())
    }

    pub fn init(config: &Option<Self>) -> Result<Self> {
        let config = config.clone().unwrap_or_default();
        let updated = Self {
            binary: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptJiraBinary.to_string())
                .default(config.binary)
                .interact_text()?,
            project: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptJiraProject.to_string())
                .default(config.project)
                .interact_text()?,
            started_at: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptJiraStartedAt.to_string())
                .default(config.started_at)
                .interact_text()?,
        };
        updated.validate()?;
        Ok(updated)
    }
}
