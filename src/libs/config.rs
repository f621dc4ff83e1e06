//! Configuration management for worklog.
//!
//! Settings live in a JSON file in the platform data directory:
//!
//! - **Windows**: `%LOCALAPPDATA%\lacodda\worklog\config.json`
//! - **macOS**: `~/Library/Application Support/lacodda/worklog/config.json`
//! - **Linux**: `~/.local/share/lacodda/worklog/config.json`
//!
//! Every module is optional. A missing file, or a missing module inside it,
//! falls back to defaults, so the tool works without running `worklog init`.
//!
//! ```rust,no_run
//! use worklog::libs::config::Config;
//!
//! let config = Config::read()?;
//! let jira = config.jira_or_default();
//! println!("Bare ids go to project {}", jira.project);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::api::jira::JiraConfig;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// A configurable module offered by the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    /// Key used for routing in [`Config::init`]
    pub key: String,
    /// Name shown in the module list
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    /// Issue tracker settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jira: Option<JiraConfig>,
}

impl Config {
    /// Location of the configuration file, creating its directory if needed.
    pub fn path() -> Result<PathBuf> {
        DataStorage::new().get_path(CONFIG_FILE_NAME)
    }

    /// Reads the configuration, or returns defaults if there is no file yet.
    ///
    /// Reading never creates the data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed, or
    /// if the Jira project key is invalid. The worklog start time is checked
    /// only when it is used, see [`JiraConfig::started_at_time`].
    pub fn read() -> Result<Config> {
        Self::read_from(&DataStorage::new().file_path(CONFIG_FILE_NAME))
    }

    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        if let Some(jira) = &config.jira {
            jira.validate_project()?;
        }
        Ok(config)
    }

    /// Saves the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file. A missing file is not an error.
    pub fn delete() -> Result<()> {
        let path = DataStorage::new().file_path(CONFIG_FILE_NAME);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    /// Jira settings, falling back to defaults when the module is not configured.
    pub fn jira_or_default(&self) -> JiraConfig {
        self.jira.clone().unwrap_or_default()
    }

    /// Runs the interactive setup wizard, starting from the current settings.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![JiraConfig::module()];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "jira" => {
                    msg_print!(Message::ConfigModuleJira);
                    config.jira = Some(JiraConfig::init(&config.jira)?);
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
