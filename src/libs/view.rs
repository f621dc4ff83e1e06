use super::formatter::{format_duration, format_minutes, FormattedTask};
use super::task::{Task, TaskList};
use anyhow::Result;
use chrono::Duration;
use prettytable::{row, Table};
use std::collections::HashMap;

pub struct View {}

impl View {
    /// Prints the allocated timesheet with a total row.
    pub fn tasks(tasks: &[Task], names: &HashMap<String, String>) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "TIME"]);
        for task in Self::format(tasks, names) {
            table.add_row(row![task.id, task.name, task.time]);
        }
        table.add_row(row!["", "TOTAL", format_minutes(tasks.total_minutes())]);
        table.printstd();

        Ok(())
    }

    pub fn format(tasks: &[Task], names: &HashMap<String, String>) -> Vec<FormattedTask> {
        tasks
            .iter()
            .map(|task| FormattedTask {
                id: task.id.clone(),
                name: names.get(&task.id).cloned().unwrap_or_default(),
                time: format_duration(&Duration::minutes(i64::from(task.minutes.unwrap_or(0)))),
            })
            .collect()
    }
}
