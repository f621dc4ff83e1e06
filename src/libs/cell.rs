//! Spreadsheet row for the daily report.
//!
//! The team sheet keeps one row per day: a multi-line cell listing the
//! tasks and a cell with the hours worked. [`format_row`] produces both,
//! separated by a tab, so the output can be pasted straight into the sheet.
//!
//! ```text
//! "[LP-642] Add rate limiting to member enrollments
//! [LP-622] Enhance Create Profile screen UI"	8
//! ```

use super::formatter::format_hours;
use super::task::{Task, TaskList};
use std::collections::HashMap;

/// One `[<id>] <name>` line per task, in task order.
///
/// A task missing from `names` is listed with its id only.
pub fn format_cell(tasks: &[Task], names: &HashMap<String, String>) -> String {
    tasks
        .iter()
        .map(|task| match names.get(&task.id) {
            Some(name) => format!("[{}] {}", task.id, name),
            None => format!("[{}]", task.id),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// The quoted task cell and the total hours, tab separated.
pub fn format_row(tasks: &[Task], names: &HashMap<String, String>) -> String {
    let cell = format_cell(tasks, names).replace('"', "\"\"");
    format!("\"{}\"\t{}", cell, format_hours(tasks.total_minutes()))
}
