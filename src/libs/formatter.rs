//! Time formatting for tables, worklogs and spreadsheet rows.
//!
//! Three renderings of the same minute count are needed:
//!
//! - **Table**: `HH:MM`, as shown by [`format_duration`]
//! - **Worklog**: `3h30m` / `3h` / `30m`, the duration syntax Jira accepts
//! - **Spreadsheet**: decimal hours such as `7.5`
//!
//! ## Examples
//!
//! ```rust
//! use worklog::libs::formatter::{format_duration, format_worklog_time, format_hours};
//! use chrono::Duration;
//!
//! assert_eq!(format_duration(&Duration::minutes(210)), "03:30");
//! assert_eq!(format_worklog_time(210), "3h30m");
//! assert_eq!(format_hours(450), "7.5");
//! ```

use chrono::Duration;

/// A task prepared for display, every field already rendered.
#[derive(Debug, Clone)]
pub struct FormattedTask {
    /// Task id, e.g. `LP-622`.
    pub id: String,

    /// Issue summary as returned by the tracker.
    pub name: String,

    /// Time spent in `HH:MM`.
    pub time: String,
}

/// Formats a chrono::Duration into a "HH:MM" string.
///
/// Seconds are dropped and negative durations are clamped to `00:00`.
///
/// ```rust
/// use worklog::libs::formatter::format_duration;
/// use chrono::Duration;
///
/// assert_eq!(format_duration(&Duration::hours(8)), "08:00");
/// assert_eq!(format_duration(&Duration::minutes(45)), "00:45");
/// assert_eq!(format_duration(&Duration::hours(-1)), "00:00");
/// ```
pub fn format_duration(duration: &Duration) -> String {
    let hours = duration.num_hours();
    let mins = duration.num_minutes() % 60;

    format!("{:02}:{:02}", hours.max(0), mins.max(0))
}

/// Same as [`format_duration`] for a plain minute count.
pub fn format_minutes(minutes: u64) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Renders minutes in the tracker's duration syntax.
///
/// Zero renders as `0m` so the value is never empty.
pub fn format_worklog_time(minutes: u32) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;

    match (hours, mins) {
        (0, m) => format!("{}m", m),
        (h, 0) => format!("{}h", h),
        (h, m) => format!("{}h{}m", h, m),
    }
}

/// Renders minutes as decimal hours without trailing zeros.
pub fn format_hours(minutes: u64) -> String {
    if minutes % 60 == 0 {
        return (minutes / 60).to_string();
    }

    let hours = format!("{:.2}", minutes as f64 / 60.0);
    hours.trim_end_matches('0').trim_end_matches('.').to_string()
}
