//! Core library modules for worklog.
//!
//! - **Timesheet core**: [`task`], [`parser`], [`gaps`], [`timesheet`]
//! - **Output**: [`formatter`], [`cell`], [`view`], [`messages`]
//! - **Infrastructure**: [`config`], [`data_storage`]
//!
//! ```rust
//! use worklog::libs::{gaps::fill_gaps, parser::parse_tasks};
//!
//! let tasks = parse_tasks(&["622", "3h30m", "623"]).unwrap();
//! let tasks = fill_gaps(tasks).unwrap();
//! assert_eq!(tasks[1].minutes, Some(270));
//! ```

pub mod cell;
pub mod config;
pub mod data_storage;
pub mod formatter;
pub mod gaps;
pub mod messages;
pub mod parser;
pub mod task;
pub mod timesheet;
pub mod view;
