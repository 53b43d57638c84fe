// src/batch/model.rs

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A batch file as read from TOML.
///
/// This is a direct mapping of the input format:
///
/// ```toml
/// [[task]]
/// title = "Design"
/// due = "2024-01-10T00:00:00Z"
///
/// [[task]]
/// title = "Build"
/// estimated_hours = 8.0
/// due = "2024-01-05T00:00:00Z"
/// depends_on = ["Design"]
/// ```
///
/// The task array keeps its file order; that order is the deterministic
/// tie-break when several tasks with equal due dates are ready at once.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchFile {
    /// All tasks from `[[task]]` entries, in file order.
    #[serde(default)]
    pub task: Vec<TaskSpec>,
}

/// One task descriptor in a batch.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskSpec {
    /// Unique key within the batch. If a title repeats, the later entry
    /// replaces the earlier one.
    pub title: String,

    /// Informational only; never consulted by the ordering algorithm.
    #[serde(default)]
    pub estimated_hours: f64,

    /// RFC 3339 timestamp. A task without a due date sorts after every
    /// task that has one.
    #[serde(default, rename = "due")]
    pub due_date: Option<DateTime<Utc>>,

    /// Titles of prerequisite tasks in the same batch. Titles that do not
    /// match any task in the batch are ignored.
    #[serde(default)]
    pub depends_on: Vec<String>,
}

impl TaskSpec {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            estimated_hours: 0.0,
            due_date: None,
            depends_on: Vec::new(),
        }
    }
}
