#![allow(dead_code)]

use taskdag::batch::TaskSpec;

use crate::due;

/// Builder for an ordered batch of `TaskSpec`s to simplify test setup.
pub struct BatchBuilder {
    tasks: Vec<TaskSpec>,
}

impl BatchBuilder {
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    pub fn with_task(mut self, task: TaskSpec) -> Self {
        self.tasks.push(task);
        self
    }

    pub fn build(self) -> Vec<TaskSpec> {
        self.tasks
    }
}

impl Default for BatchBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a single `TaskSpec`.
pub struct TaskSpecBuilder {
    task: TaskSpec,
}

impl TaskSpecBuilder {
    pub fn new(title: &str) -> Self {
        Self {
            task: TaskSpec::new(title),
        }
    }

    /// Set the due date from an RFC 3339 string.
    pub fn due(mut self, rfc3339: &str) -> Self {
        self.task.due_date = Some(due(rfc3339));
        self
    }

    pub fn estimated_hours(mut self, hours: f64) -> Self {
        self.task.estimated_hours = hours;
        self
    }

    pub fn depends_on(mut self, title: &str) -> Self {
        self.task.depends_on.push(title.to_string());
        self
    }

    pub fn build(self) -> TaskSpec {
        self.task
    }
}
