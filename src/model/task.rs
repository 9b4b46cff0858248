use serde::{Deserialize, Serialize};

/// Completion status of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Todo,
    Done,
}

impl TaskStatus {
    /// The label written to the `status` column and shown in the table
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::Done => "done",
        }
    }
}

/// A single todo item. Field names match the CSV header (`task,status`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "task")]
    pub name: String,
    pub status: TaskStatus,
}

impl Task {
    /// A new task starts as todo
    pub fn new(name: impl Into<String>) -> Self {
        Task {
            name: name.into(),
            status: TaskStatus::Todo,
        }
    }

    pub fn is_done(&self) -> bool {
        self.status == TaskStatus::Done
    }
}
