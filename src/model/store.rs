use super::task::{Task, TaskStatus};

/// Position of a task in the [`TaskStore`].
///
/// This is store identity, not a row in the current view: a filtered view
/// maps its rows onto `TaskIndex` values (see `ops::view`). Deleting a task
/// shifts the index of every task after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskIndex(pub usize);

/// Authoritative, unfiltered, ordered list of tasks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the store contents with records read from storage
    pub fn load(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }

    /// Append a todo task. Names with no visible text are rejected and
    /// `None` is returned.
    pub fn add(&mut self, name: &str) -> Option<TaskIndex> {
        if name.trim().is_empty() {
            return None;
        }
        self.tasks.push(Task::new(name));
        Some(TaskIndex(self.tasks.len() - 1))
    }

    /// Remove and return the task at `index`; out of range is a no-op
    pub fn delete(&mut self, index: TaskIndex) -> Option<Task> {
        if index.0 < self.tasks.len() {
            Some(self.tasks.remove(index.0))
        } else {
            None
        }
    }

    /// Returns false when `index` does not reference a task
    pub fn set_status(&mut self, index: TaskIndex, status: TaskStatus) -> bool {
        match self.tasks.get_mut(index.0) {
            Some(task) => {
                task.status = status;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, index: TaskIndex) -> Option<&Task> {
        self.tasks.get(index.0)
    }

    /// Every task in store order
    pub fn snapshot(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl From<Vec<Task>> for TaskStore {
    fn from(tasks: Vec<Task>) -> Self {
        TaskStore { tasks }
    }
}
