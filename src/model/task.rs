use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a task, unique within one store for the life of the process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Assigned by the store at creation, never changes
    pub id: TaskId,
    /// Task title text
    pub title: String,
    /// Checkbox state
    pub is_completed: bool,
}

impl Task {
    /// Create an open task. Callers are expected to have trimmed the title.
    pub fn new(id: TaskId, title: String) -> Self {
        Task {
            id,
            title,
            is_completed: false,
        }
    }

    /// Overwrite the fields present in `patch`, leaving the rest alone
    pub fn apply(&mut self, patch: TaskPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(done) = patch.is_completed {
            self.is_completed = done;
        }
    }
}

/// A partial update of a task. The id is not patchable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub is_completed: Option<bool>,
}

impl TaskPatch {
    pub fn title(title: impl Into<String>) -> Self {
        TaskPatch {
            title: Some(title.into()),
            is_completed: None,
        }
    }

    pub fn completed(done: bool) -> Self {
        TaskPatch {
            title: None,
            is_completed: Some(done),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.is_completed.is_none()
    }
}
