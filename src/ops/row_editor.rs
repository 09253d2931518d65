use tracing::debug;

use crate::model::task::{TaskId, TaskPatch};
use crate::ops::task_store::TaskStore;

/// Edit state of one row
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RowState {
    #[default]
    Viewing,
    /// Holds the candidate title; the task is untouched until save
    Editing { draft: String },
}

/// In-place title editor for a single task row.
///
/// Transitions that do not apply to the current state return false and
/// change nothing.
#[derive(Debug, Clone)]
pub struct RowEditor {
    task_id: TaskId,
    state: RowState,
}

impl RowEditor {
    pub fn new(task_id: TaskId) -> Self {
        RowEditor {
            task_id,
            state: RowState::Viewing,
        }
    }

    pub fn task_id(&self) -> TaskId {
        self.task_id
    }

    pub fn state(&self) -> &RowState {
        &self.state
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.state, RowState::Editing { .. })
    }

    /// Current draft, if editing
    pub fn draft(&self) -> Option<&str> {
        match &self.state {
            RowState::Editing { draft } => Some(draft),
            RowState::Viewing => None,
        }
    }

    /// Viewing → Editing, seeding the draft with the task's current title
    pub fn enter_edit(&mut self, current_title: &str) -> bool {
        if self.is_editing() {
            return false;
        }
        self.state = RowState::Editing {
            draft: current_title.to_string(),
        };
        debug!(id = %self.task_id, "row editing");
        true
    }

    /// Replace the draft text. Never touches the store.
    pub fn change_draft(&mut self, text: impl Into<String>) -> bool {
        match &mut self.state {
            RowState::Editing { draft } => {
                *draft = text.into();
                true
            }
            RowState::Viewing => false,
        }
    }

    /// Editing → Viewing, writing the draft into the task verbatim.
    ///
    /// No trimming or blank check happens here, unlike `TaskStore::add_task`.
    pub fn save(&mut self, store: &mut TaskStore) -> bool {
        let RowState::Editing { draft } = std::mem::take(&mut self.state) else {
            return false;
        };
        debug!(id = %self.task_id, draft = %draft, "row saved");
        store.update_task(self.task_id, TaskPatch::title(draft));
        true
    }

    /// Editing → Viewing, dropping the draft
    pub fn discard(&mut self) -> bool {
        if !self.is_editing() {
            return false;
        }
        self.state = RowState::Viewing;
        debug!(id = %self.task_id, "row edit discarded");
        true
    }
}
