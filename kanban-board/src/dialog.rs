//! Dialog state for task CRUD: the create/edit modal and the delete
//! confirmation prompt.
//!
//! These hold state only; the widget facade runs the actual board
//! mutations when the dialog collaborators call back in. Field-level
//! validation (non-empty title, due date not in the past) belongs to
//! the modal collaborator; nothing here re-checks it.

use crate::types::{ColumnId, Task};

/// State of the task create/edit modal
#[derive(Debug, Clone, PartialEq, Default)]
pub enum TaskDialog {
    #[default]
    Closed,
    /// Creating a new task in the given column
    Creating { column: ColumnId },
    /// Editing an existing task; the column is locked to the task's
    /// current status
    Editing { task: Task },
}

impl TaskDialog {
    /// Open the modal for creating a task in `column`
    pub fn open_create(&mut self, column: ColumnId) {
        *self = Self::Creating { column };
    }

    /// Open the modal for editing `task`
    pub fn open_edit(&mut self, task: Task) {
        *self = Self::Editing { task };
    }

    /// Close the modal from either open state
    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    /// Whether the modal is showing
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// The task being edited: the modal collaborator's nullable
    /// `initial task` (None while creating)
    pub fn editing_task(&self) -> Option<&Task> {
        match self {
            Self::Editing { task } => Some(task),
            _ => None,
        }
    }

    /// The column the save will land in
    pub fn active_column(&self) -> Option<&ColumnId> {
        match self {
            Self::Closed => None,
            Self::Creating { column } => Some(column),
            Self::Editing { task } => Some(&task.status),
        }
    }
}

/// Two-phase delete confirmation: hold a candidate until the
/// confirmation dialog resolves it one way or the other
#[derive(Debug, Clone, Default)]
pub struct DeletePrompt {
    candidate: Option<Task>,
}

impl DeletePrompt {
    /// Create a prompt with no candidate
    pub fn new() -> Self {
        Self::default()
    }

    /// Hold `task` as the deletion candidate and open the prompt
    pub fn request(&mut self, task: Task) {
        self.candidate = Some(task);
    }

    /// The task awaiting confirmation
    pub fn candidate(&self) -> Option<&Task> {
        self.candidate.as_ref()
    }

    /// Whether the prompt is showing
    pub fn is_open(&self) -> bool {
        self.candidate.is_some()
    }

    /// Resolve the prompt, taking the candidate out
    pub fn take(&mut self) -> Option<Task> {
        self.candidate.take()
    }

    /// Discard the candidate without mutation
    pub fn cancel(&mut self) {
        self.candidate = None;
    }
}
