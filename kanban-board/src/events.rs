//! Host-application notification callbacks.
//!
//! The embedding application receives one call per completed mutation.
//! All methods default to no-ops so hosts implement only what they
//! consume.

use crate::types::{ColumnId, Task, TaskDraft, TaskId};

/// Callbacks fired by the board toward the embedding application
pub trait BoardEvents {
    /// A task moved, by drop or by keyboard. Fired once per completed
    /// move with the final index in the destination column.
    fn on_task_move(
        &self,
        _task_id: &TaskId,
        _from_column: &ColumnId,
        _to_column: &ColumnId,
        _new_index: usize,
    ) {
    }

    /// A task was created through the dialog controller
    fn on_task_create(&self, _column_id: &ColumnId, _task: &Task) {}

    /// An existing task was edited; `updates` carries the saved form
    fn on_task_update(&self, _task_id: &TaskId, _updates: &TaskDraft) {}

    /// A task was deleted after confirmation
    fn on_task_delete(&self, _task_id: &TaskId) {}

    /// A drop was rejected because the target column is at capacity.
    /// The embedder surfaces this to the user (alert-equivalent);
    /// nothing moved.
    fn on_move_rejected(&self, _task_id: &TaskId, _column_id: &ColumnId) {}
}

/// An events sink that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullEvents;

impl BoardEvents for NullEvents {}

#[cfg(any(test, feature = "test-support"))]
pub use self::test_support::{EventRecord, RecordingEvents};

#[cfg(any(test, feature = "test-support"))]
mod test_support {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// A recorded callback invocation, with ids flattened to strings
    /// for easy assertions
    #[derive(Debug, Clone, PartialEq)]
    pub enum EventRecord {
        Move {
            task: String,
            from: String,
            to: String,
            index: usize,
        },
        Create {
            column: String,
            task: String,
        },
        Update {
            task: String,
        },
        Delete {
            task: String,
        },
        Rejected {
            task: String,
            column: String,
        },
    }

    /// Events sink that records every invocation. Cloning shares the
    /// underlying log, so a test keeps one handle and gives the board
    /// the other.
    #[derive(Debug, Clone, Default)]
    pub struct RecordingEvents {
        log: Rc<RefCell<Vec<EventRecord>>>,
    }

    impl RecordingEvents {
        pub fn new() -> Self {
            Self::default()
        }

        /// Snapshot of everything recorded so far
        pub fn records(&self) -> Vec<EventRecord> {
            self.log.borrow().clone()
        }
    }

    impl BoardEvents for RecordingEvents {
        fn on_task_move(
            &self,
            task_id: &TaskId,
            from_column: &ColumnId,
            to_column: &ColumnId,
            new_index: usize,
        ) {
            self.log.borrow_mut().push(EventRecord::Move {
                task: task_id.to_string(),
                from: from_column.to_string(),
                to: to_column.to_string(),
                index: new_index,
            });
        }

        fn on_task_create(&self, column_id: &ColumnId, task: &Task) {
            self.log.borrow_mut().push(EventRecord::Create {
                column: column_id.to_string(),
                task: task.id.to_string(),
            });
        }

        fn on_task_update(&self, task_id: &TaskId, _updates: &TaskDraft) {
            self.log.borrow_mut().push(EventRecord::Update {
                task: task_id.to_string(),
            });
        }

        fn on_task_delete(&self, task_id: &TaskId) {
            self.log.borrow_mut().push(EventRecord::Delete {
                task: task_id.to_string(),
            });
        }

        fn on_move_rejected(&self, task_id: &TaskId, column_id: &ColumnId) {
            self.log.borrow_mut().push(EventRecord::Rejected {
                task: task_id.to_string(),
                column: column_id.to_string(),
            });
        }
    }
}
