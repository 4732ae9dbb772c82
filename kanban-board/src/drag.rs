//! The reorder/move engine: drag gesture tracking and keyboard moves.
//!
//! A `DragTracker` holds at most one ephemeral [`DragSession`]: opened
//! on drag start, updated on hover, consumed by a drop. Sessions never
//! reach persisted state. The hover position arrives as an explicit
//! zero-based index from the presentation layer; the engine knows
//! nothing about how it was measured.

use crate::error::Result;
use crate::store::BoardStore;
use crate::types::{Board, ColumnId, Direction, TaskId};
use serde_json::json;
use tracing::debug;

/// Ephemeral state of an in-progress drag gesture
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    pub task_id: TaskId,
    pub from_column: ColumnId,
    /// Candidate insertion index recorded by the latest accepted hover
    pub hover_index: Option<usize>,
    /// Column under the pointer at the latest accepted hover
    pub target_column: Option<ColumnId>,
}

impl DragSession {
    /// The wire payload the presentation layer attaches to the native
    /// drag: just enough to identify the task and its source column.
    pub fn payload(&self) -> serde_json::Value {
        json!({
            "taskId": self.task_id.as_str(),
            "fromColumnId": self.from_column.as_str(),
        })
    }
}

/// A completed move, as reported to the host
#[derive(Debug, Clone, PartialEq)]
pub struct TaskMove {
    pub task_id: TaskId,
    pub from: ColumnId,
    pub to: ColumnId,
    /// Final index in the destination column
    pub index: usize,
}

/// Tracks the single active drag gesture
#[derive(Debug, Default)]
pub struct DragTracker {
    session: Option<DragSession>,
}

impl DragTracker {
    /// Create a tracker with no active gesture
    pub fn new() -> Self {
        Self::default()
    }

    /// The active session, if a drag is in progress
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Open a session for the given task. A still-active session is
    /// replaced, since drag-start during a drag means the previous gesture
    /// never completed.
    pub fn begin(&mut self, task_id: TaskId, from_column: ColumnId) {
        if self.session.is_some() {
            debug!(task = %task_id, "replacing still-active drag session");
        }
        self.session = Some(DragSession {
            task_id,
            from_column,
            hover_index: None,
            target_column: None,
        });
    }

    /// Record the hover position over a candidate column.
    ///
    /// A column at capacity cannot be previewed as a drop target: the
    /// hover is rejected and the session keeps its previous state. With
    /// no active session this is a no-op.
    pub fn drag_over(&mut self, board: &Board, column_id: &ColumnId, hover_index: usize) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let Some(column) = board.find_column(column_id) else {
            return;
        };
        if column.is_full() {
            debug!(column = %column_id, "hover rejected: column at capacity");
            return;
        }
        session.hover_index = Some(hover_index);
        session.target_column = Some(column_id.clone());
    }

    /// Clear the session. Called on drag cancel or completion;
    /// idempotent.
    pub fn end(&mut self) {
        self.session = None;
    }

    /// Complete the gesture by dropping onto `target`.
    ///
    /// - no session, or unresolvable source/target column: silent
    ///   no-op, nothing mutates;
    /// - a *different* column at capacity: the move is discarded whole
    ///   and the capacity error surfaces to the caller (same-column
    ///   reordering is exempt: net membership does not change);
    /// - otherwise the task lands at the recorded hover index (end of
    ///   the list when none was recorded), `status` follows the column,
    ///   and the session is cleared.
    pub fn drop_on(&mut self, store: &mut BoardStore, target: &ColumnId) -> Result<Option<TaskMove>> {
        let Some(session) = self.session.clone() else {
            debug!("drop with no active drag session");
            return Ok(None);
        };
        if store.board().find_column(&session.from_column).is_none()
            || store.board().find_column(target).is_none()
        {
            debug!(column = %target, "drop with unresolvable column");
            return Ok(None);
        }

        let result = store.try_commit(|board| {
            board.transfer_task(
                &session.task_id,
                &session.from_column,
                target,
                session.hover_index,
            )
        });

        match result {
            Ok(index) => {
                self.session = None;
                Ok(Some(TaskMove {
                    task_id: session.task_id,
                    from: session.from_column,
                    to: target.clone(),
                    index,
                }))
            }
            Err(e) if e.is_capacity() => Err(e),
            Err(e) => {
                debug!(error = %e, "drop aborted without mutation");
                Ok(None)
            }
        }
    }
}

/// Move a task one step by keyboard. Boundary presses and unresolvable
/// inputs are silent no-ops; completed moves report where the task
/// landed.
pub fn keyboard_move(
    store: &mut BoardStore,
    task_id: &TaskId,
    column_id: &ColumnId,
    direction: Direction,
) -> Option<TaskMove> {
    store
        .commit(|board| board.shift_task(task_id, column_id, direction))
        .map(|(from, to, index)| TaskMove {
            task_id: task_id.clone(),
            from,
            to,
            index,
        })
}
