//! The board widget facade: one object a presentation layer drives.
//!
//! Wires the state store, the drag tracker, and the dialog state
//! together, and fires the host callbacks as mutations complete. The
//! accessors are the render contract: columns in board order, tasks
//! per column in display order with dangling ids filtered out.

use crate::dialog::{DeletePrompt, TaskDialog};
use crate::drag::{self, DragSession, DragTracker, TaskMove};
use crate::error::Result;
use crate::events::{BoardEvents, NullEvents};
use crate::storage::StorageAdapter;
use crate::store::BoardStore;
use crate::types::{Column, ColumnId, Direction, Task, TaskDraft, TaskId};
use std::collections::HashMap;
use tracing::debug;

/// A headless kanban board: state, gestures, CRUD, persistence
pub struct KanbanBoard {
    store: BoardStore,
    drag: DragTracker,
    dialog: TaskDialog,
    delete_prompt: DeletePrompt,
    events: Box<dyn BoardEvents>,
}

impl KanbanBoard {
    /// Build a board from host-supplied initial data. Persisted
    /// snapshots in `storage` override the initial collections per
    /// slot; host callbacks default to no-ops.
    pub fn new(
        initial_columns: Vec<Column>,
        initial_tasks: HashMap<TaskId, Task>,
        storage: Box<dyn StorageAdapter>,
    ) -> Self {
        Self {
            store: BoardStore::new(initial_columns, initial_tasks, storage),
            drag: DragTracker::new(),
            dialog: TaskDialog::default(),
            delete_prompt: DeletePrompt::new(),
            events: Box::new(NullEvents),
        }
    }

    /// Set the host callback sink
    pub fn with_events(mut self, events: Box<dyn BoardEvents>) -> Self {
        self.events = events;
        self
    }

    // =========================================================================
    // Render contract
    // =========================================================================

    /// Columns in board order
    pub fn columns(&self) -> &[Column] {
        self.store.columns()
    }

    /// The flat task map
    pub fn tasks(&self) -> &HashMap<TaskId, Task> {
        self.store.tasks()
    }

    /// Tasks of one column in display order, dangling ids filtered out
    pub fn tasks_in(&self, column_id: &ColumnId) -> Vec<&Task> {
        self.store.board().tasks_in(column_id)
    }

    /// The underlying state store
    pub fn store(&self) -> &BoardStore {
        &self.store
    }

    /// The underlying state store (mutable), for host-driven snapshot
    /// or functional updates outside the gesture/dialog paths
    pub fn store_mut(&mut self) -> &mut BoardStore {
        &mut self.store
    }

    /// The active drag session, if any
    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.session()
    }

    /// The task modal state
    pub fn dialog(&self) -> &TaskDialog {
        &self.dialog
    }

    /// The delete confirmation state
    pub fn delete_prompt(&self) -> &DeletePrompt {
        &self.delete_prompt
    }

    // =========================================================================
    // Drag & drop / keyboard
    // =========================================================================

    /// Start dragging a task out of a column
    pub fn begin_drag(&mut self, task_id: TaskId, from_column: ColumnId) {
        self.drag.begin(task_id, from_column);
    }

    /// Record the pointer hovering over a column at the given insertion
    /// index
    pub fn drag_over(&mut self, column_id: &ColumnId, hover_index: usize) {
        self.drag.drag_over(self.store.board(), column_id, hover_index);
    }

    /// Cancel or finish the gesture, clearing the session
    pub fn end_drag(&mut self) {
        self.drag.end();
    }

    /// Drop the dragged task onto `target`. Fires `on_task_move` for a
    /// completed move and `on_move_rejected` when the target is at
    /// capacity.
    pub fn drop_on(&mut self, target: &ColumnId) -> Result<Option<TaskMove>> {
        match self.drag.drop_on(&mut self.store, target) {
            Ok(Some(moved)) => {
                self.events
                    .on_task_move(&moved.task_id, &moved.from, &moved.to, moved.index);
                Ok(Some(moved))
            }
            Ok(None) => Ok(None),
            Err(e) => {
                if e.is_capacity() {
                    if let Some(session) = self.drag.session() {
                        self.events.on_move_rejected(&session.task_id, target);
                    }
                }
                Err(e)
            }
        }
    }

    /// Move a task one step with the keyboard. Boundary presses are
    /// silent no-ops; completed moves fire `on_task_move`.
    pub fn keyboard_move(
        &mut self,
        task_id: &TaskId,
        column_id: &ColumnId,
        direction: Direction,
    ) -> Option<TaskMove> {
        let moved = drag::keyboard_move(&mut self.store, task_id, column_id, direction)?;
        self.events
            .on_task_move(&moved.task_id, &moved.from, &moved.to, moved.index);
        Some(moved)
    }

    // =========================================================================
    // Modal CRUD
    // =========================================================================

    /// Open the modal to create a task in `column`
    pub fn open_create(&mut self, column: ColumnId) {
        self.dialog.open_create(column);
    }

    /// Open the modal to edit an existing task. Returns false when the
    /// task is unknown.
    pub fn open_edit(&mut self, task_id: &TaskId) -> bool {
        match self.store.tasks().get(task_id) {
            Some(task) => {
                self.dialog.open_edit(task.clone());
                true
            }
            None => {
                debug!(task = %task_id, "edit requested for unknown task");
                false
            }
        }
    }

    /// Close the modal without saving
    pub fn close_dialog(&mut self) {
        self.dialog.close();
    }

    /// Save the modal form.
    ///
    /// Creating: a new task is minted in the dialog's column, appended
    /// to its membership list, and reported via `on_task_create`.
    /// Editing: the form merges into the existing record (never its id
    /// or column) and `on_task_update` fires. Either path closes the
    /// modal on success; a save with no open dialog does nothing.
    pub fn save(&mut self, draft: TaskDraft) -> Result<Option<Task>> {
        match self.dialog.clone() {
            TaskDialog::Closed => {
                debug!("save with no open dialog");
                Ok(None)
            }
            TaskDialog::Creating { column } => {
                let task = draft.into_task(column.clone());
                let id = task.id.clone();
                self.store.try_commit(|board| board.insert_task(&column, task))?;

                let saved = self.store.tasks().get(&id).cloned();
                if let Some(task) = &saved {
                    self.events.on_task_create(&column, task);
                }
                self.dialog.close();
                Ok(saved)
            }
            TaskDialog::Editing { task } => {
                let id = task.id.clone();
                self.store.try_commit(|board| board.apply_draft(&id, &draft))?;

                self.events.on_task_update(&id, &draft);
                self.dialog.close();
                Ok(self.store.tasks().get(&id).cloned())
            }
        }
    }

    // =========================================================================
    // Delete flow
    // =========================================================================

    /// Hold a task as the deletion candidate and open the confirmation
    /// prompt. Returns false when the task is unknown.
    pub fn request_delete(&mut self, task_id: &TaskId) -> bool {
        match self.store.tasks().get(task_id) {
            Some(task) => {
                self.delete_prompt.request(task.clone());
                true
            }
            None => {
                debug!(task = %task_id, "delete requested for unknown task");
                false
            }
        }
    }

    /// Confirm the deletion: the task leaves the map and whichever
    /// column lists it, `on_task_delete` fires once, and the prompt
    /// closes.
    pub fn confirm_delete(&mut self, task_id: &TaskId) -> Option<Task> {
        let removed = self.store.commit(|board| board.remove_task(task_id));
        if removed.is_some() {
            self.events.on_task_delete(task_id);
        }
        self.delete_prompt.cancel();
        removed
    }

    /// Dismiss the confirmation prompt without deleting
    pub fn cancel_delete(&mut self) {
        self.delete_prompt.cancel();
    }
}
