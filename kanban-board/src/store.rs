//! The board state store: single source of truth for columns and tasks.
//!
//! Initial data comes from the embedding application; each persisted
//! slot, when present and well-formed, overrides the corresponding
//! initial collection. After that, every committed change writes both
//! slots back through the storage adapter as a fire-and-forget side
//! effect; persistence failures are logged, never raised.

use crate::error::Result;
use crate::storage::{StorageAdapter, COLUMNS_KEY, TASKS_KEY};
use crate::types::{Board, Column, Task, TaskId};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use tracing::warn;

/// Owns the authoritative board and the persistence side effect
pub struct BoardStore {
    board: Board,
    storage: Box<dyn StorageAdapter>,
}

impl BoardStore {
    /// Build a store from host-supplied initial data, rehydrating each
    /// slot from storage when a well-formed snapshot exists.
    ///
    /// A malformed slot is treated as absent: the initial data stands
    /// and the snapshot is discarded on the next write. Date fields
    /// come back as real date values; the serialized form is ISO-8601
    /// strings, and a slot whose dates fail to parse is malformed.
    pub fn new(
        initial_columns: Vec<Column>,
        initial_tasks: HashMap<TaskId, Task>,
        storage: Box<dyn StorageAdapter>,
    ) -> Self {
        let columns = load_slot(&*storage, COLUMNS_KEY).unwrap_or(initial_columns);
        let tasks = load_slot(&*storage, TASKS_KEY).unwrap_or(initial_tasks);
        Self {
            board: Board::new(columns, tasks),
            storage,
        }
    }

    /// The current board snapshot
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The current column list
    pub fn columns(&self) -> &[Column] {
        &self.board.columns
    }

    /// The current task map
    pub fn tasks(&self) -> &HashMap<TaskId, Task> {
        &self.board.tasks
    }

    /// Replace the column list with a literal new snapshot
    pub fn set_columns(&mut self, next: Vec<Column>) {
        self.board.columns = next;
        self.persist();
    }

    /// Replace the task map with a literal new snapshot
    pub fn set_tasks(&mut self, next: HashMap<TaskId, Task>) {
        self.board.tasks = next;
        self.persist();
    }

    /// Update the column list as a function of its previous state
    pub fn update_columns(&mut self, f: impl FnOnce(&mut Vec<Column>)) {
        f(&mut self.board.columns);
        self.persist();
    }

    /// Update the task map as a function of its previous state
    pub fn update_tasks(&mut self, f: impl FnOnce(&mut HashMap<TaskId, Task>)) {
        f(&mut self.board.tasks);
        self.persist();
    }

    /// Run a transaction over the whole aggregate and persist the
    /// result. Operations touching both slices go through here so both
    /// update from the same pre-transition snapshot.
    pub fn commit<R>(&mut self, f: impl FnOnce(&mut Board) -> R) -> R {
        let result = f(&mut self.board);
        self.persist();
        result
    }

    /// Like [`Self::commit`], but only persists when the transaction
    /// succeeds. Transitions validate before mutating, so an `Err`
    /// leaves the board untouched and there is nothing to write.
    pub fn try_commit<T>(&mut self, f: impl FnOnce(&mut Board) -> Result<T>) -> Result<T> {
        let result = f(&mut self.board)?;
        self.persist();
        Ok(result)
    }

    fn persist(&self) {
        self.save_slot(COLUMNS_KEY, &self.board.columns);
        self.save_slot(TASKS_KEY, &self.board.tasks);
    }

    fn save_slot<T: Serialize>(&self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(json) => {
                if let Err(e) = self.storage.save(key, &json) {
                    warn!(key, error = %e, "failed to persist board slot");
                }
            }
            Err(e) => warn!(key, error = %e, "failed to serialize board slot"),
        }
    }
}

fn load_slot<T: DeserializeOwned>(storage: &dyn StorageAdapter, key: &str) -> Option<T> {
    let raw = storage.load(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(key, error = %e, "discarding malformed persisted slot");
            None
        }
    }
}
