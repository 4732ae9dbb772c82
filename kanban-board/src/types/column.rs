//! Column type: an ordered bucket of task ids

use super::ids::{ColumnId, TaskId};
use serde::{Deserialize, Serialize};

/// A column defines a workflow stage and owns the display order of its tasks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    /// Header color as a hex string (e.g. "#e57373")
    pub color: String,
    /// Ordered task membership. No id appears twice, here or in any
    /// other column.
    #[serde(default)]
    pub task_ids: Vec<TaskId>,
    /// Optional capacity, enforced at drop/insert time, never
    /// retroactively against an already-overfull list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tasks: Option<usize>,
}

impl Column {
    /// Create an empty column
    pub fn new(id: impl Into<ColumnId>, title: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            color: color.into(),
            task_ids: Vec::new(),
            max_tasks: None,
        }
    }

    /// Set the capacity
    pub fn with_max_tasks(mut self, max_tasks: usize) -> Self {
        self.max_tasks = Some(max_tasks);
        self
    }

    /// Seed the membership list
    pub fn with_task_ids(mut self, task_ids: Vec<TaskId>) -> Self {
        self.task_ids = task_ids;
        self
    }

    /// True when a capacity is set and the list has reached it
    pub fn is_full(&self) -> bool {
        self.max_tasks
            .is_some_and(|max| self.task_ids.len() >= max)
    }

    /// Whether this column lists the given task
    pub fn contains(&self, task_id: &TaskId) -> bool {
        self.task_ids.iter().any(|id| id == task_id)
    }

    /// Position of the given task in this column's order
    pub fn position_of(&self, task_id: &TaskId) -> Option<usize> {
        self.task_ids.iter().position(|id| id == task_id)
    }

    /// Remove the task from the membership list, returning its former
    /// position
    pub fn remove_task(&mut self, task_id: &TaskId) -> Option<usize> {
        let pos = self.position_of(task_id)?;
        self.task_ids.remove(pos);
        Some(pos)
    }

    /// Insert the task at `index`, clamped to `[0, len]`. Returns the
    /// actual insertion position.
    pub fn insert_task_at(&mut self, task_id: TaskId, index: usize) -> usize {
        let index = index.min(self.task_ids.len());
        self.task_ids.insert(index, task_id);
        index
    }
}
