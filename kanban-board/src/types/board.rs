//! The board aggregate: ordered columns plus a flat task map.
//!
//! Every mutating operation below is transactional over the whole
//! aggregate: it validates first, then updates both the membership
//! lists and the task map from the same snapshot, so the two
//! denormalized slices can never tear.

use super::column::Column;
use super::ids::{ColumnId, TaskId};
use super::task::{Task, TaskDraft};
use crate::error::{BoardError, Result};
use std::collections::HashMap;

/// Direction of a keyboard-driven move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// The whole board: column order is presentation-significant, tasks are
/// keyed by id.
#[derive(Debug, Clone, Default)]
pub struct Board {
    pub columns: Vec<Column>,
    pub tasks: HashMap<TaskId, Task>,
}

impl Board {
    /// Assemble a board from externally supplied columns and tasks
    pub fn new(columns: Vec<Column>, tasks: HashMap<TaskId, Task>) -> Self {
        Self { columns, tasks }
    }

    /// Find a column by id
    pub fn find_column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| &c.id == id)
    }

    /// Find a column by id (mutable)
    pub fn find_column_mut(&mut self, id: &ColumnId) -> Option<&mut Column> {
        self.columns.iter_mut().find(|c| &c.id == id)
    }

    /// Position of a column in board order
    pub fn column_index(&self, id: &ColumnId) -> Option<usize> {
        self.columns.iter().position(|c| &c.id == id)
    }

    /// The column whose membership list contains the given task
    pub fn column_of_task(&self, task_id: &TaskId) -> Option<&Column> {
        self.columns.iter().find(|c| c.contains(task_id))
    }

    /// Tasks of a column in display order.
    ///
    /// Ids with no entry in the task map are filtered out here rather
    /// than treated as an error; no operation below may introduce one.
    pub fn tasks_in(&self, column_id: &ColumnId) -> Vec<&Task> {
        self.find_column(column_id)
            .map(|col| {
                col.task_ids
                    .iter()
                    .filter_map(|id| self.tasks.get(id))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Reorder a task within its column: remove, then re-insert at
    /// `index` (append at the end when unset). Returns the final
    /// position.
    pub fn reorder_task(
        &mut self,
        task_id: &TaskId,
        column_id: &ColumnId,
        index: Option<usize>,
    ) -> Result<usize> {
        let col = self
            .find_column_mut(column_id)
            .ok_or_else(|| BoardError::column_not_found(column_id))?;
        col.remove_task(task_id)
            .ok_or_else(|| BoardError::task_not_found(task_id))?;
        let target = index.unwrap_or(col.task_ids.len());
        Ok(col.insert_task_at(task_id.clone(), target))
    }

    /// Move a task to a different column, inserting at `index` (append
    /// at the end when unset) and rewriting its `status`. Returns the
    /// final position in the destination.
    ///
    /// Capacity is about net membership, so the check only applies when
    /// the destination is a different column; a same-column call
    /// degenerates to [`Self::reorder_task`].
    pub fn transfer_task(
        &mut self,
        task_id: &TaskId,
        from: &ColumnId,
        to: &ColumnId,
        index: Option<usize>,
    ) -> Result<usize> {
        if from == to {
            return self.reorder_task(task_id, to, index);
        }

        let from_idx = self
            .column_index(from)
            .ok_or_else(|| BoardError::column_not_found(from))?;
        let to_idx = self
            .column_index(to)
            .ok_or_else(|| BoardError::column_not_found(to))?;

        let target = &self.columns[to_idx];
        if target.is_full() {
            return Err(BoardError::column_full(target));
        }
        if !self.tasks.contains_key(task_id) || !self.columns[from_idx].contains(task_id) {
            return Err(BoardError::task_not_found(task_id));
        }

        // Validated: both slices now mutate from the snapshot above.
        self.columns[from_idx].remove_task(task_id);
        let insert_at = index.unwrap_or(self.columns[to_idx].task_ids.len());
        let final_index = self.columns[to_idx].insert_task_at(task_id.clone(), insert_at);
        if let Some(task) = self.tasks.get_mut(task_id) {
            task.status = to.clone();
        }
        Ok(final_index)
    }

    /// Keyboard-driven move: Up/Down swap with the immediate neighbor,
    /// Left/Right append to the adjacent column in board order and
    /// rewrite `status`.
    ///
    /// Returns `(from, to, new_index)` for a completed move, `None` for
    /// a boundary or unresolvable input. Adjacent-column moves carry no
    /// capacity check.
    pub fn shift_task(
        &mut self,
        task_id: &TaskId,
        column_id: &ColumnId,
        direction: Direction,
    ) -> Option<(ColumnId, ColumnId, usize)> {
        let col_idx = self.column_index(column_id)?;
        let pos = self.columns[col_idx].position_of(task_id)?;

        match direction {
            Direction::Up => {
                if pos == 0 {
                    return None;
                }
                self.columns[col_idx].task_ids.swap(pos - 1, pos);
                Some((column_id.clone(), column_id.clone(), pos - 1))
            }
            Direction::Down => {
                if pos + 1 >= self.columns[col_idx].task_ids.len() {
                    return None;
                }
                self.columns[col_idx].task_ids.swap(pos, pos + 1);
                Some((column_id.clone(), column_id.clone(), pos + 1))
            }
            Direction::Left => {
                let dest_idx = col_idx.checked_sub(1)?;
                self.shift_to_adjacent(task_id, col_idx, dest_idx)
            }
            Direction::Right => {
                let dest_idx = col_idx + 1;
                if dest_idx >= self.columns.len() {
                    return None;
                }
                self.shift_to_adjacent(task_id, col_idx, dest_idx)
            }
        }
    }

    fn shift_to_adjacent(
        &mut self,
        task_id: &TaskId,
        from_idx: usize,
        to_idx: usize,
    ) -> Option<(ColumnId, ColumnId, usize)> {
        // The status rewrite needs a live task record; a dangling id
        // stays where it is.
        if !self.tasks.contains_key(task_id) {
            return None;
        }
        let from = self.columns[from_idx].id.clone();
        let to = self.columns[to_idx].id.clone();

        self.columns[from_idx].remove_task(task_id);
        self.columns[to_idx].task_ids.push(task_id.clone());
        let new_index = self.columns[to_idx].task_ids.len() - 1;
        if let Some(task) = self.tasks.get_mut(task_id) {
            task.status = to.clone();
        }
        Some((from, to, new_index))
    }

    /// Add a new task to a column, appending its id to the membership
    /// list. The task's `status` is forced to the column id.
    pub fn insert_task(&mut self, column_id: &ColumnId, mut task: Task) -> Result<()> {
        let col = self
            .find_column(column_id)
            .ok_or_else(|| BoardError::column_not_found(column_id))?;
        if col.is_full() {
            return Err(BoardError::column_full(col));
        }
        if self.tasks.contains_key(&task.id) {
            return Err(BoardError::duplicate_task(&task.id));
        }

        task.status = column_id.clone();
        let id = task.id.clone();
        self.tasks.insert(id.clone(), task);
        if let Some(col) = self.find_column_mut(column_id) {
            col.task_ids.push(id);
        }
        Ok(())
    }

    /// Remove a task from the map and from whichever column lists it.
    /// Also drops the id from membership lists when the map entry is
    /// already gone.
    pub fn remove_task(&mut self, task_id: &TaskId) -> Option<Task> {
        for col in &mut self.columns {
            col.remove_task(task_id);
        }
        self.tasks.remove(task_id)
    }

    /// Merge a dialog draft into an existing task record
    pub fn apply_draft(&mut self, task_id: &TaskId, draft: &TaskDraft) -> Result<()> {
        let task = self
            .tasks
            .get_mut(task_id)
            .ok_or_else(|| BoardError::task_not_found(task_id))?;
        draft.apply_to(task);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        let columns = vec![
            Column::new("todo", "To Do", "#e57373").with_task_ids(vec![
                TaskId::from_string("a"),
                TaskId::from_string("b"),
                TaskId::from_string("c"),
            ]),
            Column::new("done", "Done", "#64b5f6").with_max_tasks(5),
        ];
        let tasks = ["a", "b", "c"]
            .iter()
            .map(|id| {
                let mut task = Task::new(format!("Task {id}"), ColumnId::from_string("todo"));
                task.id = TaskId::from_string(*id);
                (task.id.clone(), task)
            })
            .collect();
        Board::new(columns, tasks)
    }

    fn ids(board: &Board, column: &str) -> Vec<String> {
        board
            .find_column(&ColumnId::from_string(column))
            .unwrap()
            .task_ids
            .iter()
            .map(|id| id.as_str().to_string())
            .collect()
    }

    #[test]
    fn test_same_column_reorder() {
        let mut board = board();
        let index = board
            .reorder_task(
                &TaskId::from_string("b"),
                &ColumnId::from_string("todo"),
                Some(0),
            )
            .unwrap();

        assert_eq!(index, 0);
        assert_eq!(ids(&board, "todo"), ["b", "a", "c"]);
    }

    #[test]
    fn test_reorder_without_index_appends() {
        let mut board = board();
        let index = board
            .reorder_task(&TaskId::from_string("a"), &ColumnId::from_string("todo"), None)
            .unwrap();

        assert_eq!(index, 2);
        assert_eq!(ids(&board, "todo"), ["b", "c", "a"]);
    }

    #[test]
    fn test_reorder_clamps_index() {
        let mut board = board();
        let index = board
            .reorder_task(
                &TaskId::from_string("a"),
                &ColumnId::from_string("todo"),
                Some(99),
            )
            .unwrap();
        assert_eq!(index, 2);
    }

    #[test]
    fn test_cross_column_transfer_updates_status() {
        let mut board = board();
        let index = board
            .transfer_task(
                &TaskId::from_string("a"),
                &ColumnId::from_string("todo"),
                &ColumnId::from_string("done"),
                Some(0),
            )
            .unwrap();

        assert_eq!(index, 0);
        assert_eq!(ids(&board, "todo"), ["b", "c"]);
        assert_eq!(ids(&board, "done"), ["a"]);
        assert_eq!(
            board.tasks[&TaskId::from_string("a")].status.as_str(),
            "done"
        );
    }

    #[test]
    fn test_transfer_into_full_column_rejected_without_mutation() {
        let mut board = board();
        board.find_column_mut(&ColumnId::from_string("done")).unwrap().max_tasks = Some(0);

        let err = board
            .transfer_task(
                &TaskId::from_string("a"),
                &ColumnId::from_string("todo"),
                &ColumnId::from_string("done"),
                None,
            )
            .unwrap_err();

        assert!(matches!(err, BoardError::ColumnFull { .. }));
        assert_eq!(ids(&board, "todo"), ["a", "b", "c"]);
        assert_eq!(ids(&board, "done"), Vec::<String>::new());
        assert_eq!(
            board.tasks[&TaskId::from_string("a")].status.as_str(),
            "todo"
        );
    }

    #[test]
    fn test_same_column_transfer_skips_capacity() {
        // Capacity bounds net membership; a reorder cannot change it.
        let mut board = board();
        board.find_column_mut(&ColumnId::from_string("todo")).unwrap().max_tasks = Some(3);

        let index = board
            .transfer_task(
                &TaskId::from_string("c"),
                &ColumnId::from_string("todo"),
                &ColumnId::from_string("todo"),
                Some(0),
            )
            .unwrap();

        assert_eq!(index, 0);
        assert_eq!(ids(&board, "todo"), ["c", "a", "b"]);
    }

    #[test]
    fn test_shift_up_boundary_noop() {
        let mut board = board();
        let moved = board.shift_task(
            &TaskId::from_string("a"),
            &ColumnId::from_string("todo"),
            Direction::Up,
        );
        assert!(moved.is_none());
        assert_eq!(ids(&board, "todo"), ["a", "b", "c"]);
    }

    #[test]
    fn test_shift_up_swaps_neighbors() {
        let mut board = board();
        let (from, to, index) = board
            .shift_task(
                &TaskId::from_string("b"),
                &ColumnId::from_string("todo"),
                Direction::Up,
            )
            .unwrap();

        assert_eq!(from.as_str(), "todo");
        assert_eq!(to.as_str(), "todo");
        assert_eq!(index, 0);
        assert_eq!(ids(&board, "todo"), ["b", "a", "c"]);
    }

    #[test]
    fn test_shift_left_boundary_noop() {
        let mut board = board();
        let moved = board.shift_task(
            &TaskId::from_string("a"),
            &ColumnId::from_string("todo"),
            Direction::Left,
        );
        assert!(moved.is_none());
    }

    #[test]
    fn test_shift_right_appends_and_restatuses() {
        let mut board = board();
        let (from, to, index) = board
            .shift_task(
                &TaskId::from_string("b"),
                &ColumnId::from_string("todo"),
                Direction::Right,
            )
            .unwrap();

        assert_eq!(from.as_str(), "todo");
        assert_eq!(to.as_str(), "done");
        assert_eq!(index, 0);
        assert_eq!(ids(&board, "done"), ["b"]);
        assert_eq!(
            board.tasks[&TaskId::from_string("b")].status.as_str(),
            "done"
        );
    }

    #[test]
    fn test_shift_right_ignores_capacity() {
        let mut board = board();
        board.find_column_mut(&ColumnId::from_string("done")).unwrap().max_tasks = Some(0);

        let moved = board.shift_task(
            &TaskId::from_string("a"),
            &ColumnId::from_string("todo"),
            Direction::Right,
        );
        assert!(moved.is_some());
        assert_eq!(ids(&board, "done"), ["a"]);
    }

    #[test]
    fn test_insert_task_appends_and_forces_status() {
        let mut board = board();
        let task = Task::new("New", ColumnId::from_string("somewhere-else"));
        let id = task.id.clone();

        board.insert_task(&ColumnId::from_string("done"), task).unwrap();

        assert_eq!(board.tasks[&id].status.as_str(), "done");
        assert!(board
            .find_column(&ColumnId::from_string("done"))
            .unwrap()
            .contains(&id));
    }

    #[test]
    fn test_insert_duplicate_rejected() {
        let mut board = board();
        let mut task = Task::new("Dup", ColumnId::from_string("done"));
        task.id = TaskId::from_string("a");

        let err = board
            .insert_task(&ColumnId::from_string("done"), task)
            .unwrap_err();
        assert!(matches!(err, BoardError::DuplicateTask { .. }));
    }

    #[test]
    fn test_insert_into_full_column_rejected() {
        let mut board = board();
        board.find_column_mut(&ColumnId::from_string("done")).unwrap().max_tasks = Some(0);

        let err = board
            .insert_task(&ColumnId::from_string("done"), Task::new("New", ColumnId::from_string("done")))
            .unwrap_err();
        assert!(matches!(err, BoardError::ColumnFull { .. }));
    }

    #[test]
    fn test_remove_task_clears_both_slices() {
        let mut board = board();
        let removed = board.remove_task(&TaskId::from_string("b")).unwrap();

        assert_eq!(removed.id.as_str(), "b");
        assert_eq!(ids(&board, "todo"), ["a", "c"]);
        assert!(!board.tasks.contains_key(&TaskId::from_string("b")));
    }

    #[test]
    fn test_tasks_in_filters_dangling_ids() {
        let mut board = board();
        board
            .find_column_mut(&ColumnId::from_string("todo"))
            .unwrap()
            .task_ids
            .push(TaskId::from_string("ghost"));

        let titles: Vec<_> = board
            .tasks_in(&ColumnId::from_string("todo"))
            .iter()
            .map(|t| t.id.as_str().to_string())
            .collect();
        assert_eq!(titles, ["a", "b", "c"]);

        // Filtering is read-only; the dangling id stays in the list
        assert_eq!(ids(&board, "todo"), ["a", "b", "c", "ghost"]);
    }

    #[test]
    fn test_membership_unique_across_columns_after_moves() {
        let mut board = board();
        board
            .transfer_task(
                &TaskId::from_string("a"),
                &ColumnId::from_string("todo"),
                &ColumnId::from_string("done"),
                None,
            )
            .unwrap();
        board
            .transfer_task(
                &TaskId::from_string("a"),
                &ColumnId::from_string("done"),
                &ColumnId::from_string("todo"),
                Some(1),
            )
            .unwrap();

        let mut seen = std::collections::HashSet::new();
        for col in &board.columns {
            for id in &col.task_ids {
                assert!(seen.insert(id.clone()), "duplicate id {id}");
            }
        }
    }
}
