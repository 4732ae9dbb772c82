//! Headless kanban board engine
//!
//! This crate implements the state core of a kanban task-board widget:
//! columns holding ordered tasks, drag-and-drop and keyboard
//! reordering/movement between columns, modal-driven task CRUD, and
//! local persistence. Rendering is left entirely to the embedding
//! application; the engine exposes the state a view consumes and the
//! handlers a view calls.
//!
//! ## Overview
//!
//! - **One aggregate, two slices** - Columns keep ordered task-id lists,
//!   tasks live in a flat map; every operation updates both
//!   transactionally so they cannot drift apart
//! - **Gesture state stays ephemeral** - The drag session lives only
//!   between drag-start and drop, and is never persisted
//! - **Pluggable persistence** - Board state round-trips through a
//!   localStorage-shaped key-value adapter; corrupt snapshots fall back
//!   to the host-supplied initial data
//! - **Host callbacks** - Moves, creates, updates, deletes, and
//!   capacity rejections are reported through [`BoardEvents`]
//!
//! ## Basic Usage
//!
//! ```rust
//! use kanban_board::{defaults, KanbanBoard, MemoryStorage, TaskDraft};
//! use std::collections::HashMap;
//!
//! # fn main() -> kanban_board::Result<()> {
//! let mut board = KanbanBoard::new(
//!     defaults::default_columns(),
//!     HashMap::new(),
//!     Box::new(MemoryStorage::new()),
//! );
//!
//! // Create a task through the modal flow
//! board.open_create("todo".into());
//! let task = board.save(TaskDraft::new("Write the report"))?.unwrap();
//!
//! // Drag it into another column
//! board.begin_drag(task.id.clone(), "todo".into());
//! board.drag_over(&"inprogress".into(), 0);
//! board.drop_on(&"inprogress".into())?;
//!
//! assert_eq!(board.tasks_in(&"inprogress".into()).len(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! ## Persisted layout
//!
//! Two independent JSON slots, written after every committed change:
//!
//! ```text
//! kanban_columns   # array of column records (ordered, with taskIds)
//! kanban_tasks     # map of task-id -> task record
//! ```
//!
//! Date fields (`createdAt`, `dueDate`) serialize as ISO-8601 strings
//! and are reconstructed as date values on load. A missing or
//! malformed slot is treated as absent and the initial data stands.

pub mod defaults;
mod dialog;
mod drag;
mod error;
mod events;
mod storage;
mod store;
pub mod types;
mod widget;

pub use dialog::{DeletePrompt, TaskDialog};
pub use drag::{keyboard_move, DragSession, DragTracker, TaskMove};
pub use error::{BoardError, Result};
pub use events::{BoardEvents, NullEvents};
pub use storage::{FileStorage, MemoryStorage, StorageAdapter, COLUMNS_KEY, TASKS_KEY};
pub use store::BoardStore;
pub use widget::KanbanBoard;

#[cfg(any(test, feature = "test-support"))]
pub use events::{EventRecord, RecordingEvents};

// Re-export commonly used types
pub use types::{Board, Column, ColumnId, Direction, Priority, Task, TaskDraft, TaskId};
