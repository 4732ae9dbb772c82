//! Built-in column set for boards that start without host-supplied data

use crate::types::Column;

/// The default four-stage workflow, each column capped at five tasks
pub fn default_columns() -> Vec<Column> {
    vec![
        Column::new("todo", "To Do", "#e57373").with_max_tasks(5),
        Column::new("inprogress", "In Progress", "#fbc02d").with_max_tasks(5),
        Column::new("review", "Review", "#81c784").with_max_tasks(5),
        Column::new("done", "Done", "#64b5f6").with_max_tasks(5),
    ]
}
