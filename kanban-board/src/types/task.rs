//! Task types: Task, Priority, TaskDraft

use super::ids::{ColumnId, TaskId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Task priority level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl Priority {
    /// The lowercase name used in serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }
}

/// A task/card on the kanban board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The id of the column that currently lists this task.
    /// Invariant: equal to the id of the one column whose `task_ids`
    /// contains this task's id.
    pub status: ColumnId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,

    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
}

impl Task {
    /// Create a new task in the given column, stamped with the current time
    pub fn new(title: impl Into<String>, status: ColumnId) -> Self {
        Self {
            id: TaskId::new(),
            title: title.into(),
            description: None,
            status,
            priority: None,
            assignee: None,
            tags: Vec::new(),
            created_at: Utc::now(),
            due_date: None,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Set the assignee
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    /// Set the tags
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Set the due date
    pub fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Check whether the task's due date has passed as of `now`
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.due_date.is_some_and(|due| now > due)
    }

    /// Uppercased initials of the assignee, at most two characters
    pub fn assignee_initials(&self) -> Option<String> {
        let name = self.assignee.as_deref()?;
        let initials: String = name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(|c| c.to_uppercase())
            .take(2)
            .collect();
        (!initials.is_empty()).then_some(initials)
    }
}

/// The modal form payload: everything a task dialog collects.
///
/// Used both to create a task and to save edits. On edit, the form-managed
/// fields (title, description, priority, tags, due date) replace the task's
/// current values wholesale; the form was initialized from the task, so an
/// untouched field round-trips. `assignee` is not form-managed and is only
/// applied when set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
}

impl TaskDraft {
    /// Create a draft with the given title.
    ///
    /// Title validation (non-empty) is the dialog collaborator's job;
    /// the engine accepts whatever it is handed.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Set the assignee
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    /// Set the tags
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Set the due date
    pub fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Build a new task from this draft, minting an id and stamping
    /// `created_at` with the current time
    pub fn into_task(self, status: ColumnId) -> Task {
        Task {
            id: TaskId::new(),
            title: self.title,
            description: self.description,
            status,
            priority: self.priority,
            assignee: self.assignee,
            tags: self.tags,
            created_at: Utc::now(),
            due_date: self.due_date,
        }
    }

    /// Merge this draft into an existing task.
    ///
    /// Identity and column membership (`id`, `status`, `created_at`) are
    /// never touched by this path.
    pub fn apply_to(&self, task: &mut Task) {
        task.title = self.title.clone();
        task.description = self.description.clone();
        task.priority = self.priority;
        task.tags = self.tags.clone();
        task.due_date = self.due_date;
        if let Some(assignee) = &self.assignee {
            task.assignee = Some(assignee.clone());
        }
    }
}
