use super::task::{Task, TaskStatus};
use serde::{Deserialize, Serialize};

/// A board column holding tasks of one status, in display order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Column identifier, equal to the status of every task it holds
    pub id: TaskStatus,
    /// Display label
    pub title: String,
    /// Advisory maximum task count, never enforced by the board
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
    /// Tasks in display order; inserts append
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Column {
    /// Create an empty column titled after its status
    pub fn new(id: TaskStatus) -> Self {
        Self {
            id,
            title: id.title().to_string(),
            limit: None,
            tasks: Vec::new(),
        }
    }

    /// Builder-style limit setter
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// True when a limit is set and the column holds at least that many tasks
    pub fn is_at_limit(&self) -> bool {
        self.limit.is_some_and(|limit| self.tasks.len() >= limit)
    }

    /// Slots left before the limit, `None` for unlimited columns
    pub fn remaining_capacity(&self) -> Option<usize> {
        self.limit.map(|limit| limit.saturating_sub(self.tasks.len()))
    }

    /// Position of the first task with the given id
    pub(crate) fn position_of(&self, task_id: &str) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == task_id)
    }
}
