use super::column::Column;
use super::task::{Task, TaskStatus};
use crate::config::SameColumnMove;
use std::collections::HashMap;
use tokio::sync::broadcast;
use tracing::debug;

/// Buffered change notifications per subscriber before lagging
const EVENT_CAPACITY: usize = 64;

/// Change notification sent to board subscribers after each mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardEvent {
    /// A task changed column (or was re-appended to its own column)
    TaskMoved {
        task_id: String,
        from: TaskStatus,
        to: TaskStatus,
    },
    /// A task was inserted through `add_task`
    TaskAdded { task_id: String, column: TaskStatus },
}

/// Why a move left the board untouched
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column '{0}' does not exist")]
    UnknownColumn(String),
    #[error("task '{task_id}' is not in column '{column}'")]
    TaskNotFound { task_id: String, column: TaskStatus },
}

/// What a successful move did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Task now lives at the end of another column
    Moved,
    /// Source and destination were the same; task re-appended to the end
    Reordered,
    /// Source and destination were the same and the policy ignores that
    Unchanged,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddTaskError {
    #[error("task id '{0}' already exists")]
    DuplicateId(String),
    #[error("column '{0}' does not exist")]
    UnknownColumn(TaskStatus),
    #[error("no numeric task ids left above {0}")]
    IdsExhausted(u64),
}

/// Seed data that would break board invariants
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeedError {
    #[error("column '{0}' appears more than once")]
    DuplicateColumn(TaskStatus),
    #[error("task id '{0}' appears more than once")]
    DuplicateTask(String),
}

/// Authoritative in-memory board state
///
/// Columns are kept in display order and each holds its tasks in display
/// order. Every mutation goes through this type so the invariants hold:
/// a task lives in exactly one column, its `status` equals that column's
/// id, and task and column ids are unique.
#[derive(Debug)]
pub struct Board {
    /// Columns in display order
    pub(crate) columns: Vec<Column>,

    /// Task id -> containing column, for O(1) duplicate detection and lookup
    ///
    /// Kept in sync by `from_columns`, `add_task` and `try_move_task`.
    pub(crate) task_map: HashMap<String, TaskStatus>,

    /// Highest numeric task id handed out or seen; ids are never reused
    pub(crate) task_counter: u64,

    same_column: SameColumnMove,
    events: broadcast::Sender<BoardEvent>,
}

impl Default for Board {
    fn default() -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            columns: Vec::new(),
            task_map: HashMap::new(),
            task_counter: 0,
            same_column: SameColumnMove::default(),
            events,
        }
    }
}

impl Board {
    /// Create a board with no columns
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a board with one empty column per status, in workflow order
    pub fn with_default_columns() -> Self {
        let mut board = Self::new();
        board.columns = TaskStatus::ALL.into_iter().map(Column::new).collect();
        board
    }

    /// Build a board from seed columns
    ///
    /// Each task's status is overwritten with the id of the column it was
    /// seeded into. Duplicate column ids or task ids are rejected.
    pub fn from_columns(columns: Vec<Column>) -> Result<Self, SeedError> {
        let mut board = Self::new();
        for mut column in columns {
            if board.column_index(column.id).is_some() {
                return Err(SeedError::DuplicateColumn(column.id));
            }
            for task in &mut column.tasks {
                if board.task_map.contains_key(&task.id) {
                    return Err(SeedError::DuplicateTask(task.id.clone()));
                }
                task.status = column.id;
                board.task_map.insert(task.id.clone(), column.id);
                board.observe_id(&task.id);
            }
            board.columns.push(column);
        }
        Ok(board)
    }

    /// Set how a move into the task's own column behaves
    pub fn with_same_column_policy(mut self, policy: SameColumnMove) -> Self {
        self.same_column = policy;
        self
    }

    pub fn same_column_policy(&self) -> SameColumnMove {
        self.same_column
    }

    /// Highest numeric task id handed out or seen so far
    pub fn task_counter(&self) -> u64 {
        self.task_counter
    }

    /// Receive a `BoardEvent` for every subsequent mutation
    pub fn subscribe(&self) -> broadcast::Receiver<BoardEvent> {
        self.events.subscribe()
    }

    /// Columns in display order (read-only view)
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Owned copy of the current columns for consumers that outlive the lock
    pub fn snapshot(&self) -> Vec<Column> {
        self.columns.clone()
    }

    /// Look up a column by its string id
    pub fn column(&self, column_id: &str) -> Option<&Column> {
        let status = column_id.parse::<TaskStatus>().ok()?;
        self.column_index(status).map(|idx| &self.columns[idx])
    }

    /// Find a task anywhere on the board
    pub fn find_task(&self, task_id: &str) -> Option<&Task> {
        let status = self.task_map.get(task_id)?;
        let column = &self.columns[self.column_index(*status)?];
        column.tasks.iter().find(|t| t.id == task_id)
    }

    /// Total number of tasks across all columns
    pub fn total_task_count(&self) -> usize {
        self.columns.iter().map(Column::len).sum()
    }

    /// Number of tasks in the named column, `None` if the column is absent
    pub fn count_by_column(&self, column_id: &str) -> Option<usize> {
        self.column(column_id).map(Column::len)
    }

    /// Move a task between columns, silently ignoring invalid requests
    ///
    /// Unknown task or column ids leave the board untouched. See
    /// `try_move_task` for the variant that reports the reason.
    pub fn move_task(&mut self, task_id: &str, from_column_id: &str, to_column_id: &str) {
        if let Err(e) = self.try_move_task(task_id, from_column_id, to_column_id) {
            debug!(task_id, from = from_column_id, to = to_column_id, error = %e, "move ignored");
        }
    }

    /// Move a task from one column to the end of another
    ///
    /// All lookups happen before anything is mutated, so a failed call
    /// never leaves the task detached. The destination limit is not checked.
    pub fn try_move_task(
        &mut self,
        task_id: &str,
        from_column_id: &str,
        to_column_id: &str,
    ) -> Result<MoveOutcome, MoveError> {
        let from_idx = self.resolve_column(from_column_id)?;
        let to_idx = self.resolve_column(to_column_id)?;
        let from = self.columns[from_idx].id;
        let to = self.columns[to_idx].id;

        let pos = self.columns[from_idx]
            .position_of(task_id)
            .ok_or_else(|| MoveError::TaskNotFound {
                task_id: task_id.to_string(),
                column: from,
            })?;

        let same_column = from_idx == to_idx;
        if same_column && self.same_column == SameColumnMove::Ignore {
            return Ok(MoveOutcome::Unchanged);
        }

        let mut task = self.columns[from_idx].tasks.remove(pos);
        task.status = to;
        self.columns[to_idx].tasks.push(task);
        self.task_map.insert(task_id.to_string(), to);

        let _ = self.events.send(BoardEvent::TaskMoved {
            task_id: task_id.to_string(),
            from,
            to,
        });

        Ok(if same_column {
            MoveOutcome::Reordered
        } else {
            MoveOutcome::Moved
        })
    }

    /// Append a task to the column named by its status
    ///
    /// Not wired to the create-task form; callers decide id and column.
    /// The column limit is not checked.
    pub fn add_task(&mut self, task: Task) -> Result<(), AddTaskError> {
        if self.task_map.contains_key(&task.id) {
            return Err(AddTaskError::DuplicateId(task.id));
        }
        let idx = self
            .column_index(task.status)
            .ok_or(AddTaskError::UnknownColumn(task.status))?;

        let task_id = task.id.clone();
        let column = task.status;
        self.observe_id(&task_id);
        self.task_map.insert(task_id.clone(), column);
        self.columns[idx].tasks.push(task);

        let _ = self.events.send(BoardEvent::TaskAdded { task_id, column });
        Ok(())
    }

    /// Generate a new numeric task id above every id seen so far
    ///
    /// Fails once the counter reaches `u64::MAX`; seed files may carry ids
    /// that large.
    pub fn generate_task_id(&mut self) -> Result<String, AddTaskError> {
        loop {
            self.task_counter = self
                .task_counter
                .checked_add(1)
                .ok_or(AddTaskError::IdsExhausted(self.task_counter))?;
            let id = self.task_counter.to_string();
            if !self.task_map.contains_key(&id) {
                return Ok(id);
            }
        }
    }

    fn column_index(&self, id: TaskStatus) -> Option<usize> {
        self.columns.iter().position(|c| c.id == id)
    }

    fn resolve_column(&self, column_id: &str) -> Result<usize, MoveError> {
        column_id
            .parse::<TaskStatus>()
            .ok()
            .and_then(|status| self.column_index(status))
            .ok_or_else(|| MoveError::UnknownColumn(column_id.to_string()))
    }

    fn observe_id(&mut self, task_id: &str) {
        if let Ok(n) = task_id.parse::<u64>() {
            self.task_counter = self.task_counter.max(n);
        }
    }
}
