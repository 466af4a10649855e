//! Task Board MCP Server Library
//!
//! This library provides a Model Context Protocol (MCP) server around an
//! in-memory kanban board: columns (`todo`, `in-progress`, `review`, `done`)
//! holding ordered task cards.
//!
//! # Architecture
//!
//! - **MCP Layer**: `BoardServerHandler` - tool surface; turns drag/drop
//!   intents into board moves and drives the forms
//! - **Domain Layer**: `board` module - the `Board` state store and its data model
//! - **Forms**: `forms` module - create-task and invite validation (results are logged only)
//! - **Seeding**: `seed` module - built-in fixture board or a read-only TOML seed file
//!
//! # Example
//!
//! ```
//! use taskboard_mcp::board::fixtures;
//!
//! let mut board = fixtures::sample_board();
//! board.move_task("1", "todo", "done");
//! assert_eq!(board.count_by_column("done"), Some(3));
//! assert_eq!(board.total_task_count(), 8);
//! ```

pub mod board;
pub mod config;
pub mod dnd;
pub mod formatting;
pub mod forms;
mod handlers;
pub mod seed;
pub mod validation;

use anyhow::Result;
use mcp_attr::Result as McpResult;
use mcp_attr::server::{McpServer, mcp_server};
use tokio::sync::{Mutex, broadcast};
use tracing::info;

pub use board::{Board, BoardEvent, Column, Priority, Task, TaskStatus};
pub use config::{BoardConfig, SameColumnMove};
pub use seed::Seed;

/// MCP Server handler for the task board
///
/// Owns the board state for the lifetime of the process. Nothing is
/// persisted: the board is seeded at construction and dropped on exit.
pub struct BoardServerHandler {
    pub(crate) board: Mutex<Board>,
    pub(crate) team: Vec<board::fixtures::TeamMember>,
    pub(crate) config: BoardConfig,
}

impl BoardServerHandler {
    /// Create a handler, seeding the board from `config.seed` or the built-in fixtures
    pub fn new(config: BoardConfig) -> Result<Self> {
        let board = Seed::new(config.seed.as_ref()).load()?;
        Ok(Self::with_board(board, config))
    }

    /// Create a handler around an existing board
    pub fn with_board(board: Board, config: BoardConfig) -> Self {
        let board = board.with_same_column_policy(config.same_column);
        info!(
            tasks = board.total_task_count(),
            same_column = ?config.same_column,
            "board ready"
        );
        Self {
            board: Mutex::new(board),
            team: crate::board::fixtures::team_members(),
            config,
        }
    }

    /// Subscribe to board change notifications
    pub async fn subscribe(&self) -> broadcast::Receiver<BoardEvent> {
        self.board.lock().await.subscribe()
    }

    /// Read-only copy of the current columns
    pub async fn snapshot(&self) -> Vec<Column> {
        self.board.lock().await.snapshot()
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }
}

/// Kanban task board with four columns: todo → in-progress → review → done.
///
/// Tasks are cards with a priority, an assignee, a due date and tags.
/// Moving a card is the only change the board accepts; new tasks and
/// invitations are validated and logged but do not alter the board.
///
/// Column ids: todo, in-progress, review, done
/// Task ids: numeric strings ("1", "2", ...)
#[mcp_server]
impl McpServer for BoardServerHandler {
    /// **View**: Show the board with per-column counts, limits and due-date warnings.
    /// **Use**: No column=whole board; column="review" shows one column.
    #[tool]
    async fn board(
        &self,
        /// Column filter: todo/in-progress/review/done. Empty=all.
        column: Option<String>,
    ) -> McpResult<String> {
        self.handle_board(column).await
    }

    /// **Move**: Drag a task card from one column and drop it on another.
    /// **Rules**: The task must currently be in from_column. Dropping on the same column does nothing
    /// unless the server runs with --same-column reinsert, which moves the task to the end of it.
    /// Column limits are advisory and never block a move.
    #[tool]
    async fn move_task(
        &self,
        /// Task ID (e.g., "3")
        task_id: String,
        /// Column the task is dragged from: todo/in-progress/review/done
        from_column: String,
        /// Column the task is dropped on: todo/in-progress/review/done
        to_column: String,
    ) -> McpResult<String> {
        self.handle_move_task(task_id, from_column, to_column).await
    }

    /// **Create**: Fill in the new-task form. Title, assignee and priority are required.
    /// **Note**: The submission is validated and logged; it is not added to the board.
    #[allow(clippy::too_many_arguments)]
    #[tool]
    async fn create_task(
        &self,
        /// Title: clear, descriptive task title
        title: String,
        /// Description: details and acceptance criteria (optional)
        description: Option<String>,
        /// Assignee: team member id or name (see team tool)
        assignee: Option<String>,
        /// Priority: low/medium/high
        priority: Option<String>,
        /// Status: todo/in-progress/review/done (default: todo)
        status: Option<String>,
        /// Due date: YYYY-MM-DD, not in the past (optional)
        due_date: Option<String>,
        /// Tags from: Frontend, Backend, Design, UI/UX, API, Database, Testing, Documentation, Security, Performance, Mobile (optional)
        tags: Option<Vec<String>>,
    ) -> McpResult<String> {
        self.handle_create_task(title, description, assignee, priority, status, due_date, tags)
            .await
    }

    /// **Invite**: Invite team members by email with one role for the batch.
    /// **Roles**: viewer (view only), editor (create/edit tasks, default), admin (manage users), owner (full access).
    #[tool]
    async fn invite_users(
        &self,
        /// Email addresses to invite
        emails: Vec<String>,
        /// Role: viewer/editor/admin/owner (default: editor)
        role: Option<String>,
    ) -> McpResult<String> {
        self.handle_invite_users(emails, role).await
    }

    /// **Team**: List team members with their ids, roles and online status.
    #[tool]
    async fn team(&self) -> McpResult<String> {
        self.handle_team().await
    }
}
