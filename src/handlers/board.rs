//! Board view and team roster handlers

use crate::BoardServerHandler;
use crate::board::local_date_today;
use crate::formatting;
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};

impl BoardServerHandler {
    /// Renders the whole board, or one column when `column` is given.
    pub async fn handle_board(&self, column: Option<String>) -> McpResult<String> {
        let column_filter = match column {
            Some(ref id) => Some(validation::parse_status(id)?),
            None => None,
        };

        let board = self.board.lock().await;
        if let Some(status) = column_filter
            && board.column(status.as_str()).is_none()
        {
            drop(board);
            bail_public!(_, "Column '{}' is not on this board", status);
        }

        Ok(formatting::format_board(
            &board,
            local_date_today(),
            self.config.due_soon_days,
            column_filter.map(|s| s.as_str()),
        ))
    }

    /// Lists the team members tasks can be assigned to.
    pub async fn handle_team(&self) -> McpResult<String> {
        Ok(formatting::format_team(&self.team))
    }
}
