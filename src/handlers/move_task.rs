//! Move task handler: the drop side of drag and drop

use crate::BoardServerHandler;
use crate::dnd::{self, DragPayload, DropOutcome};
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};
use tracing::info;

impl BoardServerHandler {
    /// Drops task `task_id`, dragged from `from_column`, onto `to_column`.
    pub async fn handle_move_task(
        &self,
        task_id: String,
        from_column: String,
        to_column: String,
    ) -> McpResult<String> {
        let payload = DragPayload::new(
            validation::normalize_id(&task_id),
            validation::normalize_id(&from_column),
        );
        let target = validation::normalize_id(&to_column);

        let mut board = self.board.lock().await;
        let outcome = dnd::drop_task(&mut board, &payload, &target);

        match outcome {
            DropOutcome::Moved { at_limit } => {
                info!(task_id = %payload.id, from = %payload.status, to = %target, "task moved");

                let mut response = format!(
                    "Moved task '{}': {} → {}\nTotal tasks: {}",
                    payload.id,
                    payload.status,
                    target,
                    board.total_task_count()
                );
                if at_limit && let Some(column) = board.column(&target) {
                    response.push_str(&format!(
                        "\nNote: column '{}' is at its limit ({})",
                        column.title,
                        crate::formatting::column_badge(column)
                    ));
                }
                Ok(response)
            }
            DropOutcome::Reordered => {
                info!(task_id = %payload.id, column = %target, "task re-appended to its column");
                Ok(format!(
                    "Moved task '{}' to the end of column '{}'",
                    payload.id, target
                ))
            }
            DropOutcome::SameColumn => Ok(format!(
                "Task '{}' is already in column '{}'; nothing to do",
                payload.id, target
            )),
            DropOutcome::Rejected(e) => {
                drop(board);
                bail_public!(_, "Task not moved: {}", e);
            }
        }
    }
}
