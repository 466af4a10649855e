//! Drag-and-drop intents
//!
//! A card captures a `DragPayload` when dragging starts; dropping it on a
//! column turns it into a board move. Drops onto the origin column still go
//! through the board, so unknown tasks and columns are rejected the same way
//! and the board's `SameColumnMove` policy decides what happens.

use crate::board::{Board, MoveError, MoveOutcome};
use serde::{Deserialize, Serialize};

/// Task id and origin column captured at drag start
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragPayload {
    pub id: String,
    pub status: String,
}

impl DragPayload {
    pub fn new(id: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            status: status.into(),
        }
    }
}

/// Result of dropping a card on a column
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// The card moved; `at_limit` is set when the target is now full or over
    Moved { at_limit: bool },
    /// Dropped on its origin column and re-appended to its end
    Reordered,
    /// Dropped on its origin column, nothing to do
    SameColumn,
    /// The board refused the move and is unchanged
    Rejected(MoveError),
}

/// Deliver a drop of `payload` onto the column `target_column`
pub fn drop_task(board: &mut Board, payload: &DragPayload, target_column: &str) -> DropOutcome {
    match board.try_move_task(&payload.id, &payload.status, target_column) {
        Ok(MoveOutcome::Moved) => DropOutcome::Moved {
            at_limit: board
                .column(target_column)
                .is_some_and(|column| column.is_at_limit()),
        },
        Ok(MoveOutcome::Reordered) => DropOutcome::Reordered,
        Ok(MoveOutcome::Unchanged) => DropOutcome::SameColumn,
        Err(e) => DropOutcome::Rejected(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{TaskStatus, fixtures};
    use crate::config::SameColumnMove;

    #[test]
    fn test_drop_on_other_column() {
        let mut board = fixtures::sample_board();
        let outcome = drop_task(&mut board, &DragPayload::new("2", "todo"), "review");

        assert_eq!(outcome, DropOutcome::Moved { at_limit: false });
        assert_eq!(board.find_task("2").unwrap().status, TaskStatus::Review);
        assert_eq!(board.column("review").unwrap().tasks.last().unwrap().id, "2");
    }

    #[test]
    fn test_drop_on_origin_column_ignored() {
        let mut board = fixtures::sample_board().with_same_column_policy(SameColumnMove::Ignore);
        let before = board.snapshot();
        let outcome = drop_task(&mut board, &DragPayload::new("1", "todo"), "todo");

        assert_eq!(outcome, DropOutcome::SameColumn);
        assert_eq!(board.snapshot(), before);
    }

    #[test]
    fn test_drop_on_origin_column_reinserts() {
        let mut board = fixtures::sample_board();
        let outcome = drop_task(&mut board, &DragPayload::new("1", "todo"), "todo");

        assert_eq!(outcome, DropOutcome::Reordered);
        assert_eq!(board.column("todo").unwrap().tasks.last().unwrap().id, "1");
        assert_eq!(board.count_by_column("todo"), Some(3));
    }

    #[test]
    fn test_drop_on_origin_column_checks_task_and_column() {
        let mut board = fixtures::sample_board().with_same_column_policy(SameColumnMove::Ignore);

        let outcome = drop_task(&mut board, &DragPayload::new("nope", "todo"), "todo");
        assert!(matches!(
            outcome,
            DropOutcome::Rejected(MoveError::TaskNotFound { .. })
        ));

        let outcome = drop_task(&mut board, &DragPayload::new("1", "archive"), "archive");
        assert_eq!(
            outcome,
            DropOutcome::Rejected(MoveError::UnknownColumn("archive".to_string()))
        );
    }

    #[test]
    fn test_drop_reports_limit() {
        let mut board = fixtures::sample_board();
        let outcome = drop_task(&mut board, &DragPayload::new("1", "todo"), "in-progress");
        assert_eq!(outcome, DropOutcome::Moved { at_limit: true });

        // Over the limit still moves
        let outcome = drop_task(&mut board, &DragPayload::new("2", "todo"), "in-progress");
        assert_eq!(outcome, DropOutcome::Moved { at_limit: true });
        assert_eq!(board.count_by_column("in-progress"), Some(4));
    }

    #[test]
    fn test_drop_with_stale_payload() {
        let mut board = fixtures::sample_board();
        // Card 1 was already moved, the payload still names "todo"
        board.move_task("1", "todo", "done");
        let outcome = drop_task(&mut board, &DragPayload::new("1", "todo"), "review");

        assert!(matches!(
            outcome,
            DropOutcome::Rejected(MoveError::TaskNotFound { .. })
        ));
        assert_eq!(board.find_task("1").unwrap().status, TaskStatus::Done);
    }
}
