//! Common test utilities for integration tests
#![allow(dead_code)]

use taskboard_mcp::board::fixtures;
use taskboard_mcp::{Board, BoardConfig, BoardServerHandler, Column, TaskStatus};

/// Handler over the built-in sample board with no submit delay
pub fn get_test_handler() -> BoardServerHandler {
    BoardServerHandler::with_board(fixtures::sample_board(), BoardConfig::immediate())
}

/// Handler over a custom board
pub fn get_handler_with_board(board: Board) -> BoardServerHandler {
    BoardServerHandler::with_board(board, BoardConfig::immediate())
}

/// Task ids of one column, in display order
pub fn column_ids(columns: &[Column], status: TaskStatus) -> Vec<String> {
    columns
        .iter()
        .find(|c| c.id == status)
        .map(|c| c.tasks.iter().map(|t| t.id.clone()).collect())
        .unwrap_or_default()
}

/// Board with `todo=[T1,T2]` and an empty `done` column
pub fn two_column_board() -> Board {
    let mut todo = Column::new(TaskStatus::Todo);
    todo.tasks.push(fixtures::sample_task("T1", TaskStatus::Todo));
    todo.tasks.push(fixtures::sample_task("T2", TaskStatus::Todo));
    Board::from_columns(vec![todo, Column::new(TaskStatus::Done)]).unwrap()
}
