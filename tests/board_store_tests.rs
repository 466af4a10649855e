//! Board store contract tests
mod common;

use taskboard_mcp::board::fixtures;
use taskboard_mcp::{Board, SameColumnMove, TaskStatus};

fn assert_invariants(board: &Board) {
    let mut seen = std::collections::HashSet::new();
    for column in board.columns() {
        for task in &column.tasks {
            assert_eq!(task.status, column.id, "task {} status out of sync", task.id);
            assert!(seen.insert(task.id.clone()), "task {} appears twice", task.id);
        }
    }
}

// Scenario: todo=[T1,T2], done=[] then move T1 to done
#[test]
fn test_example_scenario() {
    let mut board = common::two_column_board();
    board.move_task("T1", "todo", "done");

    let columns = board.snapshot();
    assert_eq!(common::column_ids(&columns, TaskStatus::Todo), vec!["T2"]);
    assert_eq!(common::column_ids(&columns, TaskStatus::Done), vec!["T1"]);
    assert_eq!(board.find_task("T1").unwrap().status, TaskStatus::Done);
    assert_eq!(board.total_task_count(), 2);
}

// Moving never creates or destroys tasks, valid or not
#[test]
fn test_conservation_over_move_sequence() {
    let mut board = fixtures::sample_board();
    let total = board.total_task_count();

    let moves = [
        ("1", "todo", "in-progress"),
        ("3", "in-progress", "review"),
        ("4", "review", "done"),
        ("5", "done", "todo"),
        ("1", "in-progress", "in-progress"),
        ("does-not-exist", "todo", "done"),
        ("2", "todo", "not-a-column"),
        ("8", "review", "todo"),
        ("7", "in-progress", "done"),
    ];
    for (id, from, to) in moves {
        board.move_task(id, from, to);
        assert_eq!(board.total_task_count(), total);
        assert_invariants(&board);
    }

    assert_eq!(board.find_task("5").unwrap().status, TaskStatus::Todo);
    assert_eq!(board.find_task("4").unwrap().status, TaskStatus::Done);
    // "8" was never in review, so it stays in done
    assert_eq!(board.find_task("8").unwrap().status, TaskStatus::Done);
}

#[test]
fn test_counts_follow_moves() {
    let mut board = fixtures::sample_board();
    board.move_task("2", "todo", "review");
    assert_eq!(board.count_by_column("review"), Some(2));
    assert_eq!(board.count_by_column("todo"), Some(2));

    board.move_task("2", "review", "done");
    assert_eq!(board.count_by_column("review"), Some(1));
    assert_eq!(board.count_by_column("done"), Some(3));
}

#[test]
fn test_same_column_move_reorders_without_changing_counts() {
    let mut board = fixtures::sample_board();
    board.move_task("1", "todo", "todo");

    let columns = board.snapshot();
    assert_eq!(
        common::column_ids(&columns, TaskStatus::Todo),
        vec!["2", "6", "1"]
    );
    assert_eq!(board.count_by_column("todo"), Some(3));
}

#[test]
fn test_same_column_policy_ignore() {
    let mut board = fixtures::sample_board().with_same_column_policy(SameColumnMove::Ignore);
    board.move_task("1", "todo", "todo");

    let columns = board.snapshot();
    assert_eq!(
        common::column_ids(&columns, TaskStatus::Todo),
        vec!["1", "2", "6"]
    );
}

#[test]
fn test_unknown_ids_leave_board_unchanged() {
    let mut board = fixtures::sample_board();
    let before = board.snapshot();

    board.move_task("does-not-exist", "todo", "done");
    board.move_task("1", "todo", "not-a-column");
    board.move_task("1", "not-a-column", "done");
    board.move_task("1", "review", "done");

    assert_eq!(board.snapshot(), before);
    assert_eq!(board.find_task("1").unwrap().status, TaskStatus::Todo);
}

#[test]
fn test_snapshot_is_detached() {
    let mut board = fixtures::sample_board();
    let snapshot = board.snapshot();
    board.move_task("1", "todo", "done");

    assert_eq!(
        common::column_ids(&snapshot, TaskStatus::Todo),
        vec!["1", "2", "6"]
    );
    assert_eq!(board.count_by_column("todo"), Some(2));
}
