//! Formatting helper functions for the board server
//!
//! Due-date classification and the text views returned by the tools.

use crate::board::{Board, Column, Task, fixtures::TeamMember};
use chrono::{Duration, NaiveDate};

/// Tags shown on a card before collapsing the rest into "+N"
const VISIBLE_TAGS: usize = 3;

/// Display classification of a task's due date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueState {
    Overdue,
    DueSoon,
    OnTrack,
}

/// Classify a due date relative to `today`
///
/// Overdue when strictly before today; due soon when within
/// `due_soon_days` days from today (today included).
pub fn classify_due(due: NaiveDate, today: NaiveDate, due_soon_days: i64) -> DueState {
    if due < today {
        DueState::Overdue
    } else if due <= today + Duration::days(due_soon_days) {
        DueState::DueSoon
    } else {
        DueState::OnTrack
    }
}

/// Human-friendly due date label ("Today", "In 3 days", "Jan 15")
pub fn format_due_date(due: NaiveDate, today: NaiveDate) -> String {
    let diff_days = (due - today).num_days();
    match diff_days {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        -1 => "Yesterday".to_string(),
        d if d < 0 => format!("{} days ago", d.abs()),
        d if d <= 7 => format!("In {} days", d),
        _ => due.format("%b %-d").to_string(),
    }
}

/// Column header badge: "2" or "2 / 3"
pub fn column_badge(column: &Column) -> String {
    match column.limit {
        Some(limit) => format!("{} / {}", column.len(), limit),
        None => column.len().to_string(),
    }
}

fn format_task(task: &Task, today: NaiveDate, due_soon_days: i64) -> String {
    let mut result = format!(
        "- [{}] {} (priority: {}, assignee: {} ({}))\n",
        task.id,
        task.title,
        task.priority,
        task.assignee.name,
        task.assignee.initials()
    );

    if !task.description.is_empty() {
        result.push_str(&format!("  {}\n", task.description));
    }

    if !task.tags.is_empty() {
        let mut tags: Vec<String> = task.tags.iter().take(VISIBLE_TAGS).cloned().collect();
        if task.tags.len() > VISIBLE_TAGS {
            tags.push(format!("+{}", task.tags.len() - VISIBLE_TAGS));
        }
        result.push_str(&format!("  Tags: {}\n", tags.join(", ")));
    }

    let due_label = format_due_date(task.due_date, today);
    match classify_due(task.due_date, today, due_soon_days) {
        DueState::Overdue => {
            result.push_str(&format!("  Due: {} (Task is overdue)\n", due_label))
        }
        DueState::DueSoon => result.push_str(&format!("  Due: {} (Due soon)\n", due_label)),
        DueState::OnTrack => result.push_str(&format!("  Due: {}\n", due_label)),
    }

    let mut counters = Vec::new();
    if task.comments > 0 {
        counters.push(format!("{} comment(s)", task.comments));
    }
    if task.attachments > 0 {
        counters.push(format!("{} attachment(s)", task.attachments));
    }
    if !counters.is_empty() {
        result.push_str(&format!("  {}\n", counters.join(", ")));
    }

    result
}

/// Render the board, or a single column when `column_filter` is set
pub fn format_board(
    board: &Board,
    today: NaiveDate,
    due_soon_days: i64,
    column_filter: Option<&str>,
) -> String {
    let summary: Vec<String> = board
        .columns()
        .iter()
        .map(|c| format!("{}: {}", c.title, c.len()))
        .collect();
    let mut result = format!(
        "Total Tasks: {} ({})\n",
        board.total_task_count(),
        summary.join(", ")
    );

    for column in board.columns() {
        if column_filter.is_some_and(|id| id != column.id.as_str()) {
            continue;
        }

        result.push_str(&format!(
            "\n## {} [{}] ({})\n",
            column.title,
            column.id,
            column_badge(column)
        ));
        if column.is_at_limit()
            && let Some(limit) = column.limit
        {
            result.push_str(&format!("Column limit reached ({} tasks)\n", limit));
        }
        if column.is_empty() {
            result.push_str("No tasks\n");
        }
        for task in &column.tasks {
            result.push_str(&format_task(task, today, due_soon_days));
        }
    }

    result
}

/// Render the team roster
pub fn format_team(members: &[TeamMember]) -> String {
    let mut result = format!("Team ({} member(s)):\n", members.len());
    for member in members {
        result.push_str(&format!(
            "- [{}] {} ({}) - {}\n",
            member.id,
            member.name,
            member.role,
            if member.online { "online" } else { "offline" }
        ));
    }
    result
}
