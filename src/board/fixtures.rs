//! Built-in seed data
//!
//! The default board the server starts with when no seed file is given,
//! plus the team roster and tag palette the forms choose from.

use super::board_data::Board;
use super::column::Column;
use super::task::{Assignee, Priority, Task, TaskStatus};
use chrono::NaiveDate;

pub const PLACEHOLDER_AVATAR: &str = "/placeholder.svg?height=32&width=32";

/// Tags offered by the create-task form
pub const AVAILABLE_TAGS: [&str; 11] = [
    "Frontend",
    "Backend",
    "Design",
    "UI/UX",
    "API",
    "Database",
    "Testing",
    "Documentation",
    "Security",
    "Performance",
    "Mobile",
];

/// A member of the team tasks can be assigned to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub role: String,
    pub online: bool,
}

impl TeamMember {
    fn new(id: &str, name: &str, role: &str, online: bool) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            avatar: PLACEHOLDER_AVATAR.to_string(),
            role: role.to_string(),
            online,
        }
    }

    pub fn assignee(&self) -> Assignee {
        Assignee::new(self.name.clone(), self.avatar.clone())
    }
}

pub fn team_members() -> Vec<TeamMember> {
    vec![
        TeamMember::new("1", "John Doe", "Lead Developer", true),
        TeamMember::new("2", "Jane Smith", "Designer", true),
        TeamMember::new("3", "Mike Johnson", "Developer", false),
        TeamMember::new("4", "Sarah Wilson", "Product Manager", true),
    ]
}

#[allow(clippy::too_many_arguments)]
fn task(
    id: &str,
    title: &str,
    description: &str,
    priority: Priority,
    assignee: &str,
    due: (i32, u32, u32),
    tags: &[&str],
    comments: u32,
    attachments: u32,
) -> Task {
    Task {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        status: TaskStatus::default(),
        priority,
        assignee: Assignee::new(assignee, PLACEHOLDER_AVATAR),
        due_date: NaiveDate::from_ymd_opt(due.0, due.1, due.2)
            .expect("fixture due dates are valid"),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        comments,
        attachments,
    }
}

/// Columns of the default board; statuses are filled in by `Board::from_columns`
pub fn sample_columns() -> Vec<Column> {
    let mut todo = Column::new(TaskStatus::Todo);
    todo.tasks = vec![
        task(
            "1",
            "Design user authentication flow",
            "Create wireframes and mockups for login/register pages with modern UI patterns",
            Priority::High,
            "John Doe",
            (2024, 1, 15),
            &["Design", "UI/UX", "Authentication"],
            3,
            2,
        ),
        task(
            "2",
            "Set up database schema",
            "Define tables for users, tasks, and projects with proper relationships",
            Priority::Medium,
            "Jane Smith",
            (2024, 1, 18),
            &["Backend", "Database"],
            1,
            0,
        ),
        task(
            "6",
            "Create API documentation",
            "Document all REST API endpoints with examples and schemas",
            Priority::Low,
            "Sarah Wilson",
            (2024, 1, 22),
            &["Documentation", "API"],
            0,
            1,
        ),
    ];

    let mut in_progress = Column::new(TaskStatus::InProgress).with_limit(3);
    in_progress.tasks = vec![
        task(
            "3",
            "Implement drag and drop functionality",
            "Add drag and drop for seamless task board interactions with smooth animations",
            Priority::High,
            "Mike Johnson",
            (2024, 1, 20),
            &["Frontend", "React", "DnD"],
            5,
            1,
        ),
        task(
            "7",
            "Optimize database queries",
            "Improve query performance and add proper indexing",
            Priority::Medium,
            "John Doe",
            (2024, 1, 19),
            &["Backend", "Performance"],
            2,
            0,
        ),
    ];

    let mut review = Column::new(TaskStatus::Review);
    review.tasks = vec![task(
        "4",
        "Code review for API endpoints",
        "Review and test all REST API endpoints for security and performance",
        Priority::Medium,
        "Sarah Wilson",
        (2024, 1, 16),
        &["Backend", "API", "Security"],
        2,
        0,
    )];

    let mut done = Column::new(TaskStatus::Done);
    done.tasks = vec![
        task(
            "5",
            "Project setup and configuration",
            "Initialize the project with styling and required dependencies",
            Priority::Low,
            "John Doe",
            (2024, 1, 10),
            &["Setup", "Config"],
            0,
            1,
        ),
        task(
            "8",
            "Design system components",
            "Create reusable UI components with consistent styling",
            Priority::Medium,
            "Jane Smith",
            (2024, 1, 12),
            &["Design", "Components"],
            4,
            3,
        ),
    ];

    vec![todo, in_progress, review, done]
}

/// The default board: four columns, eight tasks
pub fn sample_board() -> Board {
    Board::from_columns(sample_columns()).expect("fixture column and task ids are unique")
}

/// Minimal task for tests and examples
pub fn sample_task(id: &str, status: TaskStatus) -> Task {
    Task {
        status,
        ..task(
            id,
            &format!("Task {}", id),
            "",
            Priority::Medium,
            "John Doe",
            (2024, 1, 15),
            &[],
            0,
            0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_board_shape() {
        let board = sample_board();
        assert_eq!(board.total_task_count(), 8);
        assert_eq!(board.count_by_column("todo"), Some(3));
        assert_eq!(board.count_by_column("in-progress"), Some(2));
        assert_eq!(board.count_by_column("review"), Some(1));
        assert_eq!(board.count_by_column("done"), Some(2));
        assert_eq!(board.column("in-progress").unwrap().limit, Some(3));
        assert_eq!(board.find_task("4").unwrap().status, TaskStatus::Review);
    }

    #[test]
    fn test_team_members() {
        let team = team_members();
        assert_eq!(team.len(), 4);
        assert_eq!(team[2].assignee().initials(), "MJ");
        assert!(!team[2].online);
    }
}
