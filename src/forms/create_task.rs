//! Create-task form state and validation

use crate::board::fixtures::TeamMember;
use crate::board::{Priority, TaskStatus};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::fmt;

/// Field-keyed validation messages, empty when the form is valid
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<&'static str, String>,
}

impl ValidationErrors {
    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    /// Message for one field, if that field failed
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.errors.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Everything the form collected, after validation
#[derive(Debug, Clone, PartialEq)]
pub struct TaskSubmission {
    pub title: String,
    pub description: String,
    pub assignee: TeamMember,
    pub priority: Priority,
    pub status: TaskStatus,
    pub due_date: Option<NaiveDate>,
    pub tags: Vec<String>,
}

/// In-progress input of the create-task form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    /// Team member id
    pub assignee: Option<String>,
    pub priority: Option<Priority>,
    pub status: TaskStatus,
    pub due_date: Option<NaiveDate>,
    tags: Vec<String>,
}

impl TaskDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Add a tag; blanks and duplicates are ignored. Returns whether it was added.
    pub fn add_tag(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() || self.tags.iter().any(|t| t == tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    pub fn remove_tag(&mut self, tag: &str) {
        self.tags.retain(|t| t != tag);
    }

    /// Check required fields and that the due date is not in the past
    pub fn validate(&self, today: NaiveDate) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();

        if self.title.trim().is_empty() {
            errors.insert("title", "Task title is required");
        }
        if self.assignee.as_deref().is_none_or(|a| a.trim().is_empty()) {
            errors.insert("assignee", "Please assign the task to someone");
        }
        if self.priority.is_none() {
            errors.insert("priority", "Please select a priority level");
        }
        if self.due_date.is_some_and(|due| due < today) {
            errors.insert("due_date", "Due date cannot be in the past");
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Validate, resolve the assignee and hand back the collected data
    ///
    /// On success the draft is reset to its defaults; on failure it is kept
    /// so the caller can correct it.
    pub fn submit(
        &mut self,
        team: &[TeamMember],
        today: NaiveDate,
    ) -> Result<TaskSubmission, ValidationErrors> {
        self.validate(today)?;

        let member_id = self.assignee.as_deref().unwrap_or_default().trim();
        let Some(member) = team.iter().find(|m| m.id == member_id) else {
            let mut errors = ValidationErrors::default();
            errors.insert("assignee", format!("Unknown team member '{}'", member_id));
            return Err(errors);
        };
        let Some(priority) = self.priority else {
            let mut errors = ValidationErrors::default();
            errors.insert("priority", "Please select a priority level");
            return Err(errors);
        };

        let submission = TaskSubmission {
            title: self.title.trim().to_string(),
            description: self.description.clone(),
            assignee: member.clone(),
            priority,
            status: self.status,
            due_date: self.due_date,
            tags: self.tags.clone(),
        };
        self.reset();
        Ok(submission)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::fixtures::team_members;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    #[test]
    fn test_empty_draft_reports_required_fields() {
        let draft = TaskDraft::new();
        let errors = draft.validate(today()).unwrap_err();

        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get("title"), Some("Task title is required"));
        assert_eq!(errors.get("assignee"), Some("Please assign the task to someone"));
        assert_eq!(errors.get("priority"), Some("Please select a priority level"));
        assert_eq!(errors.get("due_date"), None);
    }

    #[test]
    fn test_whitespace_title_is_blank() {
        let draft = TaskDraft {
            title: "   ".to_string(),
            assignee: Some("1".to_string()),
            priority: Some(Priority::Low),
            ..Default::default()
        };
        let errors = draft.validate(today()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.get("title").is_some());
    }

    #[test]
    fn test_past_due_date_rejected() {
        let draft = TaskDraft {
            title: "Ship".to_string(),
            assignee: Some("1".to_string()),
            priority: Some(Priority::High),
            due_date: NaiveDate::from_ymd_opt(2024, 1, 14),
            ..Default::default()
        };
        let errors = draft.validate(today()).unwrap_err();
        assert_eq!(errors.get("due_date"), Some("Due date cannot be in the past"));
    }

    #[test]
    fn test_tags_dedup_and_remove() {
        let mut draft = TaskDraft::new();
        assert!(draft.add_tag("Frontend"));
        assert!(!draft.add_tag("Frontend"));
        assert!(!draft.add_tag("  "));
        assert!(draft.add_tag(" API "));
        assert_eq!(draft.tags(), ["Frontend", "API"]);

        draft.remove_tag("Frontend");
        assert_eq!(draft.tags(), ["API"]);
    }

    #[test]
    fn test_submit_resets_draft() {
        let mut draft = TaskDraft {
            title: " Write tests ".to_string(),
            description: "Cover the board".to_string(),
            assignee: Some("2".to_string()),
            priority: Some(Priority::Medium),
            status: TaskStatus::Review,
            due_date: Some(today()),
            ..Default::default()
        };
        draft.add_tag("Testing");

        let submission = draft.submit(&team_members(), today()).unwrap();
        assert_eq!(submission.title, "Write tests");
        assert_eq!(submission.assignee.name, "Jane Smith");
        assert_eq!(submission.status, TaskStatus::Review);
        assert_eq!(submission.tags, vec!["Testing".to_string()]);
        assert_eq!(draft, TaskDraft::default());
    }

    #[test]
    fn test_submit_unknown_member_keeps_draft() {
        let mut draft = TaskDraft {
            title: "Task".to_string(),
            assignee: Some("99".to_string()),
            priority: Some(Priority::Low),
            ..Default::default()
        };
        let errors = draft.submit(&team_members(), today()).unwrap_err();
        assert_eq!(errors.get("assignee"), Some("Unknown team member '99'"));
        assert_eq!(draft.title, "Task");
        assert_eq!(errors.to_string(), "assignee: Unknown team member '99'");
    }
}
