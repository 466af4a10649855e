//! Create task handler
//!
//! Validates the form and logs what was collected. The submission is not
//! inserted into the board.

use crate::BoardServerHandler;
use crate::board::{TaskStatus, fixtures, local_date_today};
use crate::forms::TaskDraft;
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};
use tracing::info;

impl BoardServerHandler {
    /// Resolves a team member given by id or (case-insensitive) name to its id.
    fn resolve_member_id(&self, assignee: &str) -> String {
        let assignee = assignee.trim();
        self.team
            .iter()
            .find(|m| m.id == assignee || m.name.eq_ignore_ascii_case(assignee))
            .map(|m| m.id.clone())
            .unwrap_or_else(|| assignee.to_string())
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn handle_create_task(
        &self,
        title: String,
        description: Option<String>,
        assignee: Option<String>,
        priority: Option<String>,
        status: Option<String>,
        due_date: Option<String>,
        tags: Option<Vec<String>>,
    ) -> McpResult<String> {
        let mut draft = TaskDraft::new();
        draft.title = title;
        draft.description = description.unwrap_or_default();
        draft.assignee = assignee.map(|a| self.resolve_member_id(&a));

        if let Some(ref p) = priority {
            draft.priority = Some(validation::parse_priority(p)?);
        }
        draft.status = match status {
            Some(ref s) => validation::parse_status(s)?,
            None => TaskStatus::default(),
        };
        if let Some(ref d) = due_date {
            draft.due_date = Some(validation::parse_date(d)?);
        }

        for tag in tags.unwrap_or_default() {
            let tag = tag.trim();
            if !fixtures::AVAILABLE_TAGS.contains(&tag) {
                bail_public!(
                    _,
                    "Unknown tag '{}'. Available tags: {}",
                    tag,
                    fixtures::AVAILABLE_TAGS.join(", ")
                );
            }
            draft.add_tag(tag);
        }

        let submission = match draft.submit(&self.team, local_date_today()) {
            Ok(s) => s,
            Err(errors) => {
                bail_public!(_, "Task not created: {}", errors);
            }
        };

        // Simulated round trip; the board lock is not held here
        if !self.config.submit_delay.is_zero() {
            tokio::time::sleep(self.config.submit_delay).await;
        }

        info!(
            title = %submission.title,
            description = %submission.description,
            assignee = %submission.assignee.name,
            priority = %submission.priority,
            status = %submission.status,
            due_date = ?submission.due_date,
            tags = ?submission.tags,
            "create-task submission received"
        );

        let mut response = format!(
            "Task submission received: '{}' for {} (priority: {}, status: {})",
            submission.title, submission.assignee.name, submission.priority, submission.status
        );
        if let Some(due) = submission.due_date {
            response.push_str(&format!("\nDue: {}", due));
        }
        if !submission.tags.is_empty() {
            response.push_str(&format!("\nTags: {}", submission.tags.join(", ")));
        }
        response.push_str("\nThe submission was logged only; the board is unchanged.");
        Ok(response)
    }
}
