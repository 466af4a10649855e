//! Invite users handler

use crate::BoardServerHandler;
use crate::forms::{InviteForm, Role};
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};
use tracing::info;

impl BoardServerHandler {
    /// Queues every email with one role and sends the batch.
    pub async fn handle_invite_users(
        &self,
        emails: Vec<String>,
        role: Option<String>,
    ) -> McpResult<String> {
        if emails.is_empty() {
            bail_public!(_, "No email addresses provided. Please specify at least one.");
        }

        let mut form = InviteForm::new();
        form.role = match role {
            Some(ref r) => validation::parse_role(r)?,
            None => Role::default(),
        };

        let mut failures = Vec::new();
        for email in emails {
            form.email = email;
            if let Err(e) = form.add_invite() {
                failures.push(e.to_string());
                form.email.clear();
            }
        }

        let invites = match form.submit() {
            Ok(invites) => invites,
            Err(e) => {
                bail_public!(_, "Invites not sent: {}", e);
            }
        };
        for invite in &invites {
            info!(email = %invite.email, role = %invite.role, "sending invite");
        }

        let mut response = String::new();
        if !invites.is_empty() {
            response.push_str(&format!(
                "Sent {} invite{} as {}:\n",
                invites.len(),
                if invites.len() == 1 { "" } else { "s" },
                form.role.label()
            ));
            for invite in &invites {
                response.push_str(&format!("- {}\n", invite.email));
            }
        }

        if !failures.is_empty() {
            if !response.is_empty() {
                response.push('\n');
            }
            response.push_str(&format!(
                "Skipped {} address{}:\n",
                failures.len(),
                if failures.len() == 1 { "" } else { "es" }
            ));
            for failure in &failures {
                response.push_str(&format!("- {}\n", failure));
            }
        }

        if invites.is_empty() {
            bail_public!(_, "{}", response.trim());
        }

        Ok(response.trim().to_string())
    }
}
