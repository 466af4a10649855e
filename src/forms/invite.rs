//! Invite-users form: a pending list of email + role pairs

use std::fmt;
use std::str::FromStr;

/// Access level granted to an invited user
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Role {
    Viewer,
    #[default]
    Editor,
    Admin,
    Owner,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Viewer, Role::Editor, Role::Admin, Role::Owner];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Viewer => "viewer",
            Role::Editor => "editor",
            Role::Admin => "admin",
            Role::Owner => "owner",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Viewer => "Viewer",
            Role::Editor => "Editor",
            Role::Admin => "Admin",
            Role::Owner => "Owner",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Role::Viewer => "Can view tasks and boards",
            Role::Editor => "Can create and edit tasks",
            Role::Admin => "Can manage users and settings",
            Role::Owner => "Full access to everything",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "Invalid role '{}'. Valid options are: viewer, editor, admin, owner",
                    s
                )
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invite {
    pub email: String,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InviteError {
    #[error("email address is required")]
    EmptyEmail,
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
    #[error("'{0}' is already invited")]
    Duplicate(String),
}

/// Loose `local@domain.tld` shape check
fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .is_some_and(|(name, tld)| !name.is_empty() && !tld.is_empty())
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

/// Invite form state: the email being typed, the selected role and the
/// invites queued so far
#[derive(Debug, Clone, Default)]
pub struct InviteForm {
    pub email: String,
    pub role: Role,
    invites: Vec<Invite>,
}

impl InviteForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn invites(&self) -> &[Invite] {
        &self.invites
    }

    /// Queue the current email with the current role and clear the email field
    pub fn add_invite(&mut self) -> Result<(), InviteError> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err(InviteError::EmptyEmail);
        }
        if !looks_like_email(email) {
            return Err(InviteError::InvalidEmail(email.to_string()));
        }
        if self.invites.iter().any(|i| i.email == email) {
            return Err(InviteError::Duplicate(email.to_string()));
        }

        self.invites.push(Invite {
            email: email.to_string(),
            role: self.role,
        });
        self.email.clear();
        Ok(())
    }

    pub fn remove_invite(&mut self, email: &str) {
        self.invites.retain(|i| i.email != email);
    }

    /// Queue any pending email, then drain every invite
    ///
    /// Fails without draining when the pending email is rejected.
    pub fn submit(&mut self) -> Result<Vec<Invite>, InviteError> {
        if !self.email.trim().is_empty() {
            self.add_invite()?;
        }
        Ok(std::mem::take(&mut self.invites))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_defaults_and_parse() {
        assert_eq!(Role::default(), Role::Editor);
        assert_eq!("owner".parse::<Role>(), Ok(Role::Owner));
        assert!("root".parse::<Role>().is_err());
        assert_eq!(Role::Admin.description(), "Can manage users and settings");
    }

    #[test]
    fn test_email_shape() {
        assert!(looks_like_email("colleague@company.com"));
        assert!(!looks_like_email("colleague"));
        assert!(!looks_like_email("@company.com"));
        assert!(!looks_like_email("a@company"));
        assert!(!looks_like_email("a@b@c.com"));
        assert!(!looks_like_email("a b@c.com"));
    }

    #[test]
    fn test_add_invite_dedup() {
        let mut form = InviteForm::new();
        form.email = "ann@example.com".to_string();
        form.add_invite().unwrap();
        assert!(form.email.is_empty());

        form.email = " ann@example.com ".to_string();
        assert_eq!(
            form.add_invite(),
            Err(InviteError::Duplicate("ann@example.com".to_string()))
        );
        assert_eq!(form.add_invite().unwrap_err().to_string(), "'ann@example.com' is already invited");
        assert_eq!(form.invites().len(), 1);
    }

    #[test]
    fn test_roles_are_captured_per_invite() {
        let mut form = InviteForm::new();
        form.email = "a@example.com".to_string();
        form.add_invite().unwrap();
        form.role = Role::Viewer;
        form.email = "b@example.com".to_string();
        form.add_invite().unwrap();

        assert_eq!(form.invites()[0].role, Role::Editor);
        assert_eq!(form.invites()[1].role, Role::Viewer);
    }

    #[test]
    fn test_submit_includes_pending_email() {
        let mut form = InviteForm::new();
        form.email = "a@example.com".to_string();
        form.add_invite().unwrap();
        form.email = "b@example.com".to_string();

        let sent = form.submit().unwrap();
        assert_eq!(sent.len(), 2);
        assert!(form.invites().is_empty());
        assert!(form.email.is_empty());
    }

    #[test]
    fn test_submit_rejects_invalid_pending_email() {
        let mut form = InviteForm::new();
        form.email = "a@example.com".to_string();
        form.add_invite().unwrap();
        form.email = "not-an-email".to_string();

        assert_eq!(
            form.submit(),
            Err(InviteError::InvalidEmail("not-an-email".to_string()))
        );
        assert_eq!(form.invites().len(), 1);
    }

    #[test]
    fn test_remove_and_empty_submit() {
        let mut form = InviteForm::new();
        form.email = "a@example.com".to_string();
        form.add_invite().unwrap();
        form.remove_invite("a@example.com");

        assert_eq!(form.add_invite(), Err(InviteError::EmptyEmail));
        assert!(form.submit().unwrap().is_empty());
    }
}
