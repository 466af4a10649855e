//! Form collaborators
//!
//! Both forms validate user input and hand back plain data. Neither writes
//! to the board: submissions are only logged by the tool handlers.

pub mod create_task;
pub mod invite;

pub use create_task::{TaskDraft, TaskSubmission, ValidationErrors};
pub use invite::{Invite, InviteError, InviteForm, Role};
