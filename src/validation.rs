//! Validation helper functions for tool parameters
//!
//! Turns raw tool arguments into domain values, producing MCP
//! `INVALID_PARAMS` errors that list the accepted values.

use crate::board::{Priority, TaskStatus};
use crate::forms::Role;
use chrono::NaiveDate;
use mcp_attr::Result as McpResult;

fn invalid_params(message: String) -> mcp_attr::Error {
    mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS).with_message(message, true)
}

/// Parse a column / status identifier
pub fn parse_status(status_str: &str) -> McpResult<TaskStatus> {
    status_str.trim().parse::<TaskStatus>().map_err(invalid_params)
}

/// Parse a priority level
pub fn parse_priority(priority_str: &str) -> McpResult<Priority> {
    priority_str
        .trim()
        .to_lowercase()
        .parse::<Priority>()
        .map_err(invalid_params)
}

/// Parse an invite role
pub fn parse_role(role_str: &str) -> McpResult<Role> {
    role_str
        .trim()
        .to_lowercase()
        .parse::<Role>()
        .map_err(invalid_params)
}

/// Parse a date in YYYY-MM-DD format
pub fn parse_date(date_str: &str) -> McpResult<NaiveDate> {
    NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d").map_err(|_| {
        invalid_params(format!(
            "Invalid date format '{}'. Use YYYY-MM-DD (e.g., '2025-03-15')",
            date_str
        ))
    })
}

/// Normalize an id coming from a tool argument (surrounding whitespace only)
///
/// # Examples
/// ```
/// # use taskboard_mcp::validation::normalize_id;
/// assert_eq!(normalize_id(" 42 "), "42");
/// assert_eq!(normalize_id("in-progress"), "in-progress");
/// ```
pub fn normalize_id(id: &str) -> String {
    id.trim().to_string()
}
