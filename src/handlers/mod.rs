//! MCP tool handlers for the board server
//!
//! Each tool's logic lives in its own file as a `handle_*` method on
//! `BoardServerHandler`.

pub mod board;
pub mod create_task;
pub mod invite;
pub mod move_task;
