//! Board domain models and the board state store
//!
//! Split into submodules:
//! - `task`: task card, status, priority, assignee
//! - `column`: ordered task list with an advisory limit
//! - `board_data`: the `Board` store and its mutation contract
//! - `fixtures`: built-in seed board and team roster
//! - `serde_impl`: invariant-checking (de)serialization for `Board`

mod board_data;
mod column;
pub mod fixtures;
mod serde_impl;
mod task;

pub use board_data::{AddTaskError, Board, BoardEvent, MoveError, MoveOutcome, SeedError};
pub use column::Column;
pub use task::{Assignee, Priority, Task, TaskStatus, local_date_today};
