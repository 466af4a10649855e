//! Runtime configuration for the board server

use clap::ValueEnum;
use std::path::PathBuf;
use std::time::Duration;

/// Days ahead of today within which a task counts as due soon
pub const DEFAULT_DUE_SOON_DAYS: i64 = 3;

/// Delay before a create-task submission is acknowledged
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(1000);

/// What moving a task into the column it is already in does
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SameColumnMove {
    /// Remove the task and append it to the end of the same column
    #[default]
    Reinsert,
    /// Leave the board untouched
    Ignore,
}

/// Server configuration
///
/// `same_column` defaults to `Ignore` here, unlike the bare `Board`: a card
/// dropped back on its own column is a no-op for tool callers.
#[derive(Debug, Clone)]
pub struct BoardConfig {
    /// TOML seed file; the built-in fixture board is used when absent
    pub seed: Option<PathBuf>,
    pub due_soon_days: i64,
    pub same_column: SameColumnMove,
    pub submit_delay: Duration,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            seed: None,
            due_soon_days: DEFAULT_DUE_SOON_DAYS,
            same_column: SameColumnMove::Ignore,
            submit_delay: DEFAULT_SUBMIT_DELAY,
        }
    }
}

impl BoardConfig {
    /// Configuration for tests: built-in board, no simulated delay
    pub fn immediate() -> Self {
        Self {
            submit_delay: Duration::ZERO,
            ..Self::default()
        }
    }
}
