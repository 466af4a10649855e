use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::board::{Board, fixtures};

/// Read-only source of the board the server starts with
pub struct Seed {
    file_path: Option<PathBuf>,
}

impl Seed {
    pub fn new(file_path: Option<impl AsRef<Path>>) -> Self {
        Self {
            file_path: file_path.map(|p| p.as_ref().to_path_buf()),
        }
    }

    /// Seed from the built-in fixture board
    pub fn builtin() -> Self {
        Self { file_path: None }
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Load the board; nothing is ever written back
    pub fn load(&self) -> Result<Board> {
        let Some(path) = &self.file_path else {
            return Ok(fixtures::sample_board());
        };

        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read seed file {}", path.display()))?;
        let board: Board = toml::from_str(&content)
            .with_context(|| format!("invalid seed file {}", path.display()))?;
        info!(
            path = %path.display(),
            columns = board.columns().len(),
            tasks = board.total_task_count(),
            "board seeded from file"
        );
        Ok(board)
    }
}
