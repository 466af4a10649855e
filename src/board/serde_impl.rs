//! Serialization and deserialization implementations for Board
//!
//! A board is written as a list of columns. Reading goes through
//! `Board::from_columns`, so a seed file that breaks an invariant is
//! rejected instead of producing an inconsistent board.

use super::board_data::Board;
use super::column::Column;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Serialize)]
struct BoardRef<'a> {
    columns: &'a [Column],
}

#[derive(Deserialize)]
struct BoardSeed {
    #[serde(default)]
    columns: Vec<Column>,
}

impl Serialize for Board {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        BoardRef {
            columns: &self.columns,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let seed = BoardSeed::deserialize(deserializer)?;
        Board::from_columns(seed.columns).map_err(D::Error::custom)
    }
}
