//! AddColumn transition

use crate::error::Rejected;
use crate::store::{required_text, Transition};
use crate::types::{Board, Column, Noun, Verb};
use serde::{Deserialize, Serialize};

/// Append a new, empty column to the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddColumn {
    /// The column display title (required, trimmed)
    pub title: String,
}

impl AddColumn {
    /// Create a new AddColumn command
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl Transition for AddColumn {
    fn verb(&self) -> Verb {
        Verb::Add
    }

    fn noun(&self) -> Noun {
        Noun::Column
    }

    fn apply(&self, board: &Board) -> Result<Board, Rejected> {
        let title = required_text(&self.title, "title")?;
        let column = Column::new(title).with_id(board.fresh_column_id());
        Ok(board.clone().with_column(column, []))
    }
}
