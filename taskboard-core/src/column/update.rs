//! RenameColumn transition

use crate::error::Rejected;
use crate::store::{required_text, Transition};
use crate::types::{Board, ColumnId, Noun, Verb};
use serde::{Deserialize, Serialize};

/// Change a column's title
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameColumn {
    /// The column ID to rename
    pub id: ColumnId,
    /// New title (required, trimmed)
    pub title: String,
}

impl RenameColumn {
    pub fn new(id: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

impl Transition for RenameColumn {
    fn verb(&self) -> Verb {
        Verb::Rename
    }

    fn noun(&self) -> Noun {
        Noun::Column
    }

    fn apply(&self, board: &Board) -> Result<Board, Rejected> {
        let title = required_text(&self.title, "title")?;
        let column = board
            .column(&self.id)
            .ok_or_else(|| Rejected::column_not_found(&self.id))?;
        if column.title == title {
            return Err(Rejected::NoChange);
        }

        let mut renamed = column.clone();
        renamed.title = title;
        let mut next = board.clone();
        next.columns.insert(self.id.clone(), renamed);
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Column;

    fn setup() -> Board {
        Board::new().with_column(Column::new("To Do").with_id("todo"), [])
    }

    #[test]
    fn test_rename_column() {
        let next = RenameColumn::new("todo", "  Backlog ").apply(&setup()).unwrap();
        assert_eq!(next.column(&"todo".into()).unwrap().title, "Backlog");
    }

    #[test]
    fn test_rename_rejections() {
        let board = setup();
        assert_eq!(
            RenameColumn::new("todo", "").apply(&board),
            Err(Rejected::empty("title"))
        );
        assert!(matches!(
            RenameColumn::new("nope", "X").apply(&board),
            Err(Rejected::ColumnNotFound { .. })
        ));
        assert_eq!(
            RenameColumn::new("todo", "To Do").apply(&board),
            Err(Rejected::NoChange)
        );
    }
}
