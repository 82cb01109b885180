//! MoveColumn transition

use crate::error::Rejected;
use crate::store::Transition;
use crate::types::{Board, ColumnId, Noun, Verb};
use serde::{Deserialize, Serialize};

/// Reposition a column into the slot another column currently occupies.
///
/// `from` is taken out of the order and re-inserted at the index `to` held
/// before the removal: dragging left lands in front of `to`, dragging right
/// lands just past it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveColumn {
    /// The column being dragged
    pub from: ColumnId,
    /// The column whose slot it takes
    pub to: ColumnId,
}

impl MoveColumn {
    pub fn new(from: impl Into<ColumnId>, to: impl Into<ColumnId>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

impl Transition for MoveColumn {
    fn verb(&self) -> Verb {
        Verb::Move
    }

    fn noun(&self) -> Noun {
        Noun::Column
    }

    fn apply(&self, board: &Board) -> Result<Board, Rejected> {
        let position = |id: &ColumnId| board.column_order.iter().position(|c| c == id);
        let from_index =
            position(&self.from).ok_or_else(|| Rejected::column_not_found(&self.from))?;
        let to_index = position(&self.to).ok_or_else(|| Rejected::column_not_found(&self.to))?;
        if from_index == to_index {
            return Err(Rejected::NoChange);
        }

        let mut next = board.clone();
        let moved = next.column_order.remove(from_index);
        next.column_order.insert(to_index, moved);
        Ok(next)
    }
}
