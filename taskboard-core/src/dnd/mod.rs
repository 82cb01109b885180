//! Drag-and-drop: drag descriptors, drop resolution and gesture tracking.
//!
//! A view reports what is being dragged and what it was dropped on as closed
//! [`DragItem`] values. [`resolve_drop`] turns a finished gesture into the store
//! transition it stands for, or nothing when the combination is not a move.

mod gesture;
mod resolve;

pub use gesture::DragGesture;
pub use resolve::{placement, resolve_drop, BoardMove, DropEvent, DropPlacement, Rect};

use crate::types::{ColumnId, TaskId};
use serde::{Deserialize, Serialize};

/// A drag source or drop target
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    tag = "kind",
    rename_all = "kebab-case",
    rename_all_fields = "camelCase"
)]
pub enum DragItem {
    /// A task card inside a column
    Task { task_id: TaskId, column_id: ColumnId },
    /// A column header
    Column { column_id: ColumnId },
    /// The empty area of a column with no cards to drop onto
    EmptyColumn { column_id: ColumnId },
}

impl DragItem {
    pub fn task(task_id: impl Into<TaskId>, column_id: impl Into<ColumnId>) -> Self {
        Self::Task {
            task_id: task_id.into(),
            column_id: column_id.into(),
        }
    }

    pub fn column(column_id: impl Into<ColumnId>) -> Self {
        Self::Column {
            column_id: column_id.into(),
        }
    }

    pub fn empty_column(column_id: impl Into<ColumnId>) -> Self {
        Self::EmptyColumn {
            column_id: column_id.into(),
        }
    }

    /// The column this item belongs to
    pub fn column_id(&self) -> &ColumnId {
        match self {
            Self::Task { column_id, .. } => column_id,
            Self::Column { column_id } => column_id,
            Self::EmptyColumn { column_id } => column_id,
        }
    }

    /// Whether dropping `self` onto `target` can ever move something
    pub fn can_drop_on(&self, target: &DragItem) -> bool {
        matches!(
            (self, target),
            (Self::Column { .. }, Self::Column { .. })
                | (Self::Task { .. }, Self::Task { .. })
                | (Self::Task { .. }, Self::EmptyColumn { .. })
        )
    }
}
