//! Drop resolution: from a finished drag to a store transition.

use super::DragItem;
use crate::column::MoveColumn;
use crate::error::Rejected;
use crate::store::Transition;
use crate::task::{MoveTask, TaskAnchor};
use crate::types::{Board, Noun, Verb};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Vertical extent of the drop target element, in the same space as the pointer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub top: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// Vertical midpoint, `(top + bottom) / 2`
    pub fn midpoint(&self) -> f64 {
        (self.top + self.bottom) / 2.0
    }
}

/// Which side of the target task a dropped task lands on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropPlacement {
    Before,
    After,
}

/// Midpoint tie-break: a pointer strictly below the target's midpoint lands
/// after it, anything else lands before it.
pub fn placement(pointer_y: f64, target: Rect) -> DropPlacement {
    if pointer_y > target.midpoint() {
        DropPlacement::After
    } else {
        DropPlacement::Before
    }
}

/// Everything known at the moment of a drop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropEvent {
    pub source: DragItem,
    /// Innermost drop target under the pointer, if any
    pub target: Option<DragItem>,
    pub pointer_y: f64,
    /// Geometry of the target element, when it could be measured
    pub target_rect: Option<Rect>,
}

impl DropEvent {
    pub fn new(source: DragItem, target: Option<DragItem>, pointer_y: f64) -> Self {
        Self {
            source,
            target,
            pointer_y,
            target_rect: None,
        }
    }

    pub fn with_target_rect(mut self, rect: Rect) -> Self {
        self.target_rect = Some(rect);
        self
    }
}

/// A move produced by a drop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardMove {
    Column(MoveColumn),
    Task(MoveTask),
}

impl Transition for BoardMove {
    fn verb(&self) -> Verb {
        Verb::Move
    }

    fn noun(&self) -> Noun {
        match self {
            Self::Column(_) => Noun::Column,
            Self::Task(_) => Noun::Task,
        }
    }

    fn apply(&self, board: &Board) -> Result<Board, Rejected> {
        match self {
            Self::Column(cmd) => cmd.apply(board),
            Self::Task(cmd) => cmd.apply(board),
        }
    }
}

/// Resolve a drop into the transition it stands for.
///
/// Reads the board only to find the task following the target when a card is
/// dropped on the lower half of another card. Returns `None` for drops that are
/// not moves: no target, an unsupported source/target pair, or a target task no
/// longer in its column.
pub fn resolve_drop(board: &Board, event: &DropEvent) -> Option<BoardMove> {
    let Some(target) = &event.target else {
        trace!(source = ?event.source, "drop without target ignored");
        return None;
    };

    let resolved = match (&event.source, target) {
        (DragItem::Column { column_id: from }, DragItem::Column { column_id: to }) => {
            Some(BoardMove::Column(MoveColumn::new(from, to)))
        }
        (
            DragItem::Task {
                task_id,
                column_id: from,
            },
            DragItem::Task {
                task_id: target_task,
                column_id: to,
            },
        ) => {
            let side = event
                .target_rect
                .map(|rect| placement(event.pointer_y, rect))
                .unwrap_or(DropPlacement::Before);
            let anchor = match side {
                DropPlacement::Before => Some(TaskAnchor::Before(target_task.clone())),
                DropPlacement::After => board.column(to).and_then(|column| {
                    if !column.contains(target_task) {
                        return None;
                    }
                    Some(match column.task_after(target_task) {
                        Some(next) => TaskAnchor::Before(next.clone()),
                        None => TaskAnchor::End,
                    })
                }),
            };
            anchor.map(|anchor| BoardMove::Task(MoveTask::new(task_id, from, to, anchor)))
        }
        (
            DragItem::Task {
                task_id,
                column_id: from,
            },
            DragItem::EmptyColumn { column_id: to },
        ) => Some(BoardMove::Task(MoveTask::to_end(task_id, from, to))),
        _ => None,
    };

    trace!(source = ?event.source, ?target, ?resolved, "drop resolved");
    resolved
}
