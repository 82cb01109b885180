//! A drag gesture as a short sequence of discrete events.

use super::resolve::{DropEvent, Rect};
use super::DragItem;
use tracing::trace;

/// Tracks one drag from start to drop or cancel.
///
/// Only targets the source can legally be dropped on are tracked as hovered, so
/// `over()` is what a view should highlight.
#[derive(Debug, Clone, PartialEq)]
pub struct DragGesture {
    source: DragItem,
    over: Option<DragItem>,
}

impl DragGesture {
    /// Drag-start
    pub fn start(source: DragItem) -> Self {
        trace!(?source, "drag started");
        Self { source, over: None }
    }

    pub fn source(&self) -> &DragItem {
        &self.source
    }

    /// The drop target currently under the pointer
    pub fn over(&self) -> Option<&DragItem> {
        self.over.as_ref()
    }

    pub fn is_over(&self, target: &DragItem) -> bool {
        self.over.as_ref() == Some(target)
    }

    /// Pointer entered a drop target
    pub fn enter(&mut self, target: DragItem) {
        if self.source.can_drop_on(&target) {
            self.over = Some(target);
        }
    }

    /// Pointer left a drop target. Leaving a target other than the hovered one
    /// (events from nested targets can arrive out of order) changes nothing.
    pub fn leave(&mut self, target: &DragItem) {
        if self.is_over(target) {
            self.over = None;
        }
    }

    /// Drop: end the gesture over the hovered target, if any
    pub fn drop_at(self, pointer_y: f64, target_rect: Option<Rect>) -> DropEvent {
        DropEvent {
            source: self.source,
            target: self.over,
            pointer_y,
            target_rect,
        }
    }

    /// End the gesture without dropping; nothing changes
    pub fn cancel(self) {
        trace!(source = ?self.source, "drag cancelled");
    }
}
