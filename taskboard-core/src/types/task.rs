//! Task type

use super::ids::TaskId;
use serde::{Deserialize, Serialize};

/// A to-do item on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub content: String,
    #[serde(default)]
    pub is_complete: bool,
}

impl Task {
    /// Create a new incomplete task with a fresh id
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: TaskId::new(),
            content: content.into(),
            is_complete: false,
        }
    }

    /// Use an explicit id
    pub fn with_id(mut self, id: impl Into<TaskId>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the completion flag
    pub fn completed(mut self, is_complete: bool) -> Self {
        self.is_complete = is_complete;
        self
    }

    /// A copy of this task with new content, completion preserved
    pub fn with_content(&self, content: impl Into<String>) -> Self {
        Self {
            id: self.id.clone(),
            content: content.into(),
            is_complete: self.is_complete,
        }
    }

    /// A copy of this task with the completion flag flipped
    pub fn toggled(&self) -> Self {
        Self {
            id: self.id.clone(),
            content: self.content.clone(),
            is_complete: !self.is_complete,
        }
    }
}
