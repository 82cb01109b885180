//! Core types for the board

mod board;
mod column;
mod ids;
mod operation;
mod task;

// Re-export all types
pub use board::Board;
pub use column::Column;
pub use ids::{ColumnId, TaskId};
pub use operation::{is_valid_operation, Noun, Verb};
pub use task::Task;
