//! Task transitions

mod add;
mod complete;
mod delete;
mod mv;
mod update;

pub use add::AddTask;
pub use complete::ToggleTask;
pub use delete::DeleteTask;
pub use mv::{MoveTask, TaskAnchor};
pub use update::EditTask;
