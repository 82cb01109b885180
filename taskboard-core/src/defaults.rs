//! Built-in defaults: the storage key and the seed board.

use crate::types::{Board, Column, Task};

/// Key of the storage slot holding the persisted board
pub const STORAGE_KEY: &str = "todo-board-v3";

/// The board used when nothing valid has been persisted yet
pub fn seed_board() -> Board {
    Board::new()
        .with_column(
            Column::new("To Do 📝")
                .with_id("column-1")
                .with_tasks(["task-1", "task-3", "task-5"]),
            [
                Task::new("Create new project").with_id("task-1"),
                Task::new("Buy more coffee").with_id("task-3"),
                Task::new("Something else").with_id("task-5"),
            ],
        )
        .with_column(
            Column::new("In Progress 👨‍💻")
                .with_id("column-2")
                .with_tasks(["task-4"]),
            [Task::new("Sleep at night").with_id("task-4")],
        )
        .with_column(
            Column::new("Done ✅").with_id("column-3").with_tasks(["task-2"]),
            [Task::new("Send CV to company")
                .with_id("task-2")
                .completed(true)],
        )
}
