//! Kanban board core: state transitions, drag-and-drop resolution, search and storage
//!
//! This crate holds everything behind a single-board kanban UI except the
//! rendering. The board is a normalized value; every change is a pure transition
//! producing a new board, and the view layer only ever reads snapshots.
//!
//! ## Overview
//!
//! - **Normalized state** - Tasks and columns live in id-keyed maps; column order
//!   and per-column task order are plain id lists
//! - **Pure transitions** - Each operation is a command value implementing
//!   [`Transition`]; refused operations leave the board unchanged
//! - **Drag and drop** - [`resolve_drop`] turns a finished drag into a move using
//!   the pointer's position against the target's vertical midpoint
//! - **Search** - Status filtering and fuzzy search with highlight spans
//! - **Persistence** - One JSON slot, seeded on first run or when unreadable
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use taskboard_core::{BoardConfig, BoardSession, StatusFilter, task::AddTask};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = BoardConfig::load()?;
//! let mut session = BoardSession::from_config(&config).await;
//!
//! session.dispatch(&AddTask::new("column-1", "Write release notes")).await;
//!
//! for column in session.view(StatusFilter::Incomplete, "notes").columns {
//!     println!("{}: {}", column.column.title, column.tasks.len());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Storage Format
//!
//! ```text
//! <dir>/<key>.json
//! {
//!   "tasks":       { "<taskId>": { "id", "content", "isComplete" } },
//!   "columns":     { "<columnId>": { "id", "title", "taskIds": [...] } },
//!   "columnOrder": [ "<columnId>", ... ]
//! }
//! ```

pub mod column;
pub mod config;
pub mod defaults;
pub mod dnd;
mod error;
pub mod persistence;
pub mod search;
mod session;
pub mod store;
pub mod task;
pub mod types;

pub use config::BoardConfig;
pub use defaults::{seed_board, STORAGE_KEY};
pub use dnd::{resolve_drop, DragGesture, DragItem, DropEvent, Rect};
pub use error::{BoardError, InvariantViolation, Rejected, Result};
pub use persistence::{BoardStorage, FileStorage, MemoryStorage};
pub use search::{board_view, filter_by_status, fuzzy_search, highlight, MatchSpan, StatusFilter};
pub use session::BoardSession;
pub use store::{BoardStore, Transition};

// Re-export commonly used types
pub use types::{Board, Column, ColumnId, Noun, Task, TaskId, Verb};
