//! Read-only derivations over tasks: status filter, fuzzy search and highlighting.
//!
//! Nothing here mutates a board; the results are recomputed from a snapshot.

mod fuzzy;
mod highlight;
mod status;
mod view;

pub use fuzzy::{fuzzy_search, FuzzySearch, MatchSpan, SearchHits};
pub use highlight::{highlight, Segment};
pub use status::{filter_by_status, ParseStatusFilterError, StatusFilter};
pub use view::{board_view, visible_tasks, BoardView, ColumnView, TaskView};
