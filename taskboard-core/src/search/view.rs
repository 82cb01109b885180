//! Combined status + search view of a board

use super::fuzzy::{FuzzySearch, MatchSpan, SearchHits};
use super::status::StatusFilter;
use crate::types::{Board, Column, Task};

/// A visible task with the spans its content matched
#[derive(Debug, Clone, PartialEq)]
pub struct TaskView<'a> {
    pub task: &'a Task,
    pub matches: Vec<MatchSpan>,
}

/// A column and its visible tasks, in column order
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnView<'a> {
    pub column: &'a Column,
    pub tasks: Vec<TaskView<'a>>,
}

/// What a board looks like under a status filter and search query
#[derive(Debug, Clone, PartialEq)]
pub struct BoardView<'a> {
    pub columns: Vec<ColumnView<'a>>,
    /// Whether a non-blank query restricted the tasks
    pub searching: bool,
}

impl<'a> BoardView<'a> {
    pub fn build(
        board: &'a Board,
        status: StatusFilter,
        query: &str,
        search: &FuzzySearch,
    ) -> Self {
        let searching = !query.trim().is_empty();
        let hits = search.search(board.tasks.values(), query);

        let columns = board
            .ordered_columns()
            .map(|column| ColumnView {
                column,
                tasks: visible(board.column_tasks(&column.id), status, searching, &hits),
            })
            .collect();

        Self { columns, searching }
    }

    /// Number of visible tasks across all columns
    pub fn task_count(&self) -> usize {
        self.columns.iter().map(|c| c.tasks.len()).sum()
    }
}

fn visible<'a>(
    tasks: impl IntoIterator<Item = &'a Task>,
    status: StatusFilter,
    searching: bool,
    hits: &SearchHits,
) -> Vec<TaskView<'a>> {
    tasks
        .into_iter()
        .filter(|task| status.matches(task))
        .filter_map(|task| match hits.get(&task.id) {
            Some(spans) => Some(TaskView {
                task,
                matches: spans.clone(),
            }),
            None if !searching => Some(TaskView {
                task,
                matches: Vec::new(),
            }),
            None => None,
        })
        .collect()
}

/// Status filter first, then restrict to search hits when the query is not blank
pub fn visible_tasks<'a, I>(tasks: I, status: StatusFilter, query: &str) -> Vec<TaskView<'a>>
where
    I: IntoIterator<Item = &'a Task>,
{
    let tasks: Vec<&'a Task> = tasks.into_iter().collect();
    let hits = FuzzySearch::new().search(tasks.iter().copied(), query);
    visible(tasks, status, !query.trim().is_empty(), &hits)
}

/// Per-column view of `board` with the default matcher
pub fn board_view<'a>(board: &'a Board, status: StatusFilter, query: &str) -> BoardView<'a> {
    BoardView::build(board, status, query, &FuzzySearch::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::seed_board;

    fn ids(view: &ColumnView<'_>) -> Vec<String> {
        view.tasks.iter().map(|t| t.task.id.to_string()).collect()
    }

    #[test]
    fn test_unfiltered_view_follows_board_order() {
        let board = seed_board();
        let view = board_view(&board, StatusFilter::All, "");
        assert!(!view.searching);
        assert_eq!(view.columns.len(), 3);
        assert_eq!(ids(&view.columns[0]), ["task-1", "task-3", "task-5"]);
        assert_eq!(ids(&view.columns[2]), ["task-2"]);
        assert_eq!(view.task_count(), 5);
    }

    #[test]
    fn test_status_then_search() {
        let board = seed_board();
        let view = board_view(&board, StatusFilter::Incomplete, "e");
        assert!(view.searching);
        // task-2 contains 'e' but is complete
        assert!(view.columns[2].tasks.is_empty());
        assert!(view
            .columns
            .iter()
            .flat_map(|c| &c.tasks)
            .all(|t| !t.task.is_complete && !t.matches.is_empty()));
    }

    #[test]
    fn test_search_keeps_empty_columns() {
        let board = seed_board();
        let view = board_view(&board, StatusFilter::All, "coffee");
        assert_eq!(view.columns.len(), 3);
        assert_eq!(ids(&view.columns[0]), ["task-3"]);
        assert!(view.columns[1].tasks.is_empty());
        assert_eq!(view.columns[0].tasks[0].matches, [MatchSpan::new(9, 15)]);
    }

    #[test]
    fn test_visible_tasks_on_flat_list() {
        let tasks = vec![
            Task::new("alpha").with_id("1").completed(true),
            Task::new("beta").with_id("2"),
        ];
        let shown = visible_tasks(&tasks, StatusFilter::Completed, "");
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].task.id.as_str(), "1");

        assert!(visible_tasks(&tasks, StatusFilter::Completed, "beta").is_empty());
    }
}
