//! Property-based tests for board transitions
//!
//! Random sequences of operations, many of them referring to missing ids or
//! carrying blank text, are applied to the seed board. Every intermediate board
//! must stay structurally valid.

use proptest::prelude::*;
use taskboard_core::store::{
    add_column, add_task, delete_column, delete_task, edit_task_content, move_column, move_task,
    rename_column, toggle_task_complete,
};
use taskboard_core::task::TaskAnchor;
use taskboard_core::{seed_board, Board, ColumnId, TaskId};

#[derive(Debug, Clone)]
enum Op {
    AddTask(usize, String),
    EditTask(usize, String),
    Toggle(usize),
    DeleteTask(usize),
    AddColumn(String),
    RenameColumn(usize, String),
    DeleteColumn(usize),
    MoveColumn(usize, usize),
    MoveTask {
        task: usize,
        from: Option<usize>,
        to: usize,
        anchor: Option<usize>,
    },
}

/// Short text, sometimes blank
fn text() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[a-zA-Z ✅]{0,12}").expect("Valid regex for text")
}

fn op() -> impl Strategy<Value = Op> {
    let i = || 0usize..16;
    prop_oneof![
        (i(), text()).prop_map(|(c, s)| Op::AddTask(c, s)),
        (i(), text()).prop_map(|(t, s)| Op::EditTask(t, s)),
        i().prop_map(Op::Toggle),
        i().prop_map(Op::DeleteTask),
        text().prop_map(Op::AddColumn),
        (i(), text()).prop_map(|(c, s)| Op::RenameColumn(c, s)),
        i().prop_map(Op::DeleteColumn),
        (i(), i()).prop_map(|(a, b)| Op::MoveColumn(a, b)),
        (i(), prop::option::of(i()), i(), prop::option::of(i())).prop_map(
            |(task, from, to, anchor)| Op::MoveTask {
                task,
                from,
                to,
                anchor
            }
        ),
    ]
}

/// Pick an existing id, or a missing one when the selector runs past the end
fn pick<T: Clone + From<&'static str>>(ids: &[T], selector: usize) -> T {
    ids.get(selector % (ids.len() + 1))
        .cloned()
        .unwrap_or_else(|| T::from("ghost"))
}

fn task_ids(board: &Board) -> Vec<TaskId> {
    board.tasks.keys().cloned().collect()
}

fn apply(board: &Board, op: &Op) -> Board {
    let tasks = task_ids(board);
    let columns = board.column_order.clone();
    match op {
        Op::AddTask(c, s) => add_task(board, &pick(&columns, *c), s),
        Op::EditTask(t, s) => edit_task_content(board, &pick(&tasks, *t), s),
        Op::Toggle(t) => toggle_task_complete(board, &pick(&tasks, *t)),
        Op::DeleteTask(t) => delete_task(board, &pick(&tasks, *t)),
        Op::AddColumn(s) => add_column(board, s),
        Op::RenameColumn(c, s) => rename_column(board, &pick(&columns, *c), s),
        Op::DeleteColumn(c) => delete_column(board, &pick(&columns, *c)),
        Op::MoveColumn(a, b) => move_column(board, &pick(&columns, *a), &pick(&columns, *b)),
        Op::MoveTask {
            task,
            from,
            to,
            anchor,
        } => {
            let task = pick(&tasks, *task);
            let from = match from {
                Some(c) => pick(&columns, *c),
                None => board
                    .column_of(&task)
                    .map(|c| c.id.clone())
                    .unwrap_or_else(|| ColumnId::from("ghost")),
            };
            let anchor = match anchor {
                Some(a) => TaskAnchor::Before(pick(&tasks, *a)),
                None => TaskAnchor::End,
            };
            move_task(board, &task, &from, &pick(&columns, *to), anchor)
        }
    }
}

proptest! {
    /// Property: no sequence of operations breaks the board's structure
    #[test]
    fn prop_transitions_preserve_invariants(ops in prop::collection::vec(op(), 0..40)) {
        let mut board = seed_board();
        for op in &ops {
            board = apply(&board, op);
            prop_assert_eq!(board.validate(), Ok(()), "after {:?}", op);
        }
    }

    /// Property: stored text is never blank and never padded
    #[test]
    fn prop_text_is_trimmed_and_non_empty(ops in prop::collection::vec(op(), 0..40)) {
        let mut board = seed_board();
        for op in &ops {
            board = apply(&board, op);
        }
        for task in board.tasks.values() {
            prop_assert!(!task.content.is_empty());
            prop_assert_eq!(task.content.trim(), task.content.as_str());
        }
        for column in board.columns.values() {
            prop_assert!(!column.title.is_empty());
            prop_assert_eq!(column.title.trim(), column.title.as_str());
        }
    }

    /// Property: repeating a task move changes nothing the second time
    #[test]
    fn prop_move_task_is_idempotent(
        setup in prop::collection::vec(op(), 0..20),
        task in 0usize..16,
        to in 0usize..16,
        anchor in prop::option::of(0usize..16),
    ) {
        let mut board = seed_board();
        for op in &setup {
            board = apply(&board, op);
        }
        let tasks = task_ids(&board);
        let task_id = pick(&tasks, task);
        let to = pick(&board.column_order, to);
        let anchor = anchor
            .map(|a| TaskAnchor::Before(pick(&tasks, a)))
            .unwrap_or(TaskAnchor::End);
        let holder = |b: &Board| {
            b.column_of(&task_id)
                .map(|c| c.id.clone())
                .unwrap_or_else(|| ColumnId::from("ghost"))
        };

        let once = move_task(&board, &task_id, &holder(&board), &to, anchor.clone());
        let twice = move_task(&once, &task_id, &holder(&once), &to, anchor);
        prop_assert_eq!(once, twice);
    }

    /// Property: deleting a column deletes exactly the tasks it held
    #[test]
    fn prop_delete_column_cascades(
        setup in prop::collection::vec(op(), 0..20),
        column in 0usize..16,
    ) {
        let mut board = seed_board();
        for op in &setup {
            board = apply(&board, op);
        }
        prop_assume!(!board.column_order.is_empty());
        let column_id = board.column_order[column % board.column_order.len()].clone();
        let held = board.column(&column_id).map(|c| c.task_ids.clone()).unwrap_or_default();

        let next = delete_column(&board, &column_id);
        prop_assert!(next.column(&column_id).is_none());
        prop_assert!(!next.column_order.contains(&column_id));
        for id in &held {
            prop_assert!(next.task(id).is_none());
        }
        prop_assert_eq!(next.tasks.len(), board.tasks.len() - held.len());
    }
}

#[test]
fn test_rejected_operations_return_equal_board() {
    let board = seed_board();
    let ghost_task = TaskId::from("ghost");
    let ghost_column = ColumnId::from("ghost");

    assert_eq!(add_task(&board, &ghost_column, "x"), board);
    assert_eq!(add_task(&board, &"column-1".into(), "   "), board);
    assert_eq!(edit_task_content(&board, &ghost_task, "x"), board);
    assert_eq!(toggle_task_complete(&board, &ghost_task), board);
    assert_eq!(delete_task(&board, &ghost_task), board);
    assert_eq!(add_column(&board, ""), board);
    assert_eq!(rename_column(&board, &ghost_column, "x"), board);
    assert_eq!(delete_column(&board, &ghost_column), board);
    assert_eq!(move_column(&board, &ghost_column, &"column-1".into()), board);
    assert_eq!(
        move_task(
            &board,
            &"task-1".into(),
            &"column-2".into(),
            &"column-3".into(),
            TaskAnchor::End
        ),
        board
    );
}
