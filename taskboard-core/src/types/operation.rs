//! Operation vocabulary: every transition is a verb applied to a noun.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What a transition does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verb {
    Add,
    Edit,
    Toggle,
    Rename,
    Move,
    Delete,
}

/// What a transition acts on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Noun {
    Task,
    Column,
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Add => "add",
            Self::Edit => "edit",
            Self::Toggle => "toggle",
            Self::Rename => "rename",
            Self::Move => "move",
            Self::Delete => "delete",
        })
    }
}

impl fmt::Display for Noun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Task => "task",
            Self::Column => "column",
        })
    }
}

/// Check whether a verb/noun pair names a transition the store supports
pub fn is_valid_operation(verb: Verb, noun: Noun) -> bool {
    matches!(
        (verb, noun),
        (Verb::Add | Verb::Edit | Verb::Toggle | Verb::Move | Verb::Delete, Noun::Task)
            | (Verb::Add | Verb::Rename | Verb::Move | Verb::Delete, Noun::Column)
    )
}
