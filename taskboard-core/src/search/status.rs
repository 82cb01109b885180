//! Completion-status filter

use crate::types::Task;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Which tasks to keep by completion status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Completed,
    Incomplete,
}

impl StatusFilter {
    /// Check if a task passes this filter
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Completed => task.is_complete,
            Self::Incomplete => !task.is_complete,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::All => "all",
            Self::Completed => "completed",
            Self::Incomplete => "incomplete",
        })
    }
}

/// Unknown status filter name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown status filter '{0}' (expected all, completed or incomplete)")]
pub struct ParseStatusFilterError(String);

impl FromStr for StatusFilter {
    type Err = ParseStatusFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "completed" => Ok(Self::Completed),
            "incomplete" => Ok(Self::Incomplete),
            _ => Err(ParseStatusFilterError(s.to_string())),
        }
    }
}

/// Keep the tasks matching `status`, preserving input order
pub fn filter_by_status<'a, I>(tasks: I, status: StatusFilter) -> Vec<&'a Task>
where
    I: IntoIterator<Item = &'a Task>,
{
    tasks
        .into_iter()
        .filter(|task| status.matches(task))
        .collect()
}
