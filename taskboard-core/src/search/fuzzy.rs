//! Fuzzy search over task content

use crate::config::SearchConfig;
use crate::types::{Task, TaskId};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A matched range of task content, in char offsets, half open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MatchSpan {
    pub start: usize,
    pub end: usize,
}

impl MatchSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Matching tasks and where their content matched
pub type SearchHits = HashMap<TaskId, Vec<MatchSpan>>;

/// Case-insensitive matcher: literal substrings first, skim scoring otherwise.
pub struct FuzzySearch {
    matcher: SkimMatcherV2,
    min_score: i64,
}

impl Default for FuzzySearch {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FuzzySearch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FuzzySearch")
            .field("min_score", &self.min_score)
            .finish_non_exhaustive()
    }
}

impl FuzzySearch {
    pub fn new() -> Self {
        Self {
            matcher: SkimMatcherV2::default().ignore_case(),
            min_score: 0,
        }
    }

    /// Skim matches scoring below `min_score` are dropped
    pub fn with_min_score(mut self, min_score: i64) -> Self {
        self.min_score = min_score;
        self
    }

    pub fn from_config(config: &SearchConfig) -> Self {
        Self::new().with_min_score(config.min_score)
    }

    pub fn min_score(&self) -> i64 {
        self.min_score
    }

    /// Match one piece of content against a query.
    ///
    /// Returns `None` when it does not match. A blank query matches nothing.
    pub fn match_content(&self, content: &str, query: &str) -> Option<Vec<MatchSpan>> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }

        let literal = substring_spans(content, query);
        if !literal.is_empty() {
            return Some(literal);
        }

        let (score, indices) = self.matcher.fuzzy_indices(content, query)?;
        if score < self.min_score {
            return None;
        }
        Some(group_indices(indices))
    }

    /// Search tasks, returning spans for every match keyed by task id
    pub fn search<'a, I>(&self, tasks: I, query: &str) -> SearchHits
    where
        I: IntoIterator<Item = &'a Task>,
    {
        if query.trim().is_empty() {
            return SearchHits::new();
        }
        tasks
            .into_iter()
            .filter_map(|task| {
                self.match_content(&task.content, query)
                    .map(|spans| (task.id.clone(), spans))
            })
            .collect()
    }
}

/// Search tasks with the default matcher.
///
/// A blank query yields an empty map, meaning no search is active.
pub fn fuzzy_search<'a, I>(tasks: I, query: &str) -> SearchHits
where
    I: IntoIterator<Item = &'a Task>,
{
    FuzzySearch::new().search(tasks, query)
}

fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Every non-overlapping case-insensitive occurrence of `query`
fn substring_spans(content: &str, query: &str) -> Vec<MatchSpan> {
    let haystack: Vec<char> = content.chars().map(fold).collect();
    let needle: Vec<char> = query.chars().map(fold).collect();
    let mut spans = Vec::new();
    if needle.is_empty() || needle.len() > haystack.len() {
        return spans;
    }

    let mut i = 0;
    while i + needle.len() <= haystack.len() {
        if haystack[i..i + needle.len()] == needle[..] {
            spans.push(MatchSpan::new(i, i + needle.len()));
            i += needle.len();
        } else {
            i += 1;
        }
    }
    spans
}

/// Collapse matched char indices into contiguous spans
fn group_indices(mut indices: Vec<usize>) -> Vec<MatchSpan> {
    indices.sort_unstable();
    indices.dedup();

    let mut spans: Vec<MatchSpan> = Vec::new();
    for index in indices {
        match spans.last_mut() {
            Some(last) if last.end == index => last.end += 1,
            _ => spans.push(MatchSpan::new(index, index + 1)),
        }
    }
    spans
}
