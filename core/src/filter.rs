//! Query parsing and the pure todo filter.
//!
//! # Design
//! A `Query` can only be obtained through [`Query::parse`], which applies the
//! configured [`EmptyQuery`] policy. The filter itself is therefore total:
//! it never has to decide what a blank query means. Results borrow from the
//! source slice, so the filtered view is a subset of the collection by
//! identity and preserves its order.

use crate::error::ValidationError;
use crate::types::Todo;

/// What a blank (empty or whitespace-only) query means.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmptyQuery {
    /// Refuse the submission with [`ValidationError::Required`].
    #[default]
    Reject,
    /// Accept it; a blank query matches every title, so the full collection
    /// is shown.
    ShowAll,
}

/// A validated search query, already trimmed and lower-cased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    needle: String,
}

impl Query {
    pub fn parse(raw: &str, policy: EmptyQuery) -> Result<Self, ValidationError> {
        let needle = raw.trim().to_lowercase();
        if needle.is_empty() && policy == EmptyQuery::Reject {
            return Err(ValidationError::Required);
        }
        Ok(Self { needle })
    }

    pub fn as_str(&self) -> &str {
        &self.needle
    }

    pub fn is_blank(&self) -> bool {
        self.needle.is_empty()
    }

    /// Title substring (case-insensitive), or exact decimal `userId`, or
    /// exact decimal `id`.
    pub fn matches(&self, todo: &Todo) -> bool {
        todo.title.to_lowercase().contains(&self.needle)
            || todo.user_id.to_string() == self.needle
            || todo.id.to_string() == self.needle
    }
}

/// Ordered subsequence of `todos` matching `query`.
pub fn filter_todos<'a>(todos: &'a [Todo], query: &Query) -> Vec<&'a Todo> {
    todos.iter().filter(|todo| query.matches(todo)).collect()
}
