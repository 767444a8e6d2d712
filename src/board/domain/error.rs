//! Error types for board domain validation and parsing.

use std::fmt;
use thiserror::Error;

/// The kind of entity a validation failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// A board.
    Board,
    /// A list (board column).
    List,
    /// A task card.
    Task,
}

impl EntityKind {
    /// Returns the entity kind in lowercase human-readable form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Board => "board",
            Self::List => "list",
            Self::Task => "task",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned while constructing or restoring board domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The title is empty after trimming.
    #[error("{0} title must not be empty")]
    InvalidTitle(EntityKind),

    /// The priority value is not one of `low`, `medium`, or `high`.
    #[error("invalid priority '{0}', expected low, medium, or high")]
    InvalidPriority(String),

    /// The repository URL does not have the `github.com/<owner>/<repo>` shape.
    #[error("invalid GitHub repository URL '{0}'")]
    InvalidRepoUrl(String),

    /// The due date is not an ISO `YYYY-MM-DD` calendar date.
    #[error("invalid due date '{0}', expected YYYY-MM-DD")]
    InvalidDueDate(String),

    /// A form field name is not part of the editable task field set.
    #[error("unknown task field '{0}'")]
    UnknownTaskField(String),

    /// Persisted workspace data violates a structural invariant.
    #[error("corrupt workspace: {0}")]
    CorruptWorkspace(String),
}
