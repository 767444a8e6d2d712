//! Validated, trimmed, non-empty entity titles.

use super::{BoardDomainError, EntityKind};
use std::fmt;

/// A non-empty title with surrounding whitespace removed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Title(String);

impl Title {
    /// Creates a validated title for the given entity kind.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidTitle`] when the value is empty or
    /// contains only whitespace.
    pub fn new(kind: EntityKind, value: impl Into<String>) -> Result<Self, BoardDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(BoardDomainError::InvalidTitle(kind));
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the title as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Title {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
