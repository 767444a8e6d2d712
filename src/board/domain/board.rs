//! Board aggregate root.

use super::{BoardDomainError, BoardId, EntityKind, GitHubRepoUrl, ListId, TaskList, Title};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::hash::{Hash, Hasher};

/// Top-level container of ordered lists, optionally linked to a GitHub
/// repository.
///
/// Equality and hashing use the identifier only.
#[derive(Debug, Clone)]
pub struct Board {
    id: BoardId,
    title: Title,
    lists: Vec<TaskList>,
    github_repo: Option<GitHubRepoUrl>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted board.
#[derive(Debug, Clone)]
pub struct PersistedBoardData {
    /// Persisted board identifier.
    pub id: BoardId,
    /// Persisted raw title.
    pub title: String,
    /// Persisted lists in display order.
    pub lists: Vec<TaskList>,
    /// Persisted raw repository URL, if any.
    pub github_repo: Option<String>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Board {
    /// Creates an empty board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidTitle`] when the title is empty.
    pub fn new(
        id: BoardId,
        title: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<Self, BoardDomainError> {
        let validated = Title::new(EntityKind::Board, title)?;
        let timestamp = clock.utc();
        Ok(Self {
            id,
            title: validated,
            lists: Vec::new(),
            github_repo: None,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Reconstructs a board from persisted storage, re-validating the title
    /// and repository URL.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidTitle`] or
    /// [`BoardDomainError::InvalidRepoUrl`] for invalid stored values.
    pub fn from_persisted(data: PersistedBoardData) -> Result<Self, BoardDomainError> {
        let github_repo = data
            .github_repo
            .as_deref()
            .map(GitHubRepoUrl::parse)
            .transpose()?;
        Ok(Self {
            id: data.id,
            title: Title::new(EntityKind::Board, data.title)?,
            lists: data.lists,
            github_repo,
            created_at: data.created_at,
            updated_at: data.updated_at,
        })
    }

    /// Returns the board identifier.
    #[must_use]
    pub const fn id(&self) -> BoardId {
        self.id
    }

    /// Returns the board title.
    #[must_use]
    pub const fn title(&self) -> &Title {
        &self.title
    }

    /// Returns the lists in display order.
    #[must_use]
    pub fn lists(&self) -> &[TaskList] {
        &self.lists
    }

    /// Returns the connected repository, if any.
    #[must_use]
    pub const fn github_repo(&self) -> Option<&GitHubRepoUrl> {
        self.github_repo.as_ref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Finds a list by identifier.
    #[must_use]
    pub fn list(&self, list_id: ListId) -> Option<&TaskList> {
        self.lists.iter().find(|list| list.id() == list_id)
    }

    /// Returns the position of a list within the board.
    #[must_use]
    pub fn position_of(&self, list_id: ListId) -> Option<usize> {
        self.lists.iter().position(|list| list.id() == list_id)
    }

    pub(crate) fn list_mut(&mut self, list_id: ListId) -> Option<&mut TaskList> {
        self.lists.iter_mut().find(|list| list.id() == list_id)
    }

    pub(crate) fn rename(&mut self, title: Title, clock: &impl Clock) {
        self.title = title;
        self.touch(clock);
    }

    pub(crate) fn push_list(&mut self, list: TaskList, clock: &impl Clock) {
        self.lists.push(list);
        self.touch(clock);
    }

    /// Removes a list together with its tasks, preserving the order of the
    /// remaining lists.
    pub(crate) fn remove_list(&mut self, list_id: ListId, clock: &impl Clock) -> Option<TaskList> {
        let position = self.position_of(list_id)?;
        let removed = self.lists.remove(position);
        self.touch(clock);
        Some(removed)
    }

    /// Moves a list to `index`, clamped to the last position.
    pub(crate) fn move_list(&mut self, list_id: ListId, index: usize, clock: &impl Clock) -> bool {
        let Some(position) = self.position_of(list_id) else {
            return false;
        };
        let list = self.lists.remove(position);
        let clamped = index.min(self.lists.len());
        self.lists.insert(clamped, list);
        self.touch(clock);
        true
    }

    pub(crate) fn set_github_repo(&mut self, repo: Option<GitHubRepoUrl>, clock: &impl Clock) {
        self.github_repo = repo;
        self.touch(clock);
    }

    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
