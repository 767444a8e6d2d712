//! Ordered task columns within a board.

use super::{BoardDomainError, EntityKind, ListId, Task, TaskId, Title};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::hash::{Hash, Hasher};

/// An ordered column of tasks, owned by exactly one board.
///
/// Task order is insertion order unless a task is explicitly moved.
/// Equality and hashing use the identifier only.
#[derive(Debug, Clone)]
pub struct TaskList {
    id: ListId,
    title: Title,
    tasks: Vec<Task>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted list.
#[derive(Debug, Clone)]
pub struct PersistedListData {
    /// Persisted list identifier.
    pub id: ListId,
    /// Persisted raw title.
    pub title: String,
    /// Persisted tasks in display order.
    pub tasks: Vec<Task>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl TaskList {
    /// Creates an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidTitle`] when the title is empty.
    pub fn new(
        id: ListId,
        title: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<Self, BoardDomainError> {
        let validated = Title::new(EntityKind::List, title)?;
        let timestamp = clock.utc();
        Ok(Self {
            id,
            title: validated,
            tasks: Vec::new(),
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Reconstructs a list from persisted storage.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidTitle`] when the stored title is
    /// empty.
    pub fn from_persisted(data: PersistedListData) -> Result<Self, BoardDomainError> {
        Ok(Self {
            id: data.id,
            title: Title::new(EntityKind::List, data.title)?,
            tasks: data.tasks,
            created_at: data.created_at,
            updated_at: data.updated_at,
        })
    }

    /// Returns the list identifier.
    #[must_use]
    pub const fn id(&self) -> ListId {
        self.id
    }

    /// Returns the list title.
    #[must_use]
    pub const fn title(&self) -> &Title {
        &self.title
    }

    /// Returns the tasks in display order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
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

    /// Finds a task by identifier.
    #[must_use]
    pub fn task(&self, task_id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == task_id)
    }

    /// Returns the position of a task within the list.
    #[must_use]
    pub fn position_of(&self, task_id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id() == task_id)
    }

    pub(crate) fn task_mut(&mut self, task_id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id() == task_id)
    }

    pub(crate) fn rename(&mut self, title: Title, clock: &impl Clock) {
        self.title = title;
        self.touch(clock);
    }

    pub(crate) fn push_task(&mut self, task: Task, clock: &impl Clock) {
        self.tasks.push(task);
        self.touch(clock);
    }

    /// Inserts a task at `index`, clamped to the end of the list.
    pub(crate) fn insert_task(&mut self, index: usize, task: Task, clock: &impl Clock) {
        let clamped = index.min(self.tasks.len());
        self.tasks.insert(clamped, task);
        self.touch(clock);
    }

    /// Removes a task, preserving the order of the remaining tasks.
    pub(crate) fn remove_task(&mut self, task_id: TaskId, clock: &impl Clock) -> Option<Task> {
        let position = self.position_of(task_id)?;
        let removed = self.tasks.remove(position);
        self.touch(clock);
        Some(removed)
    }

    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}

impl PartialEq for TaskList {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TaskList {}

impl Hash for TaskList {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
