//! Task cards and their editable field set.

use super::{BoardDomainError, EntityKind, Priority, TaskId, Title};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// The closed set of task fields a caller may edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskField {
    /// The task title.
    Title,
    /// The free-form description.
    Description,
    /// The optional due date.
    DueDate,
    /// The priority level.
    Priority,
}

impl TaskField {
    /// Returns the field name as used by form input.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::DueDate => "dueDate",
            Self::Priority => "priority",
        }
    }
}

impl FromStr for TaskField {
    type Err = BoardDomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "title" => Ok(Self::Title),
            "description" => Ok(Self::Description),
            "dueDate" | "due_date" => Ok(Self::DueDate),
            "priority" => Ok(Self::Priority),
            _ => Err(BoardDomainError::UnknownTaskField(s.to_owned())),
        }
    }
}

impl fmt::Display for TaskField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Editable task content used for both creation and whole-record updates.
///
/// The title is kept as raw input and validated when the fields are
/// committed to a [`Task`], so a form may pass through an empty title while
/// it is being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskFields {
    title: String,
    description: String,
    due_date: Option<NaiveDate>,
    priority: Priority,
}

impl TaskFields {
    /// Creates task fields with the given title and default values for the
    /// rest: empty description, no due date, medium priority.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            due_date: None,
            priority: Priority::default(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Applies loosely typed form input to a single field.
    ///
    /// An empty due date clears it.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidDueDate`] or
    /// [`BoardDomainError::InvalidPriority`] when the value cannot be parsed
    /// for the field. The fields are left unchanged on error.
    pub fn apply(&mut self, field: TaskField, raw: &str) -> Result<(), BoardDomainError> {
        match field {
            TaskField::Title => raw.clone_into(&mut self.title),
            TaskField::Description => raw.clone_into(&mut self.description),
            TaskField::DueDate => self.due_date = parse_due_date(raw)?,
            TaskField::Priority => self.priority = Priority::try_from(raw)?,
        }
        Ok(())
    }

    /// Applies form input keyed by field name.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::UnknownTaskField`] for names outside the
    /// editable field set, or the errors of [`TaskFields::apply`].
    pub fn apply_named(&mut self, name: &str, raw: &str) -> Result<(), BoardDomainError> {
        let field = TaskField::from_str(name)?;
        self.apply(field, raw)
    }

    /// Returns the raw title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    fn validated_title(&self) -> Result<Title, BoardDomainError> {
        Title::new(EntityKind::Task, self.title.as_str())
    }
}

fn parse_due_date(raw: &str) -> Result<Option<NaiveDate>, BoardDomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, DUE_DATE_FORMAT)
        .map(Some)
        .map_err(|_| BoardDomainError::InvalidDueDate(raw.to_owned()))
}

/// A unit of work owned by exactly one list.
///
/// Equality and hashing use the identifier only.
#[derive(Debug, Clone)]
pub struct Task {
    id: TaskId,
    title: Title,
    description: String,
    due_date: Option<NaiveDate>,
    priority: Priority,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted editable fields.
    pub fields: TaskFields,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a task from editable fields.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidTitle`] when the title is empty.
    pub fn new(
        id: TaskId,
        fields: &TaskFields,
        clock: &impl Clock,
    ) -> Result<Self, BoardDomainError> {
        let title = fields.validated_title()?;
        let timestamp = clock.utc();
        Ok(Self {
            id,
            title,
            description: fields.description.clone(),
            due_date: fields.due_date,
            priority: fields.priority,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Reconstructs a task from persisted storage.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidTitle`] when the stored title is
    /// empty.
    pub fn from_persisted(data: PersistedTaskData) -> Result<Self, BoardDomainError> {
        let title = data.fields.validated_title()?;
        Ok(Self {
            id: data.id,
            title,
            description: data.fields.description,
            due_date: data.fields.due_date,
            priority: data.fields.priority,
            created_at: data.created_at,
            updated_at: data.updated_at,
        })
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &Title {
        &self.title
    }

    /// Returns the description; empty when unset.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
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

    /// Returns an editable copy of the task's fields.
    #[must_use]
    pub fn fields(&self) -> TaskFields {
        TaskFields {
            title: self.title.as_str().to_owned(),
            description: self.description.clone(),
            due_date: self.due_date,
            priority: self.priority,
        }
    }

    /// Replaces every editable field.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidTitle`] when the new title is empty;
    /// the task is left unchanged.
    pub(crate) fn replace_fields(
        &mut self,
        fields: &TaskFields,
        clock: &impl Clock,
    ) -> Result<(), BoardDomainError> {
        let title = fields.validated_title()?;
        self.title = title;
        fields.description.clone_into(&mut self.description);
        self.due_date = fields.due_date;
        self.priority = fields.priority;
        self.updated_at = clock.utc();
        Ok(())
    }
}

impl PartialEq for Task {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Task {}

impl Hash for Task {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
