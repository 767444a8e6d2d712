//! Shared world state for board store BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::board::{
    domain::{BoardId, ListId, TaskId},
    ports::SequentialIdGenerator,
    services::{TaskStore, TaskStoreError},
};

/// Store type used by the BDD world.
pub type TestStore = TaskStore<SequentialIdGenerator, DefaultClock>;

/// Scenario world for board store behaviour tests.
pub struct BoardWorld {
    pub store: TestStore,
    pub board_id: Option<BoardId>,
    pub lists: HashMap<String, ListId>,
    pub tasks: HashMap<String, TaskId>,
    pub last_error: Option<TaskStoreError>,
}

impl BoardWorld {
    /// Creates a world over an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: TaskStore::new(
                Arc::new(SequentialIdGenerator::new()),
                Arc::new(DefaultClock),
            ),
            board_id: None,
            lists: HashMap::new(),
            tasks: HashMap::new(),
            last_error: None,
        }
    }

    /// Returns the scenario board.
    pub fn board_id(&self) -> Result<BoardId, eyre::Report> {
        self.board_id
            .ok_or_else(|| eyre::eyre!("missing board in scenario world"))
    }

    /// Resolves a list by the title it was created with.
    pub fn list_id(&self, title: &str) -> Result<ListId, eyre::Report> {
        self.lists
            .get(title)
            .copied()
            .ok_or_else(|| eyre::eyre!("unknown list {title:?} in scenario world"))
    }

    /// Resolves a task by the title it was created with.
    pub fn task_id(&self, title: &str) -> Result<TaskId, eyre::Report> {
        self.tasks
            .get(title)
            .copied()
            .ok_or_else(|| eyre::eyre!("unknown task {title:?} in scenario world"))
    }

    /// Creates a list on the scenario board, recording the outcome.
    pub fn create_list(&mut self, title: String) -> Result<(), eyre::Report> {
        let board_id = self.board_id()?;
        let created = self.store.create_list(board_id, title.as_str());
        if let Some(list) = self.record(created) {
            self.lists.insert(title, list.id());
        }
        Ok(())
    }

    /// Connects a repository to the scenario board, recording the outcome.
    pub fn connect_repository(&mut self, url: &str) -> Result<(), eyre::Report> {
        let board_id = self.board_id()?;
        let connected = self.store.connect_github_repo(board_id, url);
        self.record(connected);
        Ok(())
    }

    /// Records the outcome of a store call.
    pub fn record<T>(&mut self, result: Result<T, TaskStoreError>) -> Option<T> {
        match result {
            Ok(value) => {
                self.last_error = None;
                Some(value)
            }
            Err(err) => {
                self.last_error = Some(err);
                None
            }
        }
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Splits a comma-separated step argument into trimmed titles.
pub fn titles(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|title| !title.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}
