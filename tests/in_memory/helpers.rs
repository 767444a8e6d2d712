//! Shared test helpers for workspace persistence integration tests.

use std::sync::Arc;

use chrono::NaiveDate;
use mockable::DefaultClock;
use rstest::fixture;
use taskboard::board::{
    adapters::memory::InMemoryWorkspaceRepository,
    domain::{Priority, TaskFields},
    ports::SequentialIdGenerator,
    services::{TaskStore, WorkspacePersistenceService},
};

/// Store type used by persistence tests.
pub type TestStore = TaskStore<SequentialIdGenerator, DefaultClock>;

/// Persistence service over the in-memory repository.
pub type MemoryService = WorkspacePersistenceService<InMemoryWorkspaceRepository>;

/// Provides a fresh in-memory repository for each test.
#[fixture]
pub fn repo() -> Arc<InMemoryWorkspaceRepository> {
    Arc::new(InMemoryWorkspaceRepository::new())
}

/// Creates an empty store with deterministic identifiers.
#[must_use]
pub fn empty_store() -> TestStore {
    TaskStore::new(Arc::new(SequentialIdGenerator::new()), Arc::new(DefaultClock))
}

/// Builds a store with two boards, a connected repository, and tasks.
///
/// # Errors
///
/// Returns an error if any store operation fails.
pub fn populated_store() -> Result<TestStore, eyre::Report> {
    let mut store = empty_store();
    let personal = store.create_board("Personal")?.id();
    let todo = store.create_list(personal, "To Do")?.id();
    store.create_list(personal, "Done")?;
    store.create_task(
        personal,
        todo,
        &TaskFields::new("Write report")
            .with_description("Quarterly numbers")
            .with_due_date(
                NaiveDate::from_ymd_opt(2024, 5, 1)
                    .ok_or_else(|| eyre::eyre!("invalid fixture date"))?,
            )
            .with_priority(Priority::High),
    )?;
    store.create_task(personal, todo, &TaskFields::new("Call plumber"))?;
    store.connect_github_repo(personal, "https://github.com/acme/widgets")?;

    let work = store.create_board("Work")?.id();
    store.create_list(work, "Backlog")?;
    store.set_active_board(Some(work))?;
    Ok(store)
}
