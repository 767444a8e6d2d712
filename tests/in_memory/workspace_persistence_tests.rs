//! Save and load behaviour of the workspace persistence service.

use std::sync::Arc;

use super::helpers::{MemoryService, empty_store, populated_store, repo};
use mockable::DefaultClock;
use rstest::rstest;
use taskboard::board::{
    adapters::memory::InMemoryWorkspaceRepository,
    domain::TaskFields,
    ports::{SequentialIdGenerator, WorkspaceRepositoryError},
    services::{StoreConfig, WorkspacePersistenceError, WorkspacePersistenceService},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn load_returns_none_before_first_save(repo: Arc<InMemoryWorkspaceRepository>) {
    let service = MemoryService::new(repo);
    let loaded = service.load().await.expect("load should succeed");
    assert!(loaded.is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn saved_workspace_loads_unchanged(
    repo: Arc<InMemoryWorkspaceRepository>,
) -> Result<(), eyre::Report> {
    let store = populated_store()?;
    let service = MemoryService::new(repo);

    service.save(&store).await?;
    let loaded = service
        .load()
        .await?
        .ok_or_else(|| eyre::eyre!("expected a stored workspace"))?;

    eyre::ensure!(
        loaded.to_persisted() == store.snapshot().to_persisted(),
        "restored workspace differs from the saved one"
    );
    eyre::ensure!(loaded.task_count() == 2, "expected two tasks");
    eyre::ensure!(
        loaded.active_board().map(|board| board.title().as_str()) == Some("Work"),
        "active board was not restored"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn save_replaces_previous_workspace(
    repo: Arc<InMemoryWorkspaceRepository>,
) -> Result<(), eyre::Report> {
    let service = MemoryService::new(repo);
    let mut store = populated_store()?;
    service.save(&store).await?;

    let first_board = store
        .list_boards()
        .first()
        .map(|board| board.id())
        .ok_or_else(|| eyre::eyre!("expected a board"))?;
    store.delete_board(first_board)?;
    service.save(&store).await?;

    let loaded = service
        .load()
        .await?
        .ok_or_else(|| eyre::eyre!("expected a stored workspace"))?;
    eyre::ensure!(loaded.boards().len() == 1, "deleted board was restored");
    eyre::ensure!(loaded.task_count() == 0, "tasks of deleted board remain");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn malformed_document_is_a_serialization_error() {
    let service = MemoryService::new(Arc::new(InMemoryWorkspaceRepository::from_json(
        "{ not json",
    )));

    let result = service.load().await;

    assert!(matches!(
        result,
        Err(WorkspacePersistenceError::Repository(
            WorkspaceRepositoryError::Serialization(_)
        ))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn invalid_workspace_is_rejected_on_load() {
    let document = r#"{
        "boards": [{
            "id": "00000000-0000-0000-0000-000000000001",
            "title": "   ",
            "lists": [],
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-01T00:00:00Z"
        }]
    }"#;
    let service = MemoryService::new(Arc::new(InMemoryWorkspaceRepository::from_json(document)));

    let result = service.load().await;

    assert!(matches!(result, Err(WorkspacePersistenceError::Domain(_))));
}

#[rstest]
#[case::first_board(StoreConfig::default(), Some("Personal"))]
#[case::explicit_selection(StoreConfig::explicit_selection(), None)]
#[tokio::test(flavor = "multi_thread")]
async fn load_store_applies_active_board_default(
    #[case] config: StoreConfig,
    #[case] expected_active: Option<&str>,
) -> Result<(), eyre::Report> {
    let repo = Arc::new(InMemoryWorkspaceRepository::new());
    let mut store = populated_store()?;
    store.set_active_board(None)?;
    let service = MemoryService::new(Arc::clone(&repo));
    service.save(&store).await?;

    let restored = service
        .load_store(
            config,
            Arc::new(SequentialIdGenerator::new()),
            Arc::new(DefaultClock),
        )
        .await?;

    eyre::ensure!(
        restored.active_board().map(|board| board.title().as_str()) == expected_active,
        "unexpected active board after restore"
    );
    eyre::ensure!(restored.config() == config, "config was not applied");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn restored_store_keeps_generating_unique_identifiers(
    repo: Arc<InMemoryWorkspaceRepository>,
) -> Result<(), eyre::Report> {
    let service = WorkspacePersistenceService::new(repo);
    let store = populated_store()?;
    service.save(&store).await?;

    let mut restored = service
        .load_store(
            StoreConfig::default(),
            Arc::new(SequentialIdGenerator::new()),
            Arc::new(DefaultClock),
        )
        .await?;
    let board = restored
        .list_boards()
        .first()
        .cloned()
        .ok_or_else(|| eyre::eyre!("expected a board"))?;
    let list_id = board
        .lists()
        .first()
        .map(|list| list.id())
        .ok_or_else(|| eyre::eyre!("expected a list"))?;
    let task = restored.create_task(board.id(), list_id, &TaskFields::new("Fresh"))?;

    eyre::ensure!(
        restored.locate_task(task.id()).is_some(),
        "new task is not reachable"
    );
    eyre::ensure!(restored.workspace().task_count() == 3, "expected three tasks");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn load_store_without_saved_data_starts_empty(
    repo: Arc<InMemoryWorkspaceRepository>,
) -> Result<(), eyre::Report> {
    let service = MemoryService::new(repo);
    let restored = service
        .load_store(
            StoreConfig::default(),
            Arc::new(SequentialIdGenerator::new()),
            Arc::new(DefaultClock),
        )
        .await?;

    eyre::ensure!(restored.list_boards().is_empty(), "expected no boards");
    eyre::ensure!(
        restored.snapshot().to_persisted() == empty_store().snapshot().to_persisted(),
        "expected an empty workspace"
    );
    Ok(())
}
