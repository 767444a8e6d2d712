//! Then steps for board store BDD scenarios.

use super::world::{BoardWorld, titles};
use rstest_bdd_macros::then;
use taskboard::board::{domain::BoardDomainError, services::TaskStoreError};

fn list_titles(world: &BoardWorld) -> Result<Vec<String>, eyre::Report> {
    let board = world
        .store
        .get_board(world.board_id()?)
        .ok_or_else(|| eyre::eyre!("scenario board no longer exists"))?;
    Ok(board
        .lists()
        .iter()
        .map(|list| list.title().as_str().to_owned())
        .collect())
}

#[then(r#"the board lists are "{expected}""#)]
fn board_lists_are(world: &BoardWorld, expected: String) -> Result<(), eyre::Report> {
    let actual = list_titles(world)?;
    eyre::ensure!(
        actual == titles(&expected),
        "expected lists {expected:?}, found {actual:?}"
    );
    Ok(())
}

#[then(r#"list "{list}" is empty"#)]
fn list_is_empty(world: &BoardWorld, list: String) -> Result<(), eyre::Report> {
    let found = world
        .store
        .get_list(world.board_id()?, world.list_id(&list)?)
        .ok_or_else(|| eyre::eyre!("list {list:?} not found"))?;
    eyre::ensure!(found.tasks().is_empty(), "list {list:?} still holds tasks");
    Ok(())
}

#[then(r#"list "{list}" holds tasks "{expected}""#)]
fn list_holds_tasks(world: &BoardWorld, list: String, expected: String) -> Result<(), eyre::Report> {
    let found = world
        .store
        .get_list(world.board_id()?, world.list_id(&list)?)
        .ok_or_else(|| eyre::eyre!("list {list:?} not found"))?;
    let actual: Vec<String> = found
        .tasks()
        .iter()
        .map(|task| task.title().as_str().to_owned())
        .collect();
    eyre::ensure!(
        actual == titles(&expected),
        "expected tasks {expected:?} in {list:?}, found {actual:?}"
    );
    Ok(())
}

#[then(r#"task "{task}" can no longer be found"#)]
fn task_is_gone(world: &BoardWorld, task: String) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&task)?;
    eyre::ensure!(
        world.store.locate_task(task_id).is_none(),
        "task {task:?} is still reachable"
    );
    Ok(())
}

#[then("the workspace holds {count:usize} tasks")]
fn workspace_task_count(world: &BoardWorld, count: usize) -> Result<(), eyre::Report> {
    let actual = world.store.workspace().task_count();
    eyre::ensure!(actual == count, "expected {count} tasks, found {actual}");
    Ok(())
}

#[then(r#"the board repository is "{expected}""#)]
fn board_repository_is(world: &BoardWorld, expected: String) -> Result<(), eyre::Report> {
    let board = world
        .store
        .get_board(world.board_id()?)
        .ok_or_else(|| eyre::eyre!("scenario board no longer exists"))?;
    let actual = board.github_repo().map(|repo| repo.as_str());
    eyre::ensure!(
        actual == Some(expected.as_str()),
        "expected repository {expected:?}, found {actual:?}"
    );
    Ok(())
}

#[then("the operation fails with an invalid repository error")]
fn fails_with_invalid_repository(world: &BoardWorld) -> Result<(), eyre::Report> {
    let error = world.last_error.as_ref();
    eyre::ensure!(
        matches!(
            error,
            Some(TaskStoreError::Domain(BoardDomainError::InvalidRepoUrl(_)))
        ),
        "expected invalid repository error, got {error:?}"
    );
    Ok(())
}

#[then("the operation fails with an invalid title error")]
fn fails_with_invalid_title(world: &BoardWorld) -> Result<(), eyre::Report> {
    let error = world.last_error.as_ref();
    eyre::ensure!(
        matches!(
            error,
            Some(TaskStoreError::Domain(BoardDomainError::InvalidTitle(_)))
        ),
        "expected invalid title error, got {error:?}"
    );
    Ok(())
}
