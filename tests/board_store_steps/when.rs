//! When steps for board store BDD scenarios.

use super::world::BoardWorld;
use rstest_bdd_macros::when;

#[when(r#"a list "{title}" is created"#)]
fn create_list(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    world.create_list(title)
}

#[when(r#"list "{list}" is deleted"#)]
fn delete_list(world: &mut BoardWorld, list: String) -> Result<(), eyre::Report> {
    let board_id = world.board_id()?;
    let list_id = world.list_id(&list)?;
    let deleted = world.store.delete_list(board_id, list_id);
    world.record(deleted);
    Ok(())
}

#[when(r#"list "{list}" is renamed to "{title}""#)]
fn rename_list(world: &mut BoardWorld, list: String, title: String) -> Result<(), eyre::Report> {
    let board_id = world.board_id()?;
    let list_id = world.list_id(&list)?;
    let renamed = world.store.update_list_title(board_id, list_id, title);
    world.record(renamed);
    Ok(())
}

#[when(r#"the repository "{url}" is connected"#)]
fn connect_repository(world: &mut BoardWorld, url: String) -> Result<(), eyre::Report> {
    world.connect_repository(&url)
}

#[when(r#"task "{task}" is moved to list "{list}" at position {position:usize}"#)]
fn move_task(
    world: &mut BoardWorld,
    task: String,
    list: String,
    position: usize,
) -> Result<(), eyre::Report> {
    let board_id = world.board_id()?;
    let task_id = world.task_id(&task)?;
    let to_list_id = world.list_id(&list)?;
    let from_list_id = world
        .store
        .locate_task(task_id)
        .map(|location| location.list_id)
        .ok_or_else(|| eyre::eyre!("task {task:?} is not on any list"))?;

    let moved = world
        .store
        .move_task(board_id, from_list_id, to_list_id, task_id, position);
    world.record(moved);
    Ok(())
}
