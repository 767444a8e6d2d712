//! Given steps for board store BDD scenarios.

use super::world::BoardWorld;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::board::domain::{Priority, TaskFields};

#[given(r#"a board "{board}" with a list "{list}""#)]
fn board_with_list(world: &mut BoardWorld, board: String, list: String) -> Result<(), eyre::Report> {
    let board_id = world
        .store
        .create_board(board)
        .wrap_err("create scenario board")?
        .id();
    let list_id = world
        .store
        .create_list(board_id, list.as_str())
        .wrap_err("create scenario list")?
        .id();

    world.board_id = Some(board_id);
    world.lists.insert(list, list_id);
    Ok(())
}

#[given(r#"list "{list}" holds a "{priority}" priority task "{title}""#)]
fn list_holds_task(
    world: &mut BoardWorld,
    list: String,
    priority: String,
    title: String,
) -> Result<(), eyre::Report> {
    let board_id = world.board_id()?;
    let list_id = world.list_id(&list)?;
    let level = Priority::try_from(priority.as_str()).wrap_err("parse step priority")?;
    let task_id = world
        .store
        .create_task(
            board_id,
            list_id,
            &TaskFields::new(title.as_str()).with_priority(level),
        )
        .wrap_err("create scenario task")?
        .id();

    world.tasks.insert(title, task_id);
    Ok(())
}

#[given(r#"a list "{title}" is created"#)]
fn list_created(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    world.create_list(title)?;
    world
        .last_error
        .take()
        .map_or(Ok(()), |err| Err(eyre::eyre!("list creation failed: {err}")))
}

#[given(r#"the repository "{url}" is connected"#)]
fn repository_connected(world: &mut BoardWorld, url: String) -> Result<(), eyre::Report> {
    world.connect_repository(&url)?;
    world
        .last_error
        .take()
        .map_or(Ok(()), |err| Err(eyre::eyre!("repository connection failed: {err}")))
}
