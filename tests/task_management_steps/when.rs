//! When steps for task management BDD scenarios.

use super::world::{TaskWorld, run_async};
use rstest_bdd_macros::when;
use tasktrack::task::domain::TaskId;

#[when(r#"the task titled "{title}" is requested"#)]
fn request_by_title(world: &mut TaskWorld, title: String) {
    world.last_lookup_result = Some(run_async(world.service.get_task_by_title(&title)));
}

#[when(r#"the first task with status "{status}" is requested"#)]
fn request_by_status(world: &mut TaskWorld, status: String) {
    world.last_lookup_result = Some(run_async(world.service.get_task_by_status(&status)));
}

#[when("all tasks are requested")]
fn request_all(world: &mut TaskWorld) -> Result<(), eyre::Report> {
    let listing = run_async(world.service.get_all_tasks())
        .map_err(|err| eyre::eyre!("listing failed: {err}"))?;
    world.last_listing = Some(listing);
    Ok(())
}

#[when("a task with an unknown identifier is deleted")]
fn delete_unknown(world: &mut TaskWorld) {
    world.last_delete_result = Some(run_async(world.service.delete_task(TaskId::new())));
}
