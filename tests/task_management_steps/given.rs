//! Given steps for task management BDD scenarios.

use super::world::{TaskWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use tasktrack::task::domain::TaskDto;

#[given(r#"a stored task "{title}" described as "{description}" with status "{status}""#)]
fn stored_task(
    world: &mut TaskWorld,
    title: String,
    description: String,
    status: String,
) -> Result<(), eyre::Report> {
    run_async(
        world
            .service
            .create_task(TaskDto::new(title, description, status)),
    )
    .wrap_err("store background task")?;
    Ok(())
}
