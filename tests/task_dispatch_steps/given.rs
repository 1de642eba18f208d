//! Given steps for task event dispatch BDD scenarios.

use super::world::TaskDispatchWorld;
use crate::test_helpers::{at, task_without_history};
use core_valid_intraday_adapter::event::domain::{ProcessRun, RunId, TaskStatus};
use rstest_bdd_macros::given;
use std::str::FromStr;

#[given(r#"a task in status "{status}" with all input files"#)]
fn task_in_status(world: &mut TaskDispatchWorld, status: String) -> Result<(), eyre::Report> {
    let parsed = TaskStatus::from_str(&status)
        .map_err(|err| eyre::eyre!("invalid task status in scenario: {err}"))?;
    world.pending_event = Some(task_without_history(parsed));
    Ok(())
}

#[given("the task has been run before")]
fn task_has_been_run(world: &mut TaskDispatchWorld) -> Result<(), eyre::Report> {
    let event = world
        .pending_event
        .take()
        .ok_or_else(|| eyre::eyre!("missing pending task event in scenario world"))?;
    world.pending_event = Some(
        event.with_run_history([ProcessRun::new(RunId::new(), at("2025-10-02T15:00:00Z"))]),
    );
    Ok(())
}
