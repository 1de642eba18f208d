//! When steps for task event dispatch BDD scenarios.

use super::world::{TaskDispatchWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;

#[when(r#"the task event arrives on channel "{channel}""#)]
fn task_event_arrives(world: &mut TaskDispatchWorld, channel: String) -> Result<(), eyre::Report> {
    let event = world
        .pending_event
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing pending task event in scenario world"))?;
    let payload = serde_json::to_vec(event).wrap_err("serialize task event payload")?;

    let result = run_async(world.listener.consume(&channel, &payload));
    world.last_result = Some(result);
    Ok(())
}
