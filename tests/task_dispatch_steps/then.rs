//! Then steps for task event dispatch BDD scenarios.

use super::world::TaskDispatchWorld;
use core_valid_intraday_adapter::listener::{HandlingFailure, ListenerError, MappingError};
use rstest_bdd_macros::then;

#[then("one computation request is submitted")]
fn one_request_submitted(world: &TaskDispatchWorld) -> Result<(), eyre::Report> {
    let submitted = world.client.requests().len();
    if submitted != 1 {
        return Err(eyre::eyre!("expected one submitted request, found {submitted}"));
    }
    Ok(())
}

#[then("no computation request is submitted")]
fn no_request_submitted(world: &TaskDispatchWorld) -> Result<(), eyre::Report> {
    let requests = world.client.requests();
    if !requests.is_empty() {
        return Err(eyre::eyre!("expected no submitted request, found {requests:?}"));
    }
    Ok(())
}

#[then(r#"the submitted request is flagged as "{origin}""#)]
fn submitted_request_flagged_as(
    world: &TaskDispatchWorld,
    origin: String,
) -> Result<(), eyre::Report> {
    let expected_automatic = match origin.as_str() {
        "manual" => false,
        "automatic" => true,
        other => return Err(eyre::eyre!("invalid trigger origin in scenario: {other}")),
    };
    let requests = world.client.requests();
    let request = requests
        .last()
        .ok_or_else(|| eyre::eyre!("missing submitted request"))?;

    if request.launched_automatically() != expected_automatic {
        return Err(eyre::eyre!(
            "expected launched_automatically = {expected_automatic}, found {}",
            request.launched_automatically()
        ));
    }
    Ok(())
}

#[then("handling fails because the task has no run history")]
fn handling_fails_without_history(world: &TaskDispatchWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing handling result"))?;

    let Err(ListenerError::Adapter(err)) = result else {
        return Err(eyre::eyre!("expected an adapter error, got {result:?}"));
    };
    if !matches!(
        err.cause(),
        HandlingFailure::Mapping(MappingError::NoRunHistory { .. })
    ) {
        return Err(eyre::eyre!("expected NoRunHistory failure, got {err:?}"));
    }
    Ok(())
}
